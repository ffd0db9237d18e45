use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use startingxi::domain::{Formation, FormationRegistry, Player, SubPosition};

/// Slots of the default 4-3-3 in pitch order.
pub const FOUR_THREE_THREE: [SubPosition; 11] = {
    use SubPosition::*;
    [GK, CB, CB, RB, LB, CM, CM, CAM, LW, RW, ST]
};

pub fn formation(name: &str) -> Formation {
    FormationRegistry::default()
        .get(name)
        .expect("built-in formation")
        .clone()
}

pub fn player(id: &str, position: SubPosition, price: Decimal, power: f64) -> Player {
    Player::try_new(id, format!("Player {id}"), "Home", position, price)
        .expect("valid player")
        .with_rating(70.0, 6.0)
        .with_powers(power, power)
}

/// One native player per slot, ids `p01..p11`, all priced at 10.
pub fn exact_pool(slots: &[SubPosition]) -> Vec<Player> {
    slots
        .iter()
        .enumerate()
        .map(|(i, pos)| player(&format!("p{:02}", i + 1), *pos, dec!(10), 50.0))
        .collect()
}

/// Two natives per 4-3-3 slot: a star (`s..`, price 15, power 80) and a
/// cheap backup (`c..`, price 5, power 40).
pub fn deep_pool() -> Vec<Player> {
    FOUR_THREE_THREE
        .iter()
        .enumerate()
        .flat_map(|(i, pos)| {
            [
                player(&format!("s{:02}", i + 1), *pos, dec!(15), 80.0),
                player(&format!("c{:02}", i + 1), *pos, dec!(5), 40.0),
            ]
        })
        .collect()
}
