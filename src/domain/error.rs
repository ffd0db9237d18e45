//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated
//! or when a caller breaks the input contract of the optimizer. Structural
//! infeasibility is *not* an error: it is reported through
//! [`LineupStatus::Infeasible`](super::lineup::LineupStatus).
//!
//! # Examples
//!
//! ```
//! use startingxi::domain::error::DomainError;
//! use startingxi::domain::{Formation, SubPosition};
//!
//! let result = Formation::try_new("broken", "", vec![(SubPosition::GK, 1)]);
//! assert!(matches!(result, Err(DomainError::MalformedFormation { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::PlayerId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Player identifiers must be non-empty.
    #[error("player id cannot be empty")]
    EmptyPlayerId,

    /// Prices are expressed in millions and can never be negative.
    #[error("price for player {id} must be non-negative, got {price}")]
    NegativePrice {
        /// The offending player.
        id: PlayerId,
        /// The invalid price.
        price: Decimal,
    },

    /// Player ids must be unique within a pool.
    #[error("duplicate player id {id} in pool")]
    DuplicatePlayer {
        /// The repeated id.
        id: PlayerId,
    },

    /// A lineup needs at least eleven available players.
    #[error("pool has {available} available players, at least {required} required")]
    InsufficientPool {
        /// Players handed to the optimizer.
        available: usize,
        /// Players a lineup needs.
        required: usize,
    },

    /// Budgets are inclusive ceilings and can never be negative.
    #[error("budget must be non-negative, got {budget}")]
    NegativeBudget {
        /// The invalid budget.
        budget: Decimal,
    },

    /// Formations must describe exactly eleven distinct slots.
    #[error("formation {name} is malformed: {reason}")]
    MalformedFormation {
        /// Formation name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Formation name not present in the registry.
    #[error("unknown formation: {0}")]
    UnknownFormation(String),

    /// Sub-position code outside the fixed enumeration.
    #[error("unknown position: {0}")]
    UnknownPosition(String),

    /// Strategy name outside {balanced, offensive, defensive}.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Weight vectors must be non-negative and sum to one.
    #[error("invalid weights for {owner}: {reason}")]
    InvalidWeights {
        /// What the weights belong to (a position or a strategy).
        owner: String,
        /// What is wrong with them.
        reason: String,
    },
}
