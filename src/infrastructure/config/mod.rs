//! Infrastructure configuration modules.

pub mod formation;
pub mod logging;
pub mod optimizer;
pub mod scorer;
pub mod settings;

pub use settings::Config;
