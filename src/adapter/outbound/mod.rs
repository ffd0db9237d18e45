//! Outbound adapters (driven side).

pub mod dataset;
