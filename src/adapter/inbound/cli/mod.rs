//! CLI module graph.

pub mod availability;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod formations;
pub mod optimize;
pub mod output;
pub mod paths;
pub mod recommend;
pub mod squad;
