#![allow(dead_code)]

pub mod architecture;
pub mod dataset;
pub mod squad;
