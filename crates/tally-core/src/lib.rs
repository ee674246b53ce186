//! Core Tally library (catalog state machine, seed config, logging).

pub mod catalog;
pub mod config;
pub mod logging;
