//! Times tables quiz: the quiz state machine, preference storage and the
//! presentation config. The terminal front end lives in the binary.

pub mod config;
pub mod quiz;
pub mod store;
