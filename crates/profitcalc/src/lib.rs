//! Application logic for the profitability calculator binary.

pub mod app;
pub mod config;
pub mod errors;
