//! Command implementations.
//!
//! - [`interactive`] - Prompt for the inputs, print the report, repeat on request
//! - [`calculate`] - One calculation from flags, with optional CSV/JSON export

pub mod calculate;
pub mod interactive;
