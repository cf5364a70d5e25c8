//! Utility functions and helpers.
//!
//! This module provides common functionality used by both commands:
//!
//! - [`format`] - Thousands grouping, fixed decimals and currency symbols
//! - [`input`] - Typed console parsing with re-prompting
//! - [`table`] - Headline and month-by-month table rendering
//!
//! # Examples
//!
//! ## Formatting money
//!
//! ```
//! use future_value_tools::utils::format::{monetize, SymbolPlacement};
//!
//! let amount = monetize(1126.826, 2, SymbolPlacement::Append, "USD");
//! assert_eq!(amount, "1,126.83 USD");
//! ```
//!
//! ## Parsing a typed answer
//!
//! ```
//! use future_value_tools::utils::input::non_negative_real;
//!
//! assert_eq!(non_negative_real(" 0.01 ").unwrap(), 0.01);
//! assert!(non_negative_real("-1").is_err());
//! ```

pub mod format;
pub mod input;
pub mod table;
