//! # Future Value Tools
//!
//! Compound future value of an account balance, with a month-by-month
//! breakdown rendered as a console table.
//!
//! ## Overview
//!
//! The core is a pair of pure, stateless components:
//!
//! - [`finance`] - `future_value = present_value * (1 + monthly_rate) ^ months`
//!   and a lazy breakdown of every month up to `months`
//! - [`utils::format`] - thousands grouping, fixed-precision decimals and
//!   currency symbol placement
//!
//! Around them sit the console pieces:
//!
//! - [`utils::input`] - typed parsing of console answers with re-prompting
//! - [`utils::table`] - the headline sentence and the ASCII table
//! - [`commands`] - the interactive session and the single-shot calculation
//!
//! Nothing here holds state, so every function is safe to call from any
//! number of threads.
//!
//! ## Example Usage
//!
//! ```bash
//! # Interactive session (default)
//! future-value
//!
//! # One calculation, exported to CSV
//! future-value calculate --present-value 1000 --rate 0.01 --months 12 --output fv.csv
//!
//! # Shell completion
//! future-value generate-completion bash > future-value.bash
//! ```
//!
//! ## Library
//!
//! ```
//! use future_value_tools::finance::{future_value, render_breakdown};
//! use future_value_tools::utils::format::dollars;
//!
//! let fv = future_value(1000.0, 0.01, 12);
//! assert_eq!(dollars(fv), "$ 1,126.83");
//!
//! let last = render_breakdown(1000.0, 0.01, 12).last().unwrap();
//! assert_eq!(last.amount, "1,126.83 USD");
//! ```

pub mod commands;
pub mod finance;
pub mod utils;
