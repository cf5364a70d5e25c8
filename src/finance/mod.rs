//! Future value calculations.
//!
//! - [`future_value`](mod@future_value) - compound growth and the monthly breakdown
//! - [`projection`] - a full calculation ready to print or export
//!
//! # Examples
//!
//! ```
//! use future_value_tools::finance::{future_value, render_breakdown};
//!
//! let fv = future_value(1000.0, 0.01, 2);
//! assert!((fv - 1020.10).abs() < 1e-9);
//!
//! for row in render_breakdown(1000.0, 0.01, 2) {
//!     println!("{:>5} {:>14}", row.month, row.amount);
//! }
//! ```

pub mod future_value;
pub mod projection;

pub use future_value::{future_value, render_breakdown, Breakdown, BreakdownRow, MAX_MONTHS};
pub use projection::{MoneyStyle, Projection, ProjectionRow};
