//! A complete calculation: inputs, headline result and every month.
//!
//! This is what the export formats serialize and what the report renders.

use super::future_value::{future_value, Breakdown};
use crate::utils::format::{DEFAULT_PRECISION, DEFAULT_SYMBOL, TABLE_SYMBOL};
use serde::Serialize;

/// Formatting choices for a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyStyle {
    pub precision: usize,
    /// Prepended to the headline amounts
    pub headline_symbol: String,
    /// Appended to the table amounts
    pub table_symbol: String,
}

impl Default for MoneyStyle {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            headline_symbol: DEFAULT_SYMBOL.to_string(),
            table_symbol: TABLE_SYMBOL.to_string(),
        }
    }
}

/// Serialized form of one breakdown row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionRow {
    pub month: u32,
    pub future_value: f64,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub present_value: f64,
    pub monthly_rate: f64,
    pub months: u32,
    pub future_value: f64,
    pub rows: Vec<ProjectionRow>,
    #[serde(skip)]
    pub style: MoneyStyle,
}

impl Projection {
    /// Every row is built up front, so `months` should already be bounded
    /// by [`MAX_MONTHS`](super::MAX_MONTHS).
    pub fn new(present_value: f64, monthly_rate: f64, months: u32, style: MoneyStyle) -> Self {
        let periods = i32::try_from(months).unwrap_or(i32::MAX);
        let rows = Breakdown::with_format(
            present_value,
            monthly_rate,
            months,
            style.precision,
            &style.table_symbol,
        )
        .map(|row| ProjectionRow {
            month: row.month,
            future_value: round_to(row.value, style.precision),
            amount: row.amount,
        })
        .collect();

        Self {
            present_value,
            monthly_rate,
            months,
            future_value: future_value(present_value, monthly_rate, periods),
            rows,
            style,
        }
    }
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
