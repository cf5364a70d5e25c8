//! Compound future value and the month-by-month breakdown.

use crate::utils::format::{monetize, SymbolPlacement, DEFAULT_PRECISION, TABLE_SYMBOL};
use std::ops::RangeInclusive;

/// Largest month count the commands accept (1,000 years).
pub const MAX_MONTHS: u32 = 12_000;

/// Value of `present_value` after compounding at `monthly_rate` for `months`
/// periods: `present_value * (1 + monthly_rate) ^ months`.
///
/// Zero months returns `present_value` unchanged. Negative `months` discount
/// instead of compound; callers are expected to reject them beforehand but
/// the result is still well defined.
///
/// # Examples
///
/// ```
/// use future_value_tools::finance::future_value;
///
/// let fv = future_value(1000.0, 0.01, 12);
/// assert!((fv - 1126.83).abs() < 0.01);
/// ```
pub fn future_value(present_value: f64, monthly_rate: f64, months: i32) -> f64 {
    present_value * (1.0 + monthly_rate).powi(months)
}

/// One line of the breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// 1-based month index
    pub month: u32,
    /// Unformatted future value at the end of `month`
    pub value: f64,
    /// `value` formatted for the table, symbol appended
    pub amount: String,
}

/// Lazy iterator over the months `1..=months`.
///
/// Cloning yields an independent iterator starting from the same position,
/// so a breakdown can be walked more than once.
#[derive(Debug, Clone)]
pub struct Breakdown {
    present_value: f64,
    monthly_rate: f64,
    months: RangeInclusive<u32>,
    precision: usize,
    symbol: String,
}

impl Breakdown {
    /// Breakdown with custom table formatting.
    pub fn with_format(
        present_value: f64,
        monthly_rate: f64,
        months: u32,
        precision: usize,
        symbol: &str,
    ) -> Self {
        Self {
            present_value,
            monthly_rate,
            months: 1..=months,
            precision,
            symbol: symbol.to_string(),
        }
    }

    fn row(&self, month: u32) -> BreakdownRow {
        // powi takes i32; counts up to MAX_MONTHS never reach the clamp
        let periods = i32::try_from(month).unwrap_or(i32::MAX);
        let value = future_value(self.present_value, self.monthly_rate, periods);
        BreakdownRow {
            month,
            value,
            amount: monetize(value, self.precision, SymbolPlacement::Append, &self.symbol),
        }
    }
}

impl Iterator for Breakdown {
    type Item = BreakdownRow;

    fn next(&mut self) -> Option<Self::Item> {
        let month = self.months.next()?;
        Some(self.row(month))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let month = self.months.nth(n)?;
        Some(self.row(month))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.months.size_hint()
    }
}

impl ExactSizeIterator for Breakdown {}

/// Rows for months `1..=months`, each formatted as `"1,234.56 USD"`.
/// Empty when `months` is zero.
pub fn render_breakdown(present_value: f64, monthly_rate: f64, months: u32) -> Breakdown {
    Breakdown::with_format(
        present_value,
        monthly_rate,
        months,
        DEFAULT_PRECISION,
        TABLE_SYMBOL,
    )
}
