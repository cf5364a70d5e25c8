//! Number and currency formatting utilities.
//!
//! This module provides the formatting functions used for every amount the
//! calculator prints: thousands grouping, fixed-precision decimals and
//! currency symbol placement.

/// Character inserted between groups of three digits.
pub const GROUPING_SEPARATOR: char = ',';

/// Decimal places used when none are requested explicitly.
pub const DEFAULT_PRECISION: usize = 2;

/// Symbol used for headline amounts.
pub const DEFAULT_SYMBOL: &str = "$";

/// Symbol used for breakdown table amounts.
pub const TABLE_SYMBOL: &str = "USD";

/// Largest precision an `f64` can meaningfully render.
pub const MAX_PRECISION: usize = 15;

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `"$ 1,234.50"`
    Prepend,
    /// `"1,234.50 USD"`
    Append,
}

/// Formats an unsigned integer with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use future_value_tools::utils::format::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(1000), "1,000");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(GROUPING_SEPARATOR);
        }
        result.push(c);
    }
    result
}

/// Formats a real number with grouped thousands and exactly `precision`
/// decimal places.
///
/// The fractional part is rounded half away from zero. When it rounds up to
/// a whole unit the integer part is carried, so `0.999` at two decimals is
/// `"1.00"`. A precision of zero renders no decimal point.
///
/// Values are expected to be non-negative and within `u64` range. Negative
/// values get a leading `-`, larger magnitudes saturate at `u64::MAX` and
/// NaN renders as zero.
///
/// # Examples
///
/// ```
/// use future_value_tools::utils::format::format_fixed;
///
/// assert_eq!(format_fixed(1234.5, 2), "1,234.50");
/// assert_eq!(format_fixed(0.999, 2), "1.00");
/// assert_eq!(format_fixed(1234.5, 0), "1,235");
/// ```
pub fn format_fixed(value: f64, precision: usize) -> String {
    debug_assert!(
        precision <= MAX_PRECISION,
        "precision {} exceeds {}",
        precision,
        MAX_PRECISION
    );

    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let scale = 10u64.pow(precision as u32);

    let mut integer_part = whole as u64;
    let mut fraction_digits = ((magnitude - whole) * scale as f64).round() as u64;
    if fraction_digits >= scale {
        integer_part = integer_part.saturating_add(1);
        fraction_digits -= scale;
    }

    // -0.001 at two decimals is "0.00", not "-0.00"
    let sign = if value < 0.0 && (integer_part > 0 || fraction_digits > 0) {
        "-"
    } else {
        ""
    };

    if precision == 0 {
        format!("{}{}", sign, group_thousands(integer_part))
    } else {
        format!(
            "{}{}.{:0width$}",
            sign,
            group_thousands(integer_part),
            fraction_digits,
            width = precision
        )
    }
}

/// Formats an amount as money, with `symbol` separated from the amount by a
/// single space on the requested side.
///
/// # Examples
///
/// ```
/// use future_value_tools::utils::format::{monetize, SymbolPlacement};
///
/// assert_eq!(monetize(1234.5, 2, SymbolPlacement::Prepend, "$"), "$ 1,234.50");
/// assert_eq!(monetize(1234.5, 2, SymbolPlacement::Append, "USD"), "1,234.50 USD");
/// ```
pub fn monetize(value: f64, precision: usize, placement: SymbolPlacement, symbol: &str) -> String {
    let amount = format_fixed(value, precision);
    match placement {
        SymbolPlacement::Prepend => format!("{} {}", symbol, amount),
        SymbolPlacement::Append => format!("{} {}", amount, symbol),
    }
}

/// Headline style: two decimals, `$` in front.
pub fn dollars(value: f64) -> String {
    monetize(
        value,
        DEFAULT_PRECISION,
        SymbolPlacement::Prepend,
        DEFAULT_SYMBOL,
    )
}
