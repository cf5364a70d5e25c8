//! Console report: the headline sentence and the month-by-month table.

use crate::finance::{Projection, ProjectionRow};
use crate::utils::format::{monetize, SymbolPlacement};
use std::io::{self, Write};

const MARGIN: &str = "  ";
const RULE: &str = "--------------------------";
const HEADER: &str = "| Month |  Future Value  |";

/// Write the headline describing the inputs and the final value.
pub fn write_headline<W: Write>(out: &mut W, projection: &Projection) -> io::Result<()> {
    let style = &projection.style;
    let headline = |value: f64| {
        monetize(
            value,
            style.precision,
            SymbolPlacement::Prepend,
            &style.headline_symbol,
        )
    };

    writeln!(
        out,
        "{}The Future Value of the account, starting with an initial capital of {},",
        MARGIN,
        headline(projection.present_value)
    )?;
    writeln!(
        out,
        "{}with a monthly interest rate of {:.2} ({:.2} %),",
        MARGIN,
        projection.monthly_rate,
        projection.monthly_rate * 100.0
    )?;
    writeln!(
        out,
        "{}and after {} month{}, is equal to: {}",
        MARGIN,
        projection.months,
        if projection.months == 1 { "" } else { "s" },
        headline(projection.future_value)
    )?;
    writeln!(
        out,
        "{}And that figure can be broken down month by month as follows:",
        MARGIN
    )
}

/// Write the bordered breakdown table, one row and rule per month.
pub fn write_table<W: Write>(out: &mut W, rows: &[ProjectionRow]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}{}", MARGIN, RULE)?;
    writeln!(out, "{}{}", MARGIN, HEADER)?;
    writeln!(out, "{}{}", MARGIN, RULE)?;
    for row in rows {
        writeln!(out, "{}| {:>5} | {:>14} |", MARGIN, row.month, row.amount)?;
        writeln!(out, "{}{}", MARGIN, RULE)?;
    }
    Ok(())
}

/// Headline followed by the table.
pub fn write_report<W: Write>(out: &mut W, projection: &Projection) -> io::Result<()> {
    write_headline(out, projection)?;
    write_table(out, &projection.rows)
}
