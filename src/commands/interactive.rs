//! Interactive calculator session.
//!
//! Asks for the present value, the monthly interest rate and the number of
//! months, prints the headline and the breakdown table, then asks whether to
//! keep calculating. Negative or unparseable answers are explained and asked
//! again.
//!
//! # Usage
//!
//! ```bash
//! future-value
//! future-value interactive
//! ```
//!
//! The session ends when the answer to
//! "Would you like to keep calculating the Future Value (y/n)?" is `n` or
//! `no` (any case), or when input ends.

use crate::finance::{MoneyStyle, Projection};
use crate::utils::input::{
    month_count, non_negative_real, prompt_value, read_line, wants_to_continue,
};
use crate::utils::table::write_report;
use anyhow::Result;
use std::io::{self, BufRead, Write};

const PRESENT_VALUE_PROMPT: &str = "  Enter the account's Present Value: ";
const RATE_PROMPT: &str = "  Enter the monthly interest rate: ";
const MONTHS_PROMPT: &str =
    "  Enter the number of months that the money will be left in the account: ";
const CONTINUE_PROMPT: &str = "  Would you like to keep calculating the Future Value (y/n)? ";

/// Run the session on stdin/stdout.
pub fn run(style: MoneyStyle) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &style)?;
    Ok(())
}

/// Run the session on any input/output pair.
///
/// Returns how many calculations were completed.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    style: &MoneyStyle,
) -> Result<usize> {
    let mut completed = 0;

    loop {
        writeln!(out)?;

        let Some(present_value) = prompt_value(input, out, PRESENT_VALUE_PROMPT, non_negative_real)?
        else {
            break;
        };
        let Some(monthly_rate) = prompt_value(input, out, RATE_PROMPT, non_negative_real)? else {
            break;
        };
        let Some(months) = prompt_value(input, out, MONTHS_PROMPT, month_count)? else {
            break;
        };

        writeln!(out)?;
        let projection = Projection::new(present_value, monthly_rate, months, style.clone());
        write_report(out, &projection)?;
        writeln!(out)?;
        completed += 1;

        write!(out, "{}", CONTINUE_PROMPT)?;
        out.flush()?;
        match read_line(input)? {
            Some(answer) if wants_to_continue(&answer) => continue,
            _ => break,
        }
    }

    out.flush()?;
    Ok(completed)
}
