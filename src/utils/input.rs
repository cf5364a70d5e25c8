//! Typed console input.
//!
//! Each kind of value has its own parsing function returning a
//! [`InputError`] instead of relying on stream extraction. [`prompt_value`]
//! ties them to a reader/writer pair and keeps asking until the answer is
//! usable, which is how the interactive command collects its inputs.

use crate::finance::MAX_MONTHS;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Smallest value accepted for any calculator input.
pub const MIN_INPUT: f64 = 0.0;

/// Shown when a line cannot be parsed at all.
pub const NOT_A_NUMBER_MESSAGE: &str = "That is not a valid number. Try again!";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("You must type a number greater or equal than {min}. Try again!")]
    InvalidInput { min: f64 },

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("'{input}' is not a whole number")]
    NotAnInteger { input: String },

    #[error("{input} is too large, the maximum is {max}. Try again!")]
    OutOfRange { input: String, max: u32 },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// True for errors the user can fix by typing something else.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Parse a finite real number, ignoring surrounding whitespace.
pub fn parse_real(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            input: trimmed.to_string(),
        }),
    }
}

/// Parse a whole number, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::NotAnInteger {
        input: trimmed.to_string(),
    })
}

/// Read one line without its line terminator. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}

pub fn ensure_at_least(value: f64, min: f64) -> Result<(), InputError> {
    if value < min {
        return Err(InputError::InvalidInput { min });
    }
    Ok(())
}

/// Real number that is at least [`MIN_INPUT`].
pub fn non_negative_real(text: &str) -> Result<f64, InputError> {
    let value = parse_real(text)?;
    ensure_at_least(value, MIN_INPUT)?;
    Ok(value)
}

/// Rejects month counts above [`MAX_MONTHS`].
pub fn ensure_months_in_range(months: i64) -> Result<u32, InputError> {
    u32::try_from(months)
        .ok()
        .filter(|&months| months <= MAX_MONTHS)
        .ok_or_else(|| InputError::OutOfRange {
            input: months.to_string(),
            max: MAX_MONTHS,
        })
}

/// Month count between [`MIN_INPUT`] and [`MAX_MONTHS`].
pub fn month_count(text: &str) -> Result<u32, InputError> {
    let value = parse_integer(text)?;
    ensure_at_least(value as f64, MIN_INPUT)?;
    ensure_months_in_range(value)
}

/// Write `message`, read a line and parse it, repeating until `parse`
/// succeeds.
///
/// Rejected answers are explained on `writer` before asking again. Returns
/// `Ok(None)` when the input ends before a valid answer arrives.
pub fn prompt_value<R, W, T, F>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    parse: F,
) -> Result<Option<T>, InputError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        write!(writer, "{}", message)?;
        writer.flush()?;

        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };

        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e @ (InputError::InvalidInput { .. } | InputError::OutOfRange { .. })) => {
                writeln!(writer, "{}", e)?;
            }
            Err(e) if e.is_retryable() => {
                writeln!(writer, "{}", NOT_A_NUMBER_MESSAGE)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Answer to "keep calculating?". Only `n` and `no`, in any case, stop.
pub fn wants_to_continue(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer != "n" && answer != "no"
}
