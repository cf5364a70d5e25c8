//! Single-shot calculation from command-line flags.
//!
//! Prints the same headline and table as the interactive session and can
//! export the breakdown for use elsewhere.
//!
//! # Usage
//!
//! ```bash
//! # Print the report
//! future-value calculate --present-value 1000 --rate 0.01 --months 12
//!
//! # Export every month to CSV (format inferred from the extension)
//! future-value calculate --present-value 1000 --rate 0.01 --months 12 --output fv.csv
//!
//! # JSON export with a different table currency
//! future-value calculate --present-value 1000 --rate 0.01 --months 12 \
//!     --table-symbol EUR --output fv.json
//! ```
//!
//! # Output
//!
//! CSV columns: `month`, `future_value` (rounded to the precision) and
//! `amount` (as shown in the table). JSON holds the inputs, the final value,
//! every row and a `generated_at` timestamp.

use crate::finance::{MoneyStyle, Projection};
use crate::utils::format::MAX_PRECISION;
use crate::utils::input::{ensure_at_least, ensure_months_in_range, MIN_INPUT};
use crate::utils::table::write_report;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Explicit format if given, otherwise `.json` files are JSON and
    /// everything else is CSV.
    pub fn detect(output: &str, format: Option<&str>) -> Result<Self> {
        match format.map(str::to_lowercase).as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some(other) => anyhow::bail!("Invalid format '{}'. Use 'csv' or 'json'", other),
            None => {
                let is_json = Path::new(output)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                Ok(if is_json { Self::Json } else { Self::Csv })
            }
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    projection: &'a Projection,
}

/// Validate the inputs and build the projection.
pub fn project(
    present_value: f64,
    monthly_rate: f64,
    months: i64,
    style: MoneyStyle,
) -> Result<Projection> {
    ensure_at_least(present_value, MIN_INPUT).context("Invalid present value")?;
    ensure_at_least(monthly_rate, MIN_INPUT).context("Invalid monthly rate")?;
    ensure_at_least(months as f64, MIN_INPUT).context("Invalid number of months")?;
    let months = ensure_months_in_range(months).context("Invalid number of months")?;

    if !present_value.is_finite() || !monthly_rate.is_finite() {
        anyhow::bail!("Present value and rate must be finite numbers");
    }
    if style.precision > MAX_PRECISION {
        anyhow::bail!(
            "Precision {} is too large, the maximum is {}",
            style.precision,
            MAX_PRECISION
        );
    }

    Ok(Projection::new(present_value, monthly_rate, months, style))
}

/// Write the projection to `output`. Returns the number of rows written.
pub fn export(projection: &Projection, output: &str, format: ExportFormat) -> Result<usize> {
    let output_file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output))?;

    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(output_file);
            for row in &projection.rows {
                writer
                    .serialize(row)
                    .context("Failed to write CSV record")?;
            }
            writer.flush().context("Failed to flush CSV writer")?;
        }
        ExportFormat::Json => {
            let mut writer = BufWriter::new(output_file);
            let export = JsonExport {
                generated_at: Utc::now(),
                projection,
            };
            serde_json::to_writer_pretty(&mut writer, &export)
                .context("Failed to write JSON output")?;
            writer.flush()?;
        }
    }

    Ok(projection.rows.len())
}

/// Print the report to `out` and export it if `output` is set.
pub fn run_to<W: Write>(
    out: &mut W,
    present_value: f64,
    monthly_rate: f64,
    months: i64,
    style: MoneyStyle,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let export_format = output
        .map(|path| ExportFormat::detect(path, format))
        .transpose()?;

    let projection = project(present_value, monthly_rate, months, style)?;

    writeln!(out)?;
    write_report(out, &projection)?;
    out.flush()?;

    if let (Some(output), Some(export_format)) = (output, export_format) {
        let rows = export(&projection, output, export_format)?;
        eprintln!(
            "\nExported {} row{} to {} ({:?})",
            rows,
            if rows == 1 { "" } else { "s" },
            output,
            export_format
        );
    }

    Ok(())
}

pub fn run(
    present_value: f64,
    monthly_rate: f64,
    months: i64,
    style: MoneyStyle,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let stdout = io::stdout();
    run_to(
        &mut stdout.lock(),
        present_value,
        monthly_rate,
        months,
        style,
        output,
        format,
    )
}
