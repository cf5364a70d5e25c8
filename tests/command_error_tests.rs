use future_value_tools::commands::calculate;
use future_value_tools::finance::MoneyStyle;
use tempfile::TempDir;

fn run_quiet(
    present_value: f64,
    rate: f64,
    months: i64,
    output: Option<&str>,
    format: Option<&str>,
) -> anyhow::Result<String> {
    let mut out = Vec::new();
    calculate::run_to(
        &mut out,
        present_value,
        rate,
        months,
        MoneyStyle::default(),
        output,
        format,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_calculate_with_negative_present_value() {
    let result = run_quiet(-100.0, 0.01, 12, None, None);

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("You must type a number greater or equal than 0. Try again!"));
}

#[test]
fn test_calculate_with_negative_rate() {
    assert!(run_quiet(100.0, -0.01, 12, None, None).is_err());
}

#[test]
fn test_calculate_with_negative_months() {
    let result = run_quiet(100.0, 0.01, -1, None, None);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("months"));
}

#[test]
fn test_calculate_invalid_format() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("fv.txt");

    let result = run_quiet(
        100.0,
        0.01,
        2,
        Some(output_path.to_str().unwrap()),
        Some("xml"),
    );

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid format"));
    assert!(!output_path.exists());
}

#[test]
fn test_calculate_unwritable_output() {
    let result = run_quiet(
        100.0,
        0.01,
        2,
        Some("/nonexistent/dir/fv.csv"),
        None,
    );

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to create output file"));
}

#[test]
fn test_calculate_with_too_many_months() {
    use future_value_tools::finance::MAX_MONTHS;

    assert!(run_quiet(100.0, 0.01, i64::from(MAX_MONTHS), None, None).is_ok());

    let result = run_quiet(100.0, 0.01, i64::from(MAX_MONTHS) + 1, None, None);
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Invalid number of months"));
    assert!(message.contains("the maximum is 12000"));

    assert!(run_quiet(100.0, 0.01, i64::from(u32::MAX), None, None).is_err());
}
