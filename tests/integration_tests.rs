/// Integration tests for the future-value commands
/// These tests drive the commands end to end with in-memory input and temp files
use future_value_tools::commands::{calculate, interactive};
use future_value_tools::finance::MoneyStyle;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn run_calculate(output: Option<&str>, format: Option<&str>) -> String {
    let mut out = Vec::new();
    calculate::run_to(
        &mut out,
        1000.0,
        0.01,
        12,
        MoneyStyle::default(),
        output,
        format,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_calculate_prints_report() {
    let report = run_calculate(None, None);

    assert!(report.contains("starting with an initial capital of $ 1,000.00,"));
    assert!(report.contains("with a monthly interest rate of 0.01 (1.00 %),"));
    assert!(report.contains("and after 12 months, is equal to: $ 1,126.83"));
    assert!(report.contains("  | Month |  Future Value  |"));
    assert!(report.contains("  |     1 |   1,010.00 USD |"));
    assert!(report.contains("  |    12 |   1,126.83 USD |"));
}

#[test]
fn test_calculate_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("fv.csv");

    run_calculate(Some(output_path.to_str().unwrap()), None);

    let content = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "month,future_value,amount");
    assert_eq!(lines[1], "1,1010.0,\"1,010.00 USD\"");
    assert!(lines[12].starts_with("12,1126.83,"));
}

#[test]
fn test_calculate_json_export() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("fv.json");

    run_calculate(Some(output_path.to_str().unwrap()), None);

    let content = fs::read_to_string(&output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["present_value"], 1000.0);
    assert_eq!(json["months"], 12);
    assert_eq!(json["rows"].as_array().unwrap().len(), 12);
    assert_eq!(json["rows"][11]["amount"], "1,126.83 USD");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_calculate_custom_style() {
    let style = MoneyStyle {
        precision: 0,
        headline_symbol: "€".to_string(),
        table_symbol: "EUR".to_string(),
    };
    let mut out = Vec::new();
    calculate::run_to(&mut out, 1500.0, 0.0, 1, style, None, None).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.contains("initial capital of € 1,500,"));
    assert!(report.contains("|     1 |      1,500 EUR |"));
}

#[test]
fn test_interactive_session_transcript() {
    let mut input = Cursor::new("1000\n0.01\n1\nn\n");
    let mut out = Vec::new();

    let completed = interactive::run_session(&mut input, &mut out, &MoneyStyle::default()).unwrap();
    assert_eq!(completed, 1);

    let expected = "
  Enter the account's Present Value:   Enter the monthly interest rate:   \
Enter the number of months that the money will be left in the account: 
  The Future Value of the account, starting with an initial capital of $ 1,000.00,
  with a monthly interest rate of 0.01 (1.00 %),
  and after 1 month, is equal to: $ 1,010.00
  And that figure can be broken down month by month as follows:

  --------------------------
  | Month |  Future Value  |
  --------------------------
  |     1 |   1,010.00 USD |
  --------------------------

  Would you like to keep calculating the Future Value (y/n)? ";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_interactive_session_repeats() {
    let mut input = Cursor::new("100\n0.5\n2\nyes\n100\n0.5\n2\nn\n");
    let mut out = Vec::new();

    let completed = interactive::run_session(&mut input, &mut out, &MoneyStyle::default()).unwrap();
    let transcript = String::from_utf8(out).unwrap();

    assert_eq!(completed, 2);
    assert_eq!(transcript.matches("is equal to: $ 225.00").count(), 2);
}
