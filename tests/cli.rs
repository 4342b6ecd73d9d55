//! E2E tests for the exchange1031 command line

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the full report for an exchange with no replacement yet
#[test]
fn analyze_exposure_only() {
    let output = run(&[
        "analyze",
        "-i",
        "tests/data/exposure_only.json",
        "--now",
        "2025-03-11",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Elm Street Duplex"));
    assert!(stdout.contains("ON TRACK"));
    assert!(stdout.contains("Identify by: 2025-04-15 (35 days)"));
    assert!(stdout.contains("Realized Gain: $220,000"));
    assert!(stdout.contains("Total: $65,860"));
    assert!(stdout.contains("No properties identified"));
}

/// Test the full report when the replacement leaves cash boot
#[test]
fn analyze_partial_boot() {
    let output = run(&[
        "analyze",
        "-i",
        "tests/data/partial_boot.json",
        "--now",
        "2025-03-11",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Cash Boot: $60,000"));
    assert!(stdout.contains("Tax: $17,961.82"));
    assert!(stdout.contains("Tax Savings: $47,898.18"));
    assert!(stdout.contains("1 Oak Ave"));
    assert!(stdout.contains("[Excellent]"));
}

/// Test JSON output of the full analysis
#[test]
fn analyze_json_output() {
    let output = run(&[
        "analyze",
        "-i",
        "tests/data/partial_boot.json",
        "--now",
        "2025-03-11",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"timeline\""));
    assert!(stdout.contains("\"status\": \"on_track\""));
    assert!(stdout.contains("\"cash_boot\""));
    assert!(stdout.contains("\"recommendation\": \"excellent\""));
    assert!(stdout.contains("\"three_property_rule\""));
}

/// Test that the completed status is only set on request
#[test]
fn analyze_marked_completed() {
    let output = run(&[
        "analyze",
        "-i",
        "tests/data/partial_boot.json",
        "--now",
        "2025-05-01",
        "--completed",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("TIMELINE (COMPLETED)"));
}

/// Test that invalid input is rejected with the offending field
#[test]
fn analyze_rejects_negative_values() {
    let output = run(&["analyze", "-i", "tests/data/invalid_mortgage.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("relinquished.existing_mortgage"));
}

/// Test the timeline on the identification deadline day
#[test]
fn timeline_deadline_day() {
    let output = run(&[
        "timeline",
        "--sale-close",
        "2025-01-01",
        "--now",
        "2025-02-15",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("IDENTIFICATION URGENT"));
    assert!(stdout.contains("2025-02-15 (0 days)"));
    assert!(stdout.contains("2025-06-30 (135 days)"));
}

/// Test the timeline after the exchange period has run out
#[test]
fn timeline_expired() {
    let output = run(&[
        "timeline",
        "--sale-close",
        "2024-01-01",
        "--now",
        "2025-01-01",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"status\": \"exchange_expired\""));
    assert!(stdout.contains("\"exchange_expired\": true"));
}

/// Test a sale date with no room for its deadlines is rejected, not a crash
#[test]
fn timeline_rejects_out_of_range_sale_date() {
    let output = run(&[
        "timeline",
        "--sale-close",
        "+262142-12-30",
        "--now",
        "2025-01-01",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("too late"));
    assert!(!stderr.contains("panicked"));
}

/// Test the comparison table keeps input order by default
#[test]
fn compare_table() {
    let output = run(&["compare", "-i", "tests/data/partial_boot.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Recommendation"));
    assert!(stdout.contains("Excellent"));
    assert!(stdout.contains("Acceptable"));
    let oak = stdout.find("1 Oak Ave").unwrap();
    let pine = stdout.find("2 Pine Rd").unwrap();
    assert!(oak < pine);
}

/// Test ranked CSV output from a candidate CSV file
#[test]
fn compare_ranked_csv() {
    let output = run(&[
        "compare",
        "-i",
        "tests/data/exposure_only.json",
        "-c",
        "tests/data/candidates.csv",
        "--ranked",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("row_num"));
    assert!(stdout.contains("recommendation"));
    // Same tier, so the smaller boot ranks first
    let birch = stdout.find("100 Birch Ln").unwrap();
    let walnut = stdout.find("400 Walnut Way").unwrap();
    assert!(birch < walnut);
}

/// Test four candidates within 200% of the sale price pass validation
#[test]
fn validate_two_hundred_percent_rule() {
    let output = run(&[
        "validate",
        "-i",
        "tests/data/exposure_only.json",
        "-c",
        "tests/data/candidates.csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Too many properties identified (4)"));
    assert!(stdout.contains("Total value $990,000 is within 200% limit ($1,000,000)"));
}

/// Test validation fails when neither rule is satisfied
#[test]
fn validate_fails_over_limit() {
    let output = run(&[
        "validate",
        "-i",
        "tests/data/exposure_only.json",
        "-c",
        "tests/data/candidates_over_limit.csv",
        "--json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"satisfied\": false"));
}

/// Test the JSON schema describes the input file
#[test]
fn schema_json() {
    let output = run(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"ExchangeInput\""));
    assert!(stdout.contains("sale_close_date"));
    assert!(stdout.contains("identified_properties"));
}
