use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const SCENARIO: &str = r#"[
    {"date": "2024-03-01", "count": 3},
    {"date": "2024-03-02", "count": 0},
    {"date": "2024-04-15", "count": 20}
]"#;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn contribmap(input: &Path, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("contribmap").unwrap();
    cmd.arg("--input").arg(input).args(["--today", today]);
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn calendar_json_outputs_months_and_stats() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "contribs.json", SCENARIO);

    let v = json_stdout(contribmap(&input, "2024-05-01").args(["--year", "2024", "calendar", "--json"]));

    let months = v["months"].as_array().unwrap();
    let names: Vec<&str> = months.iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Jan", "Feb", "Mar", "Apr", "May"]);

    let march_first = &months[2]["days"][0];
    assert_eq!(march_first["date"], "2024-03-01");
    assert_eq!(march_first["count"], 3);
    assert_eq!(months[2]["leading_blank_count"], 5);

    assert_eq!(v["stats"]["total_contributions"], 23);
    assert_eq!(v["stats"]["derived_followers"], 6);
    assert_eq!(v["stats"]["derived_pull_requests"], 1);
    assert_eq!(v["version"], 1);
    // May: five of twelve months.
    let progress = v["year_progress"].as_f64().unwrap();
    assert!((progress - 5.0 / 12.0).abs() < 1e-9);
}

#[test]
fn envelope_payload_is_accepted() {
    let dir = tempdir().unwrap();
    let payload = format!(r#"{{"total": {{"2024": 23}}, "contributions": {SCENARIO}}}"#);
    let input = write_input(dir.path(), "api.json", &payload);

    let v = json_stdout(contribmap(&input, "2024-05-01").args(["stats", "--json"]));
    assert_eq!(v["selected_year"], 2024);
    assert_eq!(v["stats"]["total_contributions"], 23);
}

#[test]
fn ndjson_emits_one_month_per_line() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "contribs.json", SCENARIO);

    let out = contribmap(&input, "2025-01-15")
        .args(["--year", "2024", "calendar", "--ndjson"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let months: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let names: Vec<&str> = months.iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Sep", "Oct", "Nov", "Dec"]);
}

#[test]
fn malformed_date_fails_unless_lenient() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "bad.json",
        r#"[{"date": "2024-03-01", "count": 3}, {"date": "03/02/2024", "count": 9}]"#,
    );

    contribmap(&input, "2024-05-01")
        .args(["stats", "--json"])
        .assert()
        .failure();

    let v = json_stdout(contribmap(&input, "2024-05-01").args(["--lenient", "stats", "--json"]));
    assert_eq!(v["stats"]["total_contributions"], 3);
}

#[test]
fn fractional_count_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "frac.json", r#"[{"date": "2024-03-01", "count": 2.5}]"#);

    contribmap(&input, "2024-05-01")
        .args(["--lenient", "stats"])
        .assert()
        .failure();
}

#[test]
fn empty_file_is_all_zero() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "empty.json", "");

    let v = json_stdout(contribmap(&input, "2024-05-01").args(["calendar", "--json"]));
    assert_eq!(v["months"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(v["stats"]["total_contributions"], 0);
}

#[test]
fn unselectable_year_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "contribs.json", SCENARIO);

    contribmap(&input, "2024-05-01")
        .args(["--year", "2019", "calendar"])
        .assert()
        .failure();
}

#[test]
fn grid_shows_months_and_legend() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "contribs.json", SCENARIO);

    let out = contribmap(&input, "2024-05-01")
        .args(["--week-start", "monday", "calendar", "--details"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Mar"));
    assert!(text.contains("2024-04-15: 20 contributions"));
    assert!(text.contains("Less"));
    assert!(text.contains("More"));
}

#[test]
fn years_lists_candidates() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "contribs.json", SCENARIO);

    let out = contribmap(&input, "2025-06-01")
        .arg("years")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap(), "2023\n2024\n2025\n");
}

#[test]
fn records_are_read_from_stdin() {
    for input in [Some("-"), None] {
        let mut cmd = assert_cmd::Command::cargo_bin("contribmap").unwrap();
        if let Some(path) = input {
            cmd.args(["--input", path]);
        }
        let out = cmd
            .args(["--today", "2024-05-01", "stats", "--json"])
            .write_stdin(SCENARIO)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["source"], "stdin");
        assert_eq!(v["stats"]["total_contributions"], 23);
    }
}

#[test]
fn object_without_contributions_key_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "wrong.json",
        r#"{"data": [{"date": "2024-03-01", "count": 3}]}"#,
    );

    contribmap(&input, "2024-05-01")
        .args(["stats", "--json"])
        .assert()
        .failure();
}
