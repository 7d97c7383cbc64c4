use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_vincheck")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("vincheck-{name}-{stamp}.{extension}"))
}

#[test]
fn decode_command_emits_json_for_a_known_vin() {
    let output = Command::new(bin())
        .args(["decode", "WBA3B5C56DF123456"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("decode should emit json");
    assert_eq!(payload["country"], "Germany");
    assert_eq!(payload["manufacturer"], "BMW AG");
    assert_eq!(payload["make"], "BMW AG");
    assert_eq!(payload["year"], 2013);
    assert_eq!(payload["plant"], "Oxford");
    assert!(payload["model"].is_null());
    assert!(payload["engine"].is_null());
}

#[test]
fn decode_command_rejects_malformed_vins() {
    let output = Command::new(bin())
        .args(["decode", "WBA3B5C56DF1234"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid vin"));
}

#[test]
fn decode_command_fails_cleanly_on_unknown_year_code() {
    // Position 10 is '0', which no year code maps.
    let output = Command::new(bin())
        .args(["decode", "WBA3B5C560F123456"])
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decode failed"));
}

#[test]
fn decode_command_returns_usage_without_a_vin() {
    let output = Command::new(bin())
        .arg("decode")
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: vincheck decode"));
}

#[test]
fn validate_command_distinguishes_valid_and_invalid() {
    let output = Command::new(bin())
        .args(["validate", "JTDKN3DU0E1765432"])
        .output()
        .expect("validate should run");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("valid"));

    let output = Command::new(bin())
        .args(["validate", "JTDKN3DU0E176543I"])
        .output()
        .expect("validate should run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("invalid"));
}

#[test]
fn manufacturers_command_emits_the_catalog_as_json() {
    let output = Command::new(bin())
        .arg("manufacturers")
        .output()
        .expect("manufacturers should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("manufacturers should emit json");
    let catalog = payload.as_array().expect("catalog should be an array");
    assert!(catalog.len() > 10);

    let bmw = catalog
        .iter()
        .find(|m| m["name"] == "BMW AG")
        .expect("BMW AG should be in the catalog");
    assert_eq!(bmw["display_name"], "BMW");
    assert!(bmw["wmi_codes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|code| code == "WBA"));
}

#[test]
fn manufacturers_command_filters_by_query() {
    let output = Command::new(bin())
        .args(["manufacturers", "toyota"])
        .output()
        .expect("manufacturers should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let catalog = payload.as_array().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0]["display_name"], "Toyota");
}

#[test]
fn manufacturers_command_exports_csv() {
    let path = unique_temp_path("catalog", "csv");

    let output = Command::new(bin())
        .args(["manufacturers", "--csv", path.to_string_lossy().as_ref()])
        .output()
        .expect("manufacturers should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("catalog exported"));

    let content = fs::read_to_string(&path).expect("export should be written");
    assert!(content.starts_with("name,display_name,countries,wmi_codes,logo"));
    assert!(content.contains("BMW AG,BMW,"));

    let _ = fs::remove_file(path);
}

#[test]
fn check_data_command_passes_on_the_bundled_dataset() {
    let output = Command::new(bin())
        .arg("check-data")
        .output()
        .expect("check-data should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));
}

#[test]
fn check_data_command_reports_bad_records() {
    let path = unique_temp_path("bad-registry", "json");
    fs::write(
        &path,
        r#"[{"WMI": "WBA", "Name": "BMW AG"}, {"WMI": "TOOLONG", "Name": "X", "Country": "Y"}]"#,
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["check-data", path.to_string_lossy().as_ref()])
        .output()
        .expect("check-data should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing or non-string field 'Country'"));
    assert!(stderr.contains("must be 1-3 characters"));

    let _ = fs::remove_file(path);
}

#[test]
fn unknown_command_returns_usage() {
    let output = Command::new(bin())
        .arg("frobnicate")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: vincheck"));
}
