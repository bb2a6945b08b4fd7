use predicates::prelude::*;
use std::fs;

use test_env::{TestEnv, SAMPLE_FEATURES};

#[test]
fn test_show_table_in_sorted_order() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);

    let output = env.cmd().args(["show"]).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("Feature"));
    assert!(lines[0].contains("Visual Studio"));
    assert!(lines[0].contains("Vim/Neovim"));
    assert!(lines[2].starts_with("Agent mode"));
    assert!(lines[3].starts_with("Code completion"));
    assert!(lines[4].starts_with("Roadmap item"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_show_details_lists_every_stage() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);

    env.cmd().args(["show", "--details"]).assert().success()
        .stdout(predicate::str::contains("GA: 1.2 (March 2023)"))
        .stdout(predicate::str::contains("PREVIEW: 1.3-beta (May 2023)"))
        .stdout(predicate::str::contains("PRIVATE PREVIEW: 0.1 (June 2024)"))
        .stdout(predicate::str::contains("https://example.com/jb"));
}

#[test]
fn test_show_json() {
    let env = TestEnv::new();
    let data = env.write_dataset("data.json", SAMPLE_FEATURES);

    let output = env.cmd().args(["show", "--json", "--data"]).arg(&data)
        .assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["columns"].as_array().unwrap().len(), 6);
    assert_eq!(value["rows"][0]["featureName"], "Agent mode");
    // Xcode column
    assert_eq!(value["rows"][0]["cells"][3]["displayClass"], "private_preview");
    assert_eq!(value["rows"][1]["cells"][0]["displayClass"], "supported");
    assert_eq!(value["rows"][1]["cells"][0]["version"], "1.2");
    assert_eq!(value["rows"][2]["cells"][0]["displayClass"], "na");
}

#[test]
fn test_ides_flag_sets_columns() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);

    let output = env.cmd().args(["show", "--json", "--ides", "Zed,VSCode"])
        .assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["columns"], serde_json::json!(["Zed", "VSCode"]));
    assert_eq!(value["rows"][0]["cells"][0]["version"], "0.150");
}

#[test]
fn test_rc_file_configures_location_and_order() {
    let env = TestEnv::new();
    env.write_dataset("custom.json", SAMPLE_FEATURES);
    env.write_rc("data.location=../custom.json\nides.order=Xcode, Eclipse\n");

    env.cmd().args(["ides"]).assert().success()
        .stdout("Xcode\nEclipse\n");
    env.cmd().args(["show"]).assert().success()
        .stdout(predicate::str::contains("Agent mode"))
        .stdout(predicate::str::contains("VSCode").not());
}

#[test]
fn test_default_ides() {
    let env = TestEnv::new();
    env.cmd().args(["ides"]).assert().success()
        .stdout("VSCode\nVisual Studio\nJetBrains\nXcode\nVim/Neovim\nEclipse\n");
}

#[test]
fn test_html_output() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);
    let out = env.path("matrix.html");

    env.cmd().args(["html", "-o"]).arg(&out).assert().success();
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<td class=\"border p-2 font-medium\">Agent mode</td>"));
    assert!(html.contains("border p-2 preview clickable"));
    assert!(html.contains("data-tippy-content=\"Not supported.\""));
}

#[test]
fn test_export_preserves_source() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);

    let output = env.cmd().args(["export"]).assert().success().get_output().stdout.clone();
    let exported: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let original: serde_json::Value = serde_json::from_str(SAMPLE_FEATURES).unwrap();
    assert_eq!(exported, original);
    // 2-space indentation
    assert!(String::from_utf8(output).unwrap().starts_with("[\n  {\n    \"feature\""));
}

#[test]
fn test_export_sorted_to_file() {
    let env = TestEnv::new();
    env.write_dataset("features.json", SAMPLE_FEATURES);
    let out = env.path("download.json");

    env.cmd().args(["export", "--sorted", "-o"]).arg(&out).assert().success();
    let exported: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let names: Vec<&str> = exported.as_array().unwrap().iter()
        .map(|f| f["feature"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Agent mode", "Code completion", "Roadmap item"]);
    // Unknown IDE survives the round trip
    assert_eq!(exported[0]["ides"]["Zed"]["ga"]["version"], "0.150");
}

#[test]
fn test_stdin_source() {
    let env = TestEnv::new();
    env.cmd().args(["show", "--data", "-"]).write_stdin(SAMPLE_FEATURES)
        .assert().success()
        .stdout(predicate::str::contains("Code completion"));
}

#[test]
fn test_empty_dataset() {
    let env = TestEnv::new();
    env.write_dataset("features.json", "[]");
    env.cmd().args(["show"]).assert().success()
        .stdout("No features.\n");
}

#[test]
fn test_missing_dataset_is_internal_error() {
    let env = TestEnv::new();
    env.cmd().args(["show"]).assert()
        .failure()
        .code(2)
        .stderr(predicate::str::starts_with("Internal error:"))
        .stderr(predicate::str::contains("features.json"))
        .stdout("");
}

#[test]
fn test_malformed_dataset_is_internal_error() {
    let env = TestEnv::new();
    env.write_dataset("features.json", "[{\"feature\": ");
    env.cmd().args(["html"]).assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse features"))
        .stdout("");
}

#[test]
fn test_bad_config_is_user_error() {
    let env = TestEnv::new();
    env.write_rc("color=sometimes\n");
    env.cmd().args(["ides"]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("color"));
}

#[test]
fn test_empty_ides_flag_is_user_error() {
    let env = TestEnv::new();
    env.cmd().args(["ides", "--ides", ","]).assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--ides cannot be empty"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.cmd().args(["--version"]).assert().success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_null_and_malformed_ide_entries_render_as_na() {
    let env = TestEnv::new();
    env.write_dataset("features.json", r#"[
        {"feature": "Partial", "ides": {
            "VSCode": {"ga": {"version": "2.0", "date": "2024-02-01", "url": 7}},
            "Xcode": null,
            "Eclipse": {"preview": true}
        }}
    ]"#);

    let output = env.cmd().args(["show", "--json"]).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let cells = &value["rows"][0]["cells"];
    assert_eq!(cells[0]["displayClass"], "supported");
    assert!(cells[0].get("url").is_none());
    assert_eq!(cells[3]["displayClass"], "na");
    assert_eq!(cells[5]["displayClass"], "na");
}
