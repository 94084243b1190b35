//! End-to-end tests for `azturk-keyboard type` and `config` commands.

use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the azturk-keyboard binary
fn azturk_bin() -> &'static str {
    env!("CARGO_BIN_EXE_azturk-keyboard")
}

fn run(args: &[&str]) -> Output {
    Command::new(azturk_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn type_json(strokes: &[&str]) -> serde_json::Value {
    let mut args = vec!["type", "--json"];
    args.extend_from_slice(strokes);
    let output = run(&args);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Should parse JSON")
}

#[test]
fn test_type_taps() {
    let result = type_json(&["س", "ل", "ا", "م", "space", "↲"]);
    assert_eq!(result["text"], "سلام \n");
    assert_eq!(result["strokes"], 6);
    assert_eq!(result["skipped"], serde_json::json!([]));
}

#[test]
fn test_type_long_press_hit() {
    let result = type_json(&["ا:3"]);
    assert_eq!(result["text"], "إ");
}

#[test]
fn test_type_long_press_miss_and_cancel() {
    let result = type_json(&["ا:-", "ی:^", "ی:5"]);
    assert_eq!(result["text"], "");
    assert_eq!(result["strokes"], 3);
}

#[test]
fn test_type_delete() {
    let result = type_json(&["ب", "ی:1", "⌫", "delete", "delete"]);
    assert_eq!(result["text"], "");
}

#[test]
fn test_type_reserved_keys_do_nothing() {
    let result = type_json(&["123", "😀", "⌄", "ج"]);
    assert_eq!(result["text"], "ج");
    assert_eq!(result["strokes"], 4);
}

#[test]
fn test_type_skips_unknown_keys() {
    let result = type_json(&["ب", "q", "enter", "ب"]);
    assert_eq!(result["text"], "بب");
    assert_eq!(result["skipped"], serde_json::json!(["q", "enter"]));
}

#[test]
fn test_type_plain_output() {
    let output = run(&["type", "ق", "ل"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "قل\n");
}

#[test]
fn test_type_requires_strokes() {
    let output = run(&["type"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let output = run(&[
        "config",
        "set",
        "--config",
        path_str,
        "--theme",
        "light",
        "--long-press-ms",
        "450",
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(path.exists());

    let output = run(&["config", "show", "--json", "--config", path_str]);
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["ui"]["show_help"], true);
    assert_eq!(result["input"]["long_press_ms"], 450);
}

#[test]
fn test_config_set_rejects_bad_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let output = run(&["config", "set", "--config", path_str, "--long-press-ms", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));

    let output = run(&["config", "set", "--config", path_str, "--theme", "sepia"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["config", "set", "--config", path_str]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn test_config_set_keeps_unreadable_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let path_str = path.to_str().unwrap();
    let original = "[input]\nlong_press_ms = 800\n[ui\ntheme_mode = \"Dark\"\n";
    std::fs::write(&path, original).unwrap();

    let output = run(&["config", "set", "--config", path_str, "--show-help", "false"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_config_set_preserves_other_settings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let output = run(&["config", "set", "--config", path_str, "--long-press-ms", "800"]);
    assert_eq!(output.status.code(), Some(0));
    let output = run(&["config", "set", "--config", path_str, "--show-help", "false"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["config", "show", "--json", "--config", path_str]);
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["input"]["long_press_ms"], 800);
    assert_eq!(result["ui"]["show_help"], false);
}
