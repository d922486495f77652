use std::process::Command as StdCommand;

use serde_json::{json, Value};

use crate::common::{fixture, BINARY_PATH, CONFIG_ENV};

fn run_cli(args: &[&str]) -> Value {
    let output = StdCommand::new(BINARY_PATH)
        .env(CONFIG_ENV, fixture("tests/fixtures/config_valid.toml"))
        .args(args)
        .output()
        .expect("process should start");
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn tools_command_prints_catalog() {
    let tools = run_cli(&["tools"]);
    assert_eq!(tools.as_array().map(Vec::len), Some(3));
    assert_eq!(tools[0]["name"], json!("get_presentations"));
}

#[test]
fn call_command_uses_configured_dataset() {
    let result = run_cli(&[
        "call",
        "search_presentations_by_title",
        "--args",
        r#"{"query": "LOOM"}"#,
    ]);
    assert_eq!(result["is_error"], json!(false));
    let content = result["content"].as_array().expect("content array");
    assert_eq!(content.len(), 1);
    assert!(content[0]
        .as_str()
        .is_some_and(|text| text.starts_with("[2] Project Loom Deep Dive")));
}
