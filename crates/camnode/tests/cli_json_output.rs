//! Integration tests for `--json` output.

mod common;

use common::{Fixture, HIGH_RES, LOW_RES, stderr, stdout};

fn parse(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "exit code {:?}. stderr: {}",
        output.status.code(),
        stderr(output)
    );
    serde_json::from_str(&stdout(output)).expect("stdout should be valid JSON")
}

#[test]
fn test_resolve_json_reports_device_and_errors() {
    let fixture = Fixture::new();
    fixture
        .add_node("video0", "Cam-A", Some(HIGH_RES))
        .add_node("video1", "Cam-B", Some(LOW_RES));

    let value = parse(&fixture.run(&["resolve", "Cam-A", "Cam-B", "Cam-Z", "--json"]));
    let rows = value.as_array().expect("JSON output should be an array");
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["name"], "Cam-A");
    assert_eq!(rows[0]["device"], "/dev/video0");
    assert!(rows[0]["error"].is_null());

    assert!(rows[1]["device"].is_null());
    assert_eq!(rows[1]["error_code"], "NO_VALID_STREAM");

    assert_eq!(rows[2]["error_code"], "DEVICE_NOT_FOUND");
}

#[test]
fn test_list_json_includes_unreadable_names() {
    let fixture = Fixture::new();
    fixture.add_node("video0", "Cam-A", None);
    std::fs::create_dir_all(fixture.registry_root().join("video1")).unwrap();

    let value = parse(&fixture.run(&["list", "--json"]));
    let devices = value.as_array().expect("JSON output should be an array");
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["id"], "video0");
    assert_eq!(devices[0]["path"], "/dev/video0");
    assert_eq!(devices[0]["name"], "Cam-A");
    assert!(devices[1]["name"].is_null());
}

#[test]
fn test_list_json_empty_registry_is_empty_array() {
    let fixture = Fixture::new();
    let output = fixture.run(&["list", "--json"]);
    let value = parse(&output);
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_probe_json_reports_sizes() {
    let fixture = Fixture::new();
    fixture.add_node("video0", "Cam-A", Some(HIGH_RES));

    let value = parse(&fixture.run(&["probe", "/dev/video0", "--json"]));
    assert_eq!(value["valid_stream"], true);
    assert_eq!(value["resolutions"][0]["width"], 3280);
    assert_eq!(value["resolutions"][0]["height"], 2464);
    assert_eq!(value["min_width"], 3000);
}

#[test]
fn test_probe_json_reports_tool_failure() {
    let fixture = Fixture::new();

    let value = parse(&fixture.run(&["probe", "/dev/video7", "--json"]));
    assert_eq!(value["valid_stream"], false);
    assert!(value["error"].as_str().unwrap().contains("exited with"));
}
