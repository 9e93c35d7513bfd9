use std::process::{Command, Output};

fn argmap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argmap"))
        .args(args)
        .output()
        .expect("failed to run argmap")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

// ---------------------------------------------------------------------------
// dump
// ---------------------------------------------------------------------------

#[test]
fn dump_prints_canonical_json() {
    let output = argmap(&["dump", "--", "--Nata=verbose", "positional", "-bar", "-bar=1"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json, serde_json::json!({ "-Nata": "verbose", "-bar": "1" }));
}

#[test]
fn dump_yaml_format() {
    let output = argmap(&["dump", "--format", "yaml", "--", "-a=1"]);
    assert!(output.status.success());
    let yaml: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    assert_eq!(yaml["-a"], serde_yaml::Value::String("1".into()));
}

#[test]
fn dump_empty_argument_list() {
    let output = argmap(&["dump"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{}");
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_bool_positive_wins() {
    let output = argmap(&["get", "bool", "-Nata", "--", "-noNata", "-Nata"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn get_bool_negation() {
    let output = argmap(&["get", "bool", "-Nata", "--default", "true", "--", "-noNata"]);
    assert_eq!(stdout(&output), "false");
}

#[test]
fn get_int_parse_failure_is_zero() {
    let output = argmap(&["get", "int", "-Nata", "--default", "11", "--", "-Nata=NaN"]);
    assert_eq!(stdout(&output), "0");
}

#[test]
fn get_str_absent_uses_default() {
    let output = argmap(&["get", "str", "-Nata", "--default", "eleven"]);
    assert_eq!(stdout(&output), "eleven");
}

#[test]
fn get_rejects_invalid_default() {
    let output = argmap(&["get", "int", "-n", "--default", "lots"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid integer default"));
}

// ---------------------------------------------------------------------------
// config files
// ---------------------------------------------------------------------------

#[test]
fn conf_values_fill_in_under_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("argmap.conf");
    std::fs::write(&conf, "port=8333\nrpcuser=alice\n").unwrap();
    let conf = conf.to_str().unwrap();

    let port = argmap(&["get", "int", "-port", "--conf", conf, "--", "-port=18333"]);
    assert_eq!(stdout(&port), "18333");

    let user = argmap(&["get", "str", "-rpcuser", "--conf", conf, "--", "-port=18333"]);
    assert_eq!(stdout(&user), "alice");
}

#[test]
fn conf_malformed_line_fails() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("bad.conf");
    std::fs::write(&conf, "ok=1\n=broken\n").unwrap();

    let output = argmap(&["dump", "--conf", conf.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config line 2"));
}
