use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use assert_fs::{TempDir, prelude::*};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

struct VsTest {
    temp_dir: TempDir,
}

impl VsTest {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        Self { temp_dir }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vs"));
        cmd.current_dir(self.temp_dir.path());
        cmd.env_clear();
        cmd
    }

    fn vs(&self, args: &[&str]) -> VsOutput {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to execute vs command");
        VsOutput { output }
    }

    fn vs_stdin(&self, args: &[&str], stdin: &str) -> VsOutput {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn vs command");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        let output = child.wait_with_output().expect("Failed to wait for vs");
        VsOutput { output }
    }

    fn write_file(&self, name: &str, contents: &str) {
        self.temp_dir.child(name).write_str(contents).unwrap();
    }
}

struct VsOutput {
    output: Output,
}

impl VsOutput {
    #[track_caller]
    fn assert_success(&self) {
        assert!(
            self.output.status.success(),
            "expected success, stderr: {}",
            self.stderr()
        );
    }

    #[track_caller]
    fn assert_failure(&self) {
        assert!(
            !self.output.status.success(),
            "expected failure, stdout: {}",
            self.stdout()
        );
    }

    fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn json(&self) -> serde_json::Value {
        let stdout = self.stdout();
        serde_json::from_str(&stdout)
            .unwrap_or_else(|_| panic!("Output should be valid JSON, was: {stdout}"))
    }
}

fn field(n: u64) -> serde_json::Value {
    json!({ "IsStr": false, "NumValue": n, "StrValue": "" })
}

#[test]
fn test_parse_text() {
    let test = VsTest::new();
    let output = test.vs(&["parse", " 1.2.3.4 "]);

    output.assert_success();
    assert_snapshot!(output.stdout(), @"1.2.3.4 [1 2 3 4]");
}

#[test]
fn test_parse_list_text() {
    let test = VsTest::new();
    let output = test.vs(&["parse", "--list", "1.2.3.4;0.1.2.6"]);

    output.assert_success();
    assert_snapshot!(output.stdout(), @r"
    1.2.3.4 [1 2 3 4]
    0.1.2.6 [0 1 2 6]
    ");
}

#[test]
fn test_parse_json() {
    let test = VsTest::new();
    let output = test.vs(&["parse", "--format", "json", "1.0"]);

    output.assert_success();
    assert_eq!(
        output.json(),
        json!({ "Version": "1.0", "Fields": [field(1), field(0)], "OrderedVersion": false })
    );
}

#[test]
fn test_format_from_env() {
    let test = VsTest::new();
    let output = test
        .command()
        .env("VS_FORMAT", "json")
        .args(["parse", "--list", "3;4"])
        .output()
        .unwrap();
    let output = VsOutput { output };

    output.assert_success();
    assert_eq!(output.json().as_array().map(Vec::len), Some(2));
}

#[test]
fn test_parse_malformed() {
    let test = VsTest::new();
    let output = test.vs(&["parse", "1.a.3"]);

    output.assert_failure();
    assert!(output.stdout().is_empty());
    assert!(output.stderr().contains("field #1 (a)"), "{}", output.stderr());
}

#[test]
fn test_parse_list_with_empty_part() {
    let test = VsTest::new();
    let output = test.vs(&["parse", "--list", "1.0;"]);

    output.assert_failure();
    assert!(output.stderr().contains("part[1]"), "{}", output.stderr());
}

#[test]
fn test_decode_legacy_file_to_json() {
    let test = VsTest::new();
    test.write_file("version.json", r#""1.0.2.3""#);
    let output = test.vs(&["decode", "--format", "json", "version.json"]);

    output.assert_success();
    assert_eq!(
        output.json(),
        json!({
            "Version": "1.0.2.3",
            "Fields": [field(1), field(0), field(2), field(3)],
            "OrderedVersion": false
        })
    );
}

#[test]
fn test_decode_structured_stdin() {
    let test = VsTest::new();
    let payload = json!({
        "Version": "2.5",
        "Fields": [field(2), field(5)],
        "OrderedVersion": false
    });
    let output = test.vs_stdin(&["decode"], &payload.to_string());

    output.assert_success();
    assert_snapshot!(output.stdout(), @"2.5 [2 5]");
}

#[test]
fn test_decode_list_forms_agree() {
    let test = VsTest::new();
    let legacy = test.vs_stdin(&["decode", "--list", "--format", "json", "-"], r#""1.2.3.4;0.1.2.6""#);
    legacy.assert_success();

    test.write_file("list.json", &legacy.stdout());
    let structured = test.vs(&["decode", "--list", "--format", "json", "list.json"]);
    structured.assert_success();

    assert_eq!(legacy.json(), structured.json());
    assert_eq!(legacy.json().as_array().map(Vec::len), Some(2));
}

#[test]
fn test_decode_null_payloads() {
    let test = VsTest::new();

    let output = test.vs_stdin(&["decode", "--format", "json"], "null");
    output.assert_success();
    assert_eq!(
        output.json(),
        json!({ "Version": "", "Fields": null, "OrderedVersion": false })
    );

    let output = test.vs_stdin(&["decode", "--list", "--format", "json"], "[]");
    output.assert_success();
    assert_eq!(output.json(), serde_json::Value::Null);
}

#[test]
fn test_decode_unknown_field() {
    let test = VsTest::new();
    let output = test.vs_stdin(&["decode"], r#"{"Foo":1}"#);

    output.assert_failure();
    assert!(output.stderr().contains(r#"unknown field name "Foo""#), "{}", output.stderr());
}

#[test]
fn test_decode_missing_file() {
    let test = VsTest::new();
    let output = test.vs(&["decode", "missing.json"]);

    output.assert_failure();
    assert!(output.stderr().contains("missing.json"), "{}", output.stderr());
}
