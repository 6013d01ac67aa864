//! Tests for the scenario replay binary.

use std::path::Path;
use std::process::Command;

fn replay(scenario: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_reformed"))
        .arg(scenario)
        .output()
        .expect("failed to run reformed")
}

#[test]
fn test_replay_signup_scenario() {
    let scenario = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/signup.json");
    let output = replay(&scenario);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let cycles: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(cycles.len(), 13);

    let first = &cycles[0]["props"]["schema"];
    assert_eq!(first["isValid"], false);
    assert_eq!(first["fields"]["email"]["isChecked"], false);
    assert_eq!(
        first["fields"]["bio"]["errors"][0],
        "bio must not have more than 20 characters"
    );

    let password_blur = &cycles[7]["props"]["schema"]["fields"]["password"];
    assert_eq!(
        password_blur["errors"][0],
        "password must have at least 8 characters"
    );

    let last = &cycles[12]["props"];
    assert_eq!(last["schema"]["isValid"], true);
    assert_eq!(last["lastInputEvent"]["eventType"], "change");
    assert_eq!(last["lastInputEvent"]["target"]["controlType"], "checkbox");
    assert_eq!(last["inputFlags"]["interests"]["dirty"], true);
    assert_eq!(last["model"]["interests"], serde_json::json!(["forms"]));
}

#[test]
fn test_missing_scenario_fails() {
    let output = replay(Path::new("does/not/exist.json"));

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does/not/exist.json"));
}
