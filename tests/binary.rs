#![cfg(unix)]

use std::process::{Command, Output};

fn confess_build(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_confess-build"))
        .args(args)
        .env_remove("CONFESS_DOCKER")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn json_stdout_is_a_single_document() {
    let output = confess_build(&["web", "--docker", "echo", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be one json document");
    assert_eq!(report["profile"], "web");
    assert_eq!(report["exit_code"], 0);
    assert_eq!(
        report["command"],
        "echo build -t confess-web -f ./Dockerfile.web ."
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("build -t confess-web -f ./Dockerfile.web ."));
}

#[test]
fn text_mode_echoes_then_runs() {
    let output = confess_build(&["BOT", "--docker", "echo"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("Running: echo build -t confess -f ./Dockerfile.worker .")
    );
    assert_eq!(lines.next(), Some("build -t confess -f ./Dockerfile.worker ."));
}

#[test]
fn invalid_profile_exits_two_with_choices() {
    let output = confess_build(&["staging", "--docker", "true"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: invalid profile. choose: bot, web"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_profile_exits_two() {
    let output = confess_build(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn failed_build_exits_with_child_code() {
    let output = confess_build(&["bot", "--docker", "false"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: build failed (exit code 1)"));
}
