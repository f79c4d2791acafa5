//! Integration tests for CLI argument handling
//!
//! Only exercises paths that never reach the network.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .output()
        .expect("Failed to execute folio")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("folio"));
    assert!(stdout.contains("projects"));
    assert!(stdout.contains("contact"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run_cli(&["resume"]);
    assert!(!output.status.success());
}

#[test]
fn test_contact_missing_fields_fails() {
    let output = run_cli(&["contact", "--name", "A"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--email"), "Should name the missing flag: {}", stderr);
}

#[test]
fn test_contact_invalid_email_fails_before_sending() {
    let output = run_cli(&[
        "contact", "--name", "A", "--email", "nope", "--message", "hi",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("valid email"), "Unexpected stderr: {}", stderr);
}
