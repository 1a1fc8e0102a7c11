//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const CONVERSATION: &str = r#"{"chats": [
    {"sender": "nathan", "receiver": "jess", "type": "TEXT", "text": "are we still on for tonight?", "timestamp": "2023-05-01 12:00:00 UTC"},
    {"sender": "jess", "receiver": "nathan", "type": "MEDIA", "text": "", "timestamp": "2023-05-01 12:03:00 UTC"},
    {"sender": "jess", "receiver": "nathan", "type": "TEXT", "text": "yes!", "timestamp": "2023-05-01 12:04:00 UTC"}
]}"#;

fn cli_cmd() -> Command {
    Command::cargo_bin("snapsimp").expect("Failed to find snapsimp binary")
}

/// Write a conversation file into a temporary directory
fn write_conversation(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("conversation.json");
    std::fs::write(&path, contents).expect("write conversation");
    path
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_renders_bubbles() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "nathan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation with jess"))
        .stdout(predicate::str::contains(">> are we still on for tonight?"))
        .stdout(predicate::str::contains("<< [Media]"))
        .stdout(predicate::str::contains("<< yes!"))
        .stdout(predicate::str::contains(" ago"));
}

#[test]
fn test_show_from_other_side() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "jess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation with nathan"))
        .stdout(predicate::str::contains("<< are we still on for tonight?"))
        .stdout(predicate::str::contains(">> yes!"));
}

#[test]
fn test_show_limit_keeps_tail() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "nathan", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation with jess"))
        .stdout(predicate::str::contains("yes!"))
        .stdout(predicate::str::contains("still on").not());
}

#[test]
fn test_show_empty_conversation() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, "[]");

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "nathan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Empty conversation"))
        .stdout(predicate::str::contains("(no messages)"));
}

#[test]
fn test_show_bad_timestamp_still_renders() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(
        &dir,
        r#"[{"sender": "a", "receiver": "b", "type": "TEXT", "text": "hello", "timestamp": "whenever"}]"#,
    );

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">> hello"))
        .stdout(predicate::str::contains("unknown time"));
}

#[test]
fn test_show_bad_timestamp_warns_once() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(
        &dir,
        r#"[{"sender": "a", "receiver": "b", "type": "TEXT", "text": "hello", "timestamp": "whenever"}]"#,
    );

    let output = cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "a"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Rendering without time").count(), 1);
}

#[test]
fn test_show_first_message_header() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(
        &dir,
        r#"[
            {"sender": "nathan", "receiver": "jess", "type": "TEXT", "text": "hi", "timestamp": 0},
            {"sender": "kim", "receiver": "nathan", "type": "TEXT", "text": "hey", "timestamp": 1}
        ]"#,
    );

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "nathan", "--first-message-header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation with jess\n"));

    cli_cmd()
        .arg("show")
        .arg(&file)
        .args(["--as", "nathan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation with jess, kim"));
}

#[test]
fn test_show_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("show")
        .arg(dir.path().join("nope.json"))
        .args(["--as", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load conversation"));
}

// ============================================================================
// Participants / Stats Command Tests
// ============================================================================

#[test]
fn test_participants() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("participants")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Participants (2):"))
        .stdout(predicate::str::contains("  jess"))
        .stdout(predicate::str::contains("  nathan"));
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("stats")
        .arg(&file)
        .args(["--as", "nathan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages: 3"))
        .stdout(predicate::str::contains("Media: 1"))
        .stdout(predicate::str::contains("Dominant sender: jess"))
        .stdout(predicate::str::contains("Sent:     1"))
        .stdout(predicate::str::contains("Received: 2"));
}

#[test]
fn test_stats_unknown_user_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_conversation(&dir, CONVERSATION);

    cli_cmd()
        .arg("stats")
        .arg(&file)
        .args(["--as", "mallory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown participant: mallory"));
}

#[test]
fn test_help() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("participants"))
        .stdout(predicate::str::contains("stats"));
}
