use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn notebook_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("notebook"))
}

/// Command running inside `dir` against `dir/notes.json`
fn notebook_in(dir: &TempDir) -> Command {
    let mut cmd = notebook_cmd();
    cmd.current_dir(dir.path())
        .arg("--file")
        .arg(dir.path().join("notes.json"));
    cmd
}

fn add_note(dir: &TempDir, title: &str, content: &str) {
    notebook_in(dir)
        .args(["add", title, content])
        .assert()
        .success();
}

fn read_notes(dir: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    notebook_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("personal notebook"));
}

#[test]
fn test_version() {
    notebook_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notebook"));
}

#[test]
fn test_unknown_priority_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .args(["add", "Title", "Body", "-p", "urgent"])
        .assert()
        .failure();

    assert!(!temp_dir.path().join("notes.json").exists());
}

// =============================================================================
// Add and List
// =============================================================================

#[test]
fn test_add_then_list_active() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .args(["add", "Buy milk", "2% organic", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added with ID: 1"));

    notebook_in(&temp_dir)
        .args(["list", "-s", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Buy milk | high | active |"));

    notebook_in(&temp_dir)
        .args(["list", "-s", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_add_writes_pretty_json_record() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Buy milk", "2% organic");

    let notes = read_notes(&temp_dir);
    let records = notes.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["title"], "Buy milk");
    assert_eq!(records[0]["priority"], "medium");
    assert_eq!(records[0]["status"], "active");
    assert!(records[0]["created_at"].as_str().unwrap().contains('T'));

    let raw = std::fs::read_to_string(temp_dir.path().join("notes.json")).unwrap();
    assert!(raw.contains("\n  {"));
}

#[test]
fn test_add_priority_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .args(["add", "Loud", "text", "--priority", "HIGH"])
        .assert()
        .success();

    assert_eq!(read_notes(&temp_dir)[0]["priority"], "high");
}

#[test]
fn test_add_blank_title_fails() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .args(["add", "   ", "content"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));
}

#[test]
fn test_ids_increase() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "One", "a");
    add_note(&temp_dir, "Two", "b");

    notebook_in(&temp_dir)
        .args(["add", "Three", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added with ID: 3"));
}

#[test]
fn test_list_by_tag() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .args(["add", "Groceries", "eggs", "--tag", "Shopping"])
        .assert()
        .success();
    add_note(&temp_dir, "Other", "text");

    notebook_in(&temp_dir)
        .args(["list", "--tag", "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Other").not());
}

#[test]
fn test_list_json() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Alpha", "first");

    let output = notebook_in(&temp_dir)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let notes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(notes[0]["title"], "Alpha");
}

#[test]
fn test_list_on_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();

    notebook_in(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_list_on_malformed_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("notes.json"), "{ not json").unwrap();

    notebook_in(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_list_skips_invalid_records() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("notes.json"),
        r#"[
  {"id": 1, "title": "Readable", "content": "x", "priority": "high", "status": "active", "created_at": "2024-01-01T10:00:00.000000"},
  {"id": 2, "title": "Broken", "content": "y", "priority": "Urgent", "status": "active", "created_at": "2024-01-02T10:00:00.000000"}
]"#,
    )
    .unwrap();

    notebook_in(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Readable | high | active | 2024-01-01"))
        .stdout(predicate::str::contains("Broken").not());
}

#[test]
fn test_add_refuses_to_overwrite_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.json");
    std::fs::write(&path, "{ not json").unwrap();

    notebook_in(&temp_dir)
        .args(["add", "Title", "Body"])
        .assert()
        .failure();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_matches_title_and_content() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Banana bread", "bake it");
    add_note(&temp_dir, "Groceries", "buy bananas");
    add_note(&temp_dir, "Taxes", "file them");

    notebook_in(&temp_dir)
        .args(["search", "ban"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 results for 'ban'"))
        .stdout(predicate::str::contains("Banana bread"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Taxes").not());
}

#[test]
fn test_search_shows_excerpt() {
    let temp_dir = TempDir::new().unwrap();
    let long = "x".repeat(80);
    add_note(&temp_dir, "Long", &long);

    notebook_in(&temp_dir)
        .args(["search", "long"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}...", "x".repeat(60))));
}

// =============================================================================
// Show and Update
// =============================================================================

#[test]
fn test_show() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Buy milk", "2% organic");

    notebook_in(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("2% organic"));
}

#[test]
fn test_show_missing_note_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Only", "one");

    notebook_in(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 42"));
}

#[test]
fn test_update_keeps_id_and_created_at() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Draft", "text");
    let before = read_notes(&temp_dir)[0]["created_at"].clone();

    notebook_in(&temp_dir)
        .args(["update", "1", "--title", "Final", "-s", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated note 1"));

    let notes = read_notes(&temp_dir);
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["id"], 1);
    assert_eq!(notes[0]["title"], "Final");
    assert_eq!(notes[0]["status"], "done");
    assert_eq!(notes[0]["created_at"], before);
}

#[test]
fn test_update_json_output() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Draft", "text");

    let output = notebook_in(&temp_dir)
        .args(["update", "1", "--add-tag", "work", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let note: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(note["tags"][0], "work");
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_invalid_id_leaves_store_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "Keep me", "safe");
    let path = temp_dir.path().join("notes.json");
    let before = std::fs::read_to_string(&path).unwrap();

    notebook_in(&temp_dir)
        .args(["delete", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid note ID: abc"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_delete_force() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "One", "a");
    add_note(&temp_dir, "Two", "b");

    notebook_in(&temp_dir)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted note 1"));

    let notes = read_notes(&temp_dir);
    let records = notes.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 2);
}

#[test]
fn test_delete_prompt_declined() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "One", "a");

    notebook_in(&temp_dir)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert_eq!(read_notes(&temp_dir).as_array().unwrap().len(), 1);
}

#[test]
fn test_delete_prompt_confirmed() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "One", "a");

    notebook_in(&temp_dir)
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted note 1"));

    assert!(read_notes(&temp_dir).as_array().unwrap().is_empty());
}

#[test]
fn test_delete_missing_id_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    add_note(&temp_dir, "One", "a");
    let path = temp_dir.path().join("notes.json");
    let before = std::fs::read_to_string(&path).unwrap();

    notebook_in(&temp_dir)
        .args(["delete", "9", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 9"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_sets_notes_path_and_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".notebook.toml"),
        "[notebook]\nfile = \"data/my-notes.json\"\ndefault_priority = \"low\"\n",
    )
    .unwrap();

    notebook_cmd()
        .args(["add", "Configured", "note"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let raw = std::fs::read_to_string(temp_dir.path().join("data/my-notes.json")).unwrap();
    let notes: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(notes[0]["priority"], "low");
}

#[test]
fn test_bad_config_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    std::fs::write(&config, "[notebook\n").unwrap();

    notebook_cmd()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
