//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizkit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizkit").unwrap()
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizkit.toml"))
        .stdout(predicate::str::contains("Created content/quizzes.json"));

    assert!(dir.path().join("quizkit.toml").exists());
    assert!(dir.path().join("content/quizzes.json").exists());
    assert!(dir.path().join("content/fund-basics.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_sample_content() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("All content valid"));
}

#[test]
fn validate_missing_content_dir_fails() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_authoring_warnings() {
    let dir = TempDir::new().unwrap();
    let content = dir.path().join("content");
    std::fs::create_dir_all(&content).unwrap();
    std::fs::write(
        content.join("quizzes.json"),
        r#"[{"id": "broken", "title": "Broken", "part": 1, "chapter": "broken", "totalQuestions": 5}]"#,
    )
    .unwrap();
    std::fs::write(
        content.join("broken.json"),
        r#"[{
            "id": "b1",
            "chapter": "broken",
            "difficulty": "beginner",
            "type": "single",
            "question": "Pick one.",
            "options": [{"id": "a", "text": "A"}],
            "correctAnswers": ["z"],
            "explanation": "",
            "sourceUrl": ""
        }]"#,
    )
    .unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("not an option ID"))
        .stdout(predicate::str::contains("declares 5"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn clear_with_confirmation_succeeds() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All progress cleared"));
}

#[test]
fn history_with_no_results() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results recorded"));
}

#[test]
fn stats_with_no_attempts() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No attempts recorded"));
}

#[test]
fn play_unknown_quiz_fails() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .args(["play", "--quiz", "nonexistent"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quiz"));
}
