
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use test_helpers::{
    base_moodlog_command, blob_path, read_entries, scenario_entries, seed_entries, ANGER_ID,
    TEST_USER, WORTHLESS_ID,
};

#[test]
#[serial]
fn test_cli_status() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("User: {}", TEST_USER)))
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("Sync: idle"));
}

#[test]
#[serial]
fn test_cli_no_args_shows_recent_view() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    base_moodlog_command(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent entries"))
        .stdout(predicate::str::contains("No diary entries yet"));
}

#[test]
#[serial]
fn test_cli_recent_lists_newest_first() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    let output = base_moodlog_command(temp_dir.path())
        .arg("recent")
        .output()
        .expect("Failed to run moodlog");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let worthless = stdout.find(WORTHLESS_ID).expect("worthless entry listed");
    let anger = stdout.find(ANGER_ID).expect("anger entry listed");
    assert!(worthless < anger);
    assert!(stdout.contains("1月20日 (土)"));
}

#[test]
#[serial]
fn test_cli_search_by_keyword() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["search", "--keyword", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries found"))
        .stdout(predicate::str::contains("Waited [10] minutes"))
        .stdout(predicate::str::contains(WORTHLESS_ID).not());
}

#[test]
#[serial]
fn test_cli_search_by_date_range() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["search", "--from", "2024-01-15", "--to", "20240125"])
        .assert()
        .success()
        .stdout(predicate::str::contains(WORTHLESS_ID))
        .stdout(predicate::str::contains(ANGER_ID).not());
}

#[test]
#[serial]
fn test_cli_search_by_emotion() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["search", "--emotion", "worthlessness"])
        .assert()
        .success()
        .stdout(predicate::str::contains(WORTHLESS_ID))
        .stdout(predicate::str::contains("Self-esteem: 70  Worthlessness: 30"))
        .stdout(predicate::str::contains(ANGER_ID).not());
}

#[test]
#[serial]
fn test_cli_search_without_matches() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["search", "--keyword", "nothing like this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No diary entries match the search."));
}

#[test]
#[serial]
fn test_cli_search_unknown_emotion() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    base_moodlog_command(temp_dir.path())
        .args(["search", "--emotion", "joy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown emotion"));
}

#[test]
#[serial]
fn test_cli_show_includes_counselor_comment() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["show", WORTHLESS_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion: 無価値感"))
        .stdout(predicate::str::contains(
            "Comment from Sato: Nice separation of self and work",
        ));
}

#[test]
#[serial]
fn test_cli_show_unknown_id() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No diary entry with id 'missing'"));
}

#[test]
#[serial]
fn test_cli_edit_scores_are_complementary() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["edit", WORTHLESS_ID, "--self-esteem", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diary entry updated."))
        .stdout(predicate::str::contains("Self-esteem: 45"))
        .stdout(predicate::str::contains("Worthlessness: 55"));

    let stored = read_entries(temp_dir.path());
    let edited = stored
        .iter()
        .find(|e| e.id.as_str() == WORTHLESS_ID)
        .expect("edited entry persisted");
    assert_eq!((edited.self_esteem_score, edited.worthlessness_score), (45, 55));
    assert_eq!(edited.assigned_counselor.as_deref(), Some("Sato"));
}

#[test]
#[serial]
fn test_cli_edit_scores_rejected_for_other_emotions() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());
    let before = fs::read_to_string(blob_path(temp_dir.path())).unwrap();

    base_moodlog_command(temp_dir.path())
        .args(["edit", ANGER_ID, "--event", "changed", "--self-esteem", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scores can only be edited"));

    let after = fs::read_to_string(blob_path(temp_dir.path())).unwrap();
    assert_eq!(before, after);
}

#[test]
#[serial]
fn test_cli_edit_emotion_then_scores() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args([
            "edit",
            ANGER_ID,
            "--date",
            "2024-01-11",
            "--emotion",
            "無価値感",
            "--worthlessness",
            "80",
        ])
        .assert()
        .success();

    let stored = read_entries(temp_dir.path());
    let edited = stored
        .iter()
        .find(|e| e.id.as_str() == ANGER_ID)
        .expect("edited entry persisted");
    assert_eq!(edited.date.to_string(), "2024-01-11");
    assert_eq!((edited.self_esteem_score, edited.worthlessness_score), (20, 80));
}

#[test]
#[serial]
fn test_cli_delete_with_yes() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["delete", ANGER_ID, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diary entry deleted."));

    let stored = read_entries(temp_dir.path());
    assert_eq!(stored.len(), 1);
    assert!(stored.iter().all(|e| e.id.as_str() != ANGER_ID));
}

#[test]
#[serial]
fn test_cli_delete_declined_at_prompt() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["delete", ANGER_ID])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete this diary entry? [y/N]"))
        .stdout(predicate::str::contains("Nothing was deleted."));

    assert_eq!(read_entries(temp_dir.path()).len(), 2);
}

#[test]
#[serial]
fn test_cli_delete_confirmed_at_prompt() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    seed_entries(temp_dir.path(), &scenario_entries());

    base_moodlog_command(temp_dir.path())
        .args(["delete", WORTHLESS_ID])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diary entry deleted."));

    assert_eq!(read_entries(temp_dir.path()).len(), 1);
}

#[test]
#[serial]
fn test_cli_calendar() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    let output = base_moodlog_command(temp_dir.path())
        .args(["calendar", "--month", "2024-01", "--selected", "2024-01-10"])
        .output()
        .expect("Failed to run moodlog");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "2024年1月");
    assert!(lines[2].contains("(31)"));
    assert!(stdout.contains("[10]"));
}

#[test]
#[serial]
fn test_cli_calendar_invalid_month() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    base_moodlog_command(temp_dir.path())
        .args(["calendar", "--month", "January"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
#[serial]
fn test_cli_malformed_blob_loads_as_empty() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::write(blob_path(temp_dir.path()), "{not json").unwrap();

    base_moodlog_command(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 0"));
}

#[test]
#[serial]
fn test_cli_relative_data_dir_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    base_moodlog_command(temp_dir.path())
        .env("MOODLOG_DIR", "relative/moodlog")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}

#[test]
#[serial]
fn test_cli_creates_missing_data_directory() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = temp_dir.path().join("nested").join("moodlog");

    base_moodlog_command(temp_dir.path())
        .env("MOODLOG_DIR", &data_dir)
        .arg("status")
        .assert()
        .success();

    assert!(data_dir.is_dir());
}
