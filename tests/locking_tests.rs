
use fs2::FileExt;
use predicates::prelude::*;
use serial_test::serial;
use std::fs::OpenOptions;
use tempfile::tempdir;
use test_helpers::{base_moodlog_command, read_entries, scenario_entries, seed_entries, ANGER_ID};

/// A write attempted while another process holds the blob lock fails with an
/// actionable message, and the persisted collection is left as it was.
#[test]
#[serial]
fn test_delete_while_blob_is_locked() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    seed_entries(temp_dir.path(), &scenario_entries());
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(temp_dir.path().join("journalEntries.lock"))?;
    lock_file.lock_exclusive()?;

    base_moodlog_command(temp_dir.path())
        .args(["delete", ANGER_ID, "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to delete the diary entry. Please try again.",
        ))
        .stderr(predicate::str::contains("currently being written"));

    assert_eq!(read_entries(temp_dir.path()).len(), 2);

    lock_file.unlock()?;
    base_moodlog_command(temp_dir.path())
        .args(["delete", ANGER_ID, "--yes"])
        .assert()
        .success();
    assert_eq!(read_entries(temp_dir.path()).len(), 1);
    Ok(())
}

/// Reads never take the lock, so viewing works while a write is in flight.
#[test]
#[serial]
fn test_reads_ignore_blob_lock() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    seed_entries(temp_dir.path(), &scenario_entries());
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(temp_dir.path().join("journalEntries.lock"))?;
    lock_file.lock_exclusive()?;

    base_moodlog_command(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"));

    lock_file.unlock()?;
    Ok(())
}
