use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const MARKER_FILE: &str = "last-update-check";

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("update state IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("update action failed: {0}")]
    Action(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The marker already holds today's date; the action was not run.
    Skipped,
    Ran,
}

pub fn marker_path(home: &Path) -> PathBuf {
    home.join(MARKER_FILE)
}

pub fn last_checked(home: &Path) -> Option<String> {
    let text = fs::read_to_string(marker_path(home)).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn today_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Once-per-day maintenance gate. Runs `action` unless the marker file
/// already records `today`; the marker is only written after the action
/// succeeds, so a failed attempt is retried on the next invocation.
///
/// Dates are compared as exact ISO strings, no timezone normalization.
pub fn run_if_due(
    home: &Path,
    today: &str,
    action: impl FnOnce() -> Result<(), String>,
) -> Result<UpdateStatus, UpdateError> {
    if last_checked(home).as_deref() == Some(today) {
        return Ok(UpdateStatus::Skipped);
    }
    action().map_err(UpdateError::Action)?;
    fs::create_dir_all(home)?;
    fs::write(marker_path(home), format!("{today}\n"))?;
    Ok(UpdateStatus::Ran)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    #[test]
    fn runs_and_records_when_marker_is_absent() {
        let home = TempDir::new().expect("tempdir");
        let ran = Cell::new(false);
        let status = run_if_due(home.path(), "2026-08-24", || {
            ran.set(true);
            Ok(())
        })
        .expect("run");
        assert_eq!(status, UpdateStatus::Ran);
        assert!(ran.get());
        assert_eq!(
            last_checked(home.path()).as_deref(),
            Some("2026-08-24")
        );
    }

    #[test]
    fn same_day_marker_suppresses_the_action() {
        let home = TempDir::new().expect("tempdir");
        fs::write(marker_path(home.path()), "2026-08-24\n").expect("marker");
        let status = run_if_due(home.path(), "2026-08-24", || {
            panic!("action must not run twice in one day")
        })
        .expect("run");
        assert_eq!(status, UpdateStatus::Skipped);
    }

    #[test]
    fn stale_marker_runs_again() {
        let home = TempDir::new().expect("tempdir");
        fs::write(marker_path(home.path()), "2026-08-23\n").expect("marker");
        let status = run_if_due(home.path(), "2026-08-24", || Ok(())).expect("run");
        assert_eq!(status, UpdateStatus::Ran);
        assert_eq!(
            last_checked(home.path()).as_deref(),
            Some("2026-08-24")
        );
    }

    #[test]
    fn failed_action_leaves_the_marker_untouched() {
        let home = TempDir::new().expect("tempdir");
        fs::write(marker_path(home.path()), "2026-08-23\n").expect("marker");
        let err = run_if_due(home.path(), "2026-08-24", || Err("pull failed".to_string()))
            .expect_err("action failure");
        assert!(matches!(err, UpdateError::Action(_)));
        assert_eq!(
            last_checked(home.path()).as_deref(),
            Some("2026-08-23")
        );
    }

    #[test]
    fn today_stamp_is_an_iso_calendar_date() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
    }
}
