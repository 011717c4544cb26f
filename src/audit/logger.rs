//! Append-only JSONL audit log

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::tracker::{StateChange, Subscriber};

use super::entry::AuditEntry;

/// Writes audit entries to, and reads them from, one log file
///
/// Each entry occupies one line. The file is opened per append so a crash
/// loses at most the line being written.
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    pub fn append(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| {
                TrackerError::Io(format!("Cannot append to {}: {}", self.path.display(), e))
            })
    }

    /// Every entry in the log, oldest first
    ///
    /// A missing file is an empty log. Blank lines are skipped and a line
    /// that is not an entry fails the whole read with its line number.
    pub fn entries(&self) -> TrackerResult<Vec<AuditEntry>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TrackerError::Io(format!(
                    "Cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    TrackerError::Json(format!("Audit log line {} is unreadable: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let entries = self.entries()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.into_iter().skip(skip).collect())
    }

    /// A tracker subscriber that appends every record change
    ///
    /// Failed appends go to the diagnostic log and never reach the tracker.
    pub fn into_subscriber(self) -> Subscriber {
        Box::new(move |change: &StateChange| {
            let Some(entry) = AuditEntry::from_change(change) else {
                return;
            };
            if let Err(e) = self.append(&entry) {
                tracing::warn!(path = %self.path.display(), error = %e, "audit entry not written");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{Action, RecordKind};
    use crate::models::{Category, CategoryBudget, Money, NewTransaction};
    use crate::storage::MemoryStore;
    use crate::tracker::{Tracker, WriteMode};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn logger_in(dir: &TempDir) -> AuditLogger {
        AuditLogger::new(dir.path().join("audit.log"))
    }

    fn groceries() -> NewTransaction {
        NewTransaction::new(
            Money::from_cents(5000),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Groceries",
            Category::Food,
        )
    }

    fn budget_entry(cents: i64) -> AuditEntry {
        AuditEntry::from_change(&StateChange::BudgetSet {
            previous: None,
            budget: CategoryBudget::new(Category::Food, Money::from_cents(cents)),
        })
        .unwrap()
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let logger = logger_in(&dir);
        assert!(logger.entries().unwrap().is_empty());
        assert!(logger.recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_append_writes_one_line_per_entry() {
        let dir = TempDir::new().unwrap();
        let logger = logger_in(&dir);
        logger.append(&budget_entry(100)).unwrap();
        logger.append(&budget_entry(200)).unwrap();

        let text = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(logger.entries().unwrap()[1].after.as_ref().unwrap()["amount"], 200);
    }

    #[test]
    fn test_recent_keeps_the_tail() {
        let dir = TempDir::new().unwrap();
        let logger = logger_in(&dir);
        for cents in 1..=10 {
            logger.append(&budget_entry(cents)).unwrap();
        }

        let amounts: Vec<i64> = logger
            .recent(3)
            .unwrap()
            .iter()
            .map(|e| e.after.as_ref().unwrap()["amount"].as_i64().unwrap())
            .collect();
        assert_eq!(amounts, vec![8, 9, 10]);
        assert_eq!(logger.recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_bad_line_is_reported_by_number() {
        let dir = TempDir::new().unwrap();
        let logger = logger_in(&dir);
        logger.append(&budget_entry(100)).unwrap();
        let mut text = std::fs::read_to_string(logger.path()).unwrap();
        text.push_str("\nnot json\n");
        std::fs::write(logger.path(), text).unwrap();

        let err = logger.entries().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_subscriber_records_tracker_changes() {
        let dir = TempDir::new().unwrap();
        let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::Deferred).unwrap();
        tracker.subscribe(logger_in(&dir).into_subscriber());

        let txn = tracker.add_transaction(groceries());
        let mut edited = txn.clone();
        edited.amount = Money::from_cents(6000);
        tracker.update_transaction(edited).unwrap();
        tracker.delete_transaction(txn.id);
        tracker.set_budget(CategoryBudget::new(Category::Food, Money::from_cents(20000)));
        tracker.flush().unwrap();

        let recorded: Vec<(Action, RecordKind)> = logger_in(&dir)
            .entries()
            .unwrap()
            .iter()
            .map(|e| (e.action, e.kind))
            .collect();
        assert_eq!(
            recorded,
            vec![
                (Action::Create, RecordKind::Transaction),
                (Action::Update, RecordKind::Transaction),
                (Action::Delete, RecordKind::Transaction),
                (Action::Create, RecordKind::Budget),
            ]
        );
    }

    #[test]
    fn test_unwritable_log_does_not_disturb_tracker() {
        let dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(dir.path().join("missing").join("audit.log"));
        let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::Deferred).unwrap();
        tracker.subscribe(logger.into_subscriber());

        tracker.add_transaction(groceries());
        assert_eq!(tracker.transactions().len(), 1);
    }
}
