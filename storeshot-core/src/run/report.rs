use std::time::Duration;

use crate::catalog::model::Approach;
use crate::foundation::core::ApproachId;

/// Terminal state of one approach within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Generator ran to completion with a zero exit status.
    Completed,
    /// Generator failed to start or exited non-zero.
    Failed,
    /// Approach was not launched (semi-automated, excluded from this run).
    Skipped,
}

/// Result of one approach invocation.
///
/// Records are created per run and discarded after reporting; nothing is
/// persisted.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RunRecord {
    /// Approach id.
    pub id: ApproachId,
    /// Approach label, carried for reporting.
    pub name: String,
    /// Terminal state.
    pub status: RunStatus,
    /// Failure message, present iff `status` is [`RunStatus::Failed`].
    pub error: Option<String>,
    /// Wall-clock duration of the launch (zero for skipped approaches).
    pub elapsed: Duration,
}

impl RunRecord {
    pub(crate) fn completed(approach: &Approach, elapsed: Duration) -> Self {
        Self {
            id: approach.id,
            name: approach.name.clone(),
            status: RunStatus::Completed,
            error: None,
            elapsed,
        }
    }

    pub(crate) fn failed(approach: &Approach, error: String) -> Self {
        Self {
            id: approach.id,
            name: approach.name.clone(),
            status: RunStatus::Failed,
            error: Some(error),
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn skipped(approach: &Approach) -> Self {
        Self {
            id: approach.id,
            name: approach.name.clone(),
            status: RunStatus::Skipped,
            error: None,
            elapsed: Duration::ZERO,
        }
    }

    /// `true` iff the generator completed successfully.
    pub fn succeeded(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Aggregate outcome of a run-all pass: one record per approach, in id order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    /// Per-approach records in id order.
    pub records: Vec<RunRecord>,
}

impl RunReport {
    /// Number of records with `status`.
    pub fn count(&self, status: RunStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// `true` when at least one approach failed.
    pub fn has_failures(&self) -> bool {
        self.count(RunStatus::Failed) > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/run/report.rs"]
mod tests;
