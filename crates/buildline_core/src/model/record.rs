//! Source records as delivered by the remote project store.
//!
//! # Responsibility
//! - Mirror the external record shapes consumed by the timeline.
//! - Lend a borrowed, read-only view (`TimelineSources`) to the engine.
//!
//! # Invariants
//! - Records are never mutated by the engine; it only holds shared borrows.
//! - Date fields stay raw strings here. Parsing (and silent exclusion of
//!   unparsable values) happens during normalization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier used by every record in the remote store.
pub type RecordId = Uuid;

/// Project-level key dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub target_online_date: Option<String>,
    #[serde(default)]
    pub target_offline_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

/// Schedule task. Only tasks may carry a start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request for information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfiRecord {
    pub id: RecordId,
    /// Sequential RFI number, rendered zero-padded to three digits.
    pub number: u32,
    pub subject: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittalRecord {
    pub id: RecordId,
    /// Specification section code, e.g. `05 12 00`.
    #[serde(default)]
    pub spec_section: Option<String>,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Borrowed view over every collection the timeline reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineSources<'a> {
    pub project: Option<&'a ProjectRecord>,
    pub tasks: &'a [TaskRecord],
    pub milestones: &'a [MilestoneRecord],
    pub rfis: &'a [RfiRecord],
    pub submittals: &'a [SubmittalRecord],
}

/// Owned bundle of records, e.g. one fetch result or a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub project: Option<ProjectRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub milestones: Vec<MilestoneRecord>,
    #[serde(default)]
    pub rfis: Vec<RfiRecord>,
    #[serde(default)]
    pub submittals: Vec<SubmittalRecord>,
}

impl ProjectSnapshot {
    /// Lends the snapshot to the engine without copying records.
    pub fn sources(&self) -> TimelineSources<'_> {
        TimelineSources {
            project: self.project.as_ref(),
            tasks: &self.tasks,
            milestones: &self.milestones,
            rfis: &self.rfis,
            submittals: &self.submittals,
        }
    }
}
