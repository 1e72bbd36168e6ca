//! Normalized timeline item model.
//!
//! # Responsibility
//! - Define the single dated shape every source record is projected into.
//! - Define the collection filter exposed to the hosting view.
//!
//! # Invariants
//! - Every `TimelineItem` carries a resolved calendar `date`.
//! - `start_date` is only ever set for `ItemKind::Task`.
//! - `project_date` is set if and only if `kind == ItemKind::ProjectDate`.
//! - `source` borrows the originating record and is never written through.

use crate::model::record::{
    MilestoneRecord, ProjectRecord, RfiRecord, SubmittalRecord, TaskRecord,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Category of a timeline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Task,
    Milestone,
    Rfi,
    Submittal,
    /// One of the project's key dates (online, offline, delivery).
    ProjectDate,
}

impl ItemKind {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Milestone => "milestone",
            Self::Rfi => "rfi",
            Self::Submittal => "submittal",
            Self::ProjectDate => "project_date",
        }
    }

    /// Short user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Milestone => "Milestone",
            Self::Rfi => "RFI",
            Self::Submittal => "Submittal",
            Self::ProjectDate => "Key Date",
        }
    }
}

/// Which project key date a `ProjectDate` item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDateKind {
    Online,
    Offline,
    Delivery,
}

impl ProjectDateKind {
    /// Key dates in their fixed encounter order.
    pub const ALL: [ProjectDateKind; 3] = [Self::Online, Self::Offline, Self::Delivery];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Delivery => "delivery",
        }
    }

    /// Display name used on the timeline row.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Online => "Target Online",
            Self::Offline => "Target Offline",
            Self::Delivery => "Delivery",
        }
    }

    /// Raw date field on the project record for this key date.
    pub fn raw_date(self, project: &ProjectRecord) -> Option<&str> {
        match self {
            Self::Online => project.target_online_date.as_deref(),
            Self::Offline => project.target_offline_date.as_deref(),
            Self::Delivery => project.delivery_date.as_deref(),
        }
    }
}

/// Weak back-reference to the record an item was projected from.
///
/// Handed back verbatim to click handlers so hosts act on their own data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRef<'a> {
    Project(&'a ProjectRecord),
    Task(&'a TaskRecord),
    Milestone(&'a MilestoneRecord),
    Rfi(&'a RfiRecord),
    Submittal(&'a SubmittalRecord),
}

/// Canonical dated record used for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem<'a> {
    /// Unique within one normalization pass, e.g. `task-<uuid>`.
    pub id: String,
    pub kind: ItemKind,
    pub name: String,
    /// Anchor (due) date.
    pub date: NaiveDate,
    /// Meaningful only for tasks. May be later than `date` on bad data.
    pub start_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub project_date: Option<ProjectDateKind>,
    pub source: SourceRef<'a>,
}

impl TimelineItem<'_> {
    /// Returns whether this item renders as a duration bar.
    pub fn has_duration(&self) -> bool {
        self.kind == ItemKind::Task && self.start_date.is_some()
    }

    /// Earliest date this item occupies on the timeline.
    pub fn earliest_date(&self) -> NaiveDate {
        match self.start_date {
            Some(start) if start < self.date => start,
            _ => self.date,
        }
    }
}

/// Collection filter chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFilter {
    #[default]
    All,
    Tasks,
    Milestones,
    Rfis,
    Submittals,
}

impl ItemFilter {
    pub const ALL: [ItemFilter; 5] = [
        Self::All,
        Self::Tasks,
        Self::Milestones,
        Self::Rfis,
        Self::Submittals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tasks => "tasks",
            Self::Milestones => "milestones",
            Self::Rfis => "rfis",
            Self::Submittals => "submittals",
        }
    }

    /// Returns whether items of `kind` pass this filter.
    ///
    /// Project key dates pass every filter.
    pub fn admits(self, kind: ItemKind) -> bool {
        match (self, kind) {
            (_, ItemKind::ProjectDate) => true,
            (Self::All, _) => true,
            (Self::Tasks, ItemKind::Task) => true,
            (Self::Milestones, ItemKind::Milestone) => true,
            (Self::Rfis, ItemKind::Rfi) => true,
            (Self::Submittals, ItemKind::Submittal) => true,
            _ => false,
        }
    }
}

impl Display for ItemFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemFilter {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ParseFilterError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == normalized)
            .ok_or_else(|| ParseFilterError::Unsupported(normalized.to_string()))
    }
}

/// Filter identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFilterError {
    Empty,
    Unsupported(String),
}

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "filter value must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported filter `{value}`; expected all|tasks|milestones|rfis|submittals"
            ),
        }
    }
}

impl Error for ParseFilterError {}

#[cfg(test)]
mod tests {
    use super::{ItemFilter, ItemKind, ParseFilterError};

    #[test]
    fn project_dates_pass_every_filter() {
        for filter in ItemFilter::ALL {
            assert!(filter.admits(ItemKind::ProjectDate));
        }
    }

    #[test]
    fn narrow_filters_admit_only_their_kind() {
        assert!(ItemFilter::Rfis.admits(ItemKind::Rfi));
        assert!(!ItemFilter::Rfis.admits(ItemKind::Task));
        assert!(!ItemFilter::Tasks.admits(ItemKind::Submittal));
        assert!(ItemFilter::All.admits(ItemKind::Milestone));
    }

    #[test]
    fn parses_known_filters_and_rejects_others() {
        assert_eq!("tasks".parse::<ItemFilter>(), Ok(ItemFilter::Tasks));
        assert_eq!(" all ".parse::<ItemFilter>(), Ok(ItemFilter::All));
        assert_eq!("".parse::<ItemFilter>(), Err(ParseFilterError::Empty));
        assert_eq!(
            "Tasks".parse::<ItemFilter>(),
            Err(ParseFilterError::Unsupported("Tasks".to_string()))
        );
    }
}
