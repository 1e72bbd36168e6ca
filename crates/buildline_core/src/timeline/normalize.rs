//! Projection of source records into timeline items.
//!
//! # Responsibility
//! - Apply the collection filter.
//! - Resolve dates and compose type-specific display names.
//! - Produce the date-ordered item list consumed by every later stage.
//!
//! # Invariants
//! - Project key dates are included under every filter.
//! - Records without a parseable anchor date are dropped, never reported as
//!   errors.
//! - Output is sorted ascending by `date`; equal dates keep encounter order
//!   (key dates, tasks, milestones, RFIs, submittals).

use crate::model::item::{ItemFilter, ItemKind, ProjectDateKind, SourceRef, TimelineItem};
use crate::model::record::{RfiRecord, SubmittalRecord, TimelineSources};
use crate::timeline::calendar::parse_optional_date;
use log::debug;

/// Normalizes every admitted source record into a sorted item list.
pub fn normalize_items<'a>(
    sources: &TimelineSources<'a>,
    filter: ItemFilter,
) -> Vec<TimelineItem<'a>> {
    let mut items = Vec::new();
    let mut dropped = 0_usize;

    if let Some(project) = sources.project {
        for kind in ProjectDateKind::ALL {
            match parse_optional_date(kind.raw_date(project)) {
                Some(date) => items.push(TimelineItem {
                    id: format!("project-{}", kind.as_str()),
                    kind: ItemKind::ProjectDate,
                    name: kind.display_name().to_string(),
                    date,
                    start_date: None,
                    status: None,
                    project_date: Some(kind),
                    source: SourceRef::Project(project),
                }),
                None => dropped += 1,
            }
        }
    }

    if filter.admits(ItemKind::Task) {
        for task in sources.tasks {
            let Some(date) = parse_optional_date(task.due_date.as_deref()) else {
                dropped += 1;
                continue;
            };
            items.push(TimelineItem {
                id: format!("task-{}", task.id),
                kind: ItemKind::Task,
                name: task.title.clone(),
                date,
                start_date: parse_optional_date(task.start_date.as_deref()),
                status: task.status.clone(),
                project_date: None,
                source: SourceRef::Task(task),
            });
        }
    }

    if filter.admits(ItemKind::Milestone) {
        for milestone in sources.milestones {
            let Some(date) = parse_optional_date(milestone.due_date.as_deref()) else {
                dropped += 1;
                continue;
            };
            items.push(TimelineItem {
                id: format!("milestone-{}", milestone.id),
                kind: ItemKind::Milestone,
                name: milestone.name.clone(),
                date,
                start_date: None,
                status: milestone.status.clone(),
                project_date: None,
                source: SourceRef::Milestone(milestone),
            });
        }
    }

    if filter.admits(ItemKind::Rfi) {
        for rfi in sources.rfis {
            let Some(date) = parse_optional_date(rfi.due_date.as_deref()) else {
                dropped += 1;
                continue;
            };
            items.push(TimelineItem {
                id: format!("rfi-{}", rfi.id),
                kind: ItemKind::Rfi,
                name: rfi_display_name(rfi),
                date,
                start_date: None,
                status: rfi.status.clone(),
                project_date: None,
                source: SourceRef::Rfi(rfi),
            });
        }
    }

    if filter.admits(ItemKind::Submittal) {
        for submittal in sources.submittals {
            let Some(date) = parse_optional_date(submittal.due_date.as_deref()) else {
                dropped += 1;
                continue;
            };
            items.push(TimelineItem {
                id: format!("submittal-{}", submittal.id),
                kind: ItemKind::Submittal,
                name: submittal_display_name(submittal),
                date,
                start_date: None,
                status: submittal.status.clone(),
                project_date: None,
                source: SourceRef::Submittal(submittal),
            });
        }
    }

    // Vec::sort_by_key is stable, which keeps encounter order on ties.
    items.sort_by_key(|item| item.date);

    debug!(
        "event=items_normalized module=timeline status=ok filter={} kept={} dropped={}",
        filter,
        items.len(),
        dropped
    );
    items
}

/// `RFI-007: Door hardware clarification`
pub fn rfi_display_name(rfi: &RfiRecord) -> String {
    format!("RFI-{:03}: {}", rfi.number, rfi.subject)
}

/// `08 71 00 - Door Hardware`, or the bare title when no section is set.
pub fn submittal_display_name(submittal: &SubmittalRecord) -> String {
    match submittal
        .spec_section
        .as_deref()
        .map(str::trim)
        .filter(|section| !section.is_empty())
    {
        Some(section) => format!("{section} - {}", submittal.title),
        None => submittal.title.clone(),
    }
}
