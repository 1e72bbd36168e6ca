//! Visible date window derivation.

use crate::config::LayoutConfig;
use crate::model::item::TimelineItem;
use crate::timeline::calendar::add_days;
use chrono::NaiveDate;

/// Date window the timeline spans, anchored on `today`.
///
/// # Invariants
/// - `start <= today <= end`.
/// - Immutable once computed; recomputed when the item set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
}

impl Bounds {
    /// Computes the window for `items` around `today`.
    ///
    /// Starts from `[today - lookback, today + lookahead]`, widens it to cover
    /// every item's start and anchor date, then pads both edges. An empty item
    /// set yields the padded default window.
    pub fn compute(items: &[TimelineItem<'_>], today: NaiveDate, config: &LayoutConfig) -> Self {
        let mut start = add_days(today, -config.lookback_days);
        let mut end = add_days(today, config.lookahead_days);

        for item in items {
            if let Some(item_start) = item.start_date {
                if item_start < start {
                    start = item_start;
                }
            }
            if item.date < start {
                start = item.date;
            }
            if item.date > end {
                end = item.date;
            }
        }

        Self {
            start: add_days(start, -config.leading_padding_days),
            end: add_days(end, config.trailing_padding_days),
            today,
        }
    }
}
