//! Month and day header bands.
//!
//! # Invariants
//! - Month bands tile `[0, total_width]` without gaps; the last band absorbs
//!   any remainder.
//! - Day cells exist only for zoom levels that show a day header.

use crate::timeline::bounds::Bounds;
use crate::timeline::calendar::{add_days, is_weekend, DateLabels};
use crate::timeline::geometry::Geometry;
use crate::timeline::zoom::ZoomLevel;
use chrono::{Datelike, NaiveDate};

/// One contiguous run of days sharing a calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBand {
    pub label: String,
    pub x: f64,
    pub width: f64,
    /// First visible day of the band.
    pub first_day: NaiveDate,
}

/// One day column in the detailed header row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub label: String,
    pub day_name: String,
    pub x: f64,
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_today: bool,
}

/// Both header rows for one layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBands {
    pub months: Vec<MonthBand>,
    pub days: Vec<DayCell>,
}

/// Builds header bands by walking every day offset in `0..=total_days`.
pub fn build_header(
    bounds: &Bounds,
    zoom: ZoomLevel,
    geometry: &Geometry,
    labels: &impl DateLabels,
) -> HeaderBands {
    let total_days = geometry.total_days();
    let total_width = geometry.total_width();
    let with_days = zoom.shows_day_header();

    let mut months: Vec<MonthBand> = Vec::new();
    let mut days = Vec::new();
    let mut current_month: Option<(i32, u32)> = None;

    for offset in 0..=total_days {
        let date = add_days(bounds.start, offset);
        let x = offset as f64 * geometry.day_width();
        let key = (date.year(), date.month());

        if current_month != Some(key) {
            if let Some(previous) = months.last_mut() {
                previous.width = x - previous.x;
            }
            months.push(MonthBand {
                label: labels.month_label(date),
                x,
                width: 0.0,
                first_day: date,
            });
            current_month = Some(key);
        }

        if with_days {
            days.push(DayCell {
                label: labels.day_label(date),
                day_name: labels.day_name(date),
                x,
                date,
                is_weekend: is_weekend(date),
                is_today: date == bounds.today,
            });
        }
    }

    if let Some(last) = months.last_mut() {
        last.width = total_width - last.x;
    }

    HeaderBands { months, days }
}
