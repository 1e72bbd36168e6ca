//! Named timeline scales.
//!
//! # Invariants
//! - Levels are ordered `week < month < quarter < half_year` from most to
//!   least detailed.
//! - Stepping past either end is a no-op.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed zoom level with its pixel scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoomLevel {
    Week,
    #[default]
    Month,
    Quarter,
    HalfYear,
}

impl ZoomLevel {
    /// Levels from most to least detailed.
    pub const ORDERED: [ZoomLevel; 4] = [Self::Week, Self::Month, Self::Quarter, Self::HalfYear];

    pub fn id(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::HalfYear => "halfYear",
        }
    }

    /// Pixels per calendar day.
    pub fn day_width(self) -> f64 {
        match self {
            Self::Week => 40.0,
            Self::Month => 24.0,
            Self::Quarter => 8.0,
            Self::HalfYear => 4.0,
        }
    }

    /// Whether the header carries a per-day row.
    pub fn shows_day_header(self) -> bool {
        matches!(self, Self::Week | Self::Month)
    }

    /// One step toward `Week`; stays put at `Week`.
    pub fn zoom_in(self) -> Self {
        match self {
            Self::Week | Self::Month => Self::Week,
            Self::Quarter => Self::Month,
            Self::HalfYear => Self::Quarter,
        }
    }

    /// One step toward `HalfYear`; stays put at `HalfYear`.
    pub fn zoom_out(self) -> Self {
        match self {
            Self::Week => Self::Month,
            Self::Month => Self::Quarter,
            Self::Quarter | Self::HalfYear => Self::HalfYear,
        }
    }

    pub fn can_zoom_in(self) -> bool {
        self != Self::Week
    }

    pub fn can_zoom_out(self) -> bool {
        self != Self::HalfYear
    }
}

impl Display for ZoomLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ZoomLevel {
    type Err = ParseZoomError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ParseZoomError::Empty);
        }
        Self::ORDERED
            .into_iter()
            .find(|level| level.id() == normalized)
            .ok_or_else(|| ParseZoomError::Unsupported(normalized.to_string()))
    }
}

/// Zoom identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseZoomError {
    Empty,
    Unsupported(String),
}

impl Display for ParseZoomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "zoom value must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported zoom `{value}`; expected week|month|quarter|halfYear"
            ),
        }
    }
}

impl Error for ParseZoomError {}

#[cfg(test)]
mod tests {
    use super::{ParseZoomError, ZoomLevel};

    #[test]
    fn zoom_in_at_week_is_noop() {
        assert_eq!(ZoomLevel::Week.zoom_in(), ZoomLevel::Week);
        assert!(!ZoomLevel::Week.can_zoom_in());
    }

    #[test]
    fn zoom_out_at_half_year_is_noop() {
        assert_eq!(ZoomLevel::HalfYear.zoom_out(), ZoomLevel::HalfYear);
        assert!(!ZoomLevel::HalfYear.can_zoom_out());
    }

    #[test]
    fn steps_walk_the_ordered_list() {
        let mut level = ZoomLevel::HalfYear;
        let mut seen = vec![level];
        while level.can_zoom_in() {
            level = level.zoom_in();
            seen.push(level);
        }
        seen.reverse();
        assert_eq!(seen, ZoomLevel::ORDERED.to_vec());
        assert_eq!(ZoomLevel::Month.zoom_out(), ZoomLevel::Quarter);
    }

    #[test]
    fn only_detailed_levels_show_days() {
        assert!(ZoomLevel::Week.shows_day_header());
        assert!(ZoomLevel::Month.shows_day_header());
        assert!(!ZoomLevel::Quarter.shows_day_header());
        assert!(!ZoomLevel::HalfYear.shows_day_header());
    }

    #[test]
    fn parses_ids() {
        assert_eq!("halfYear".parse::<ZoomLevel>(), Ok(ZoomLevel::HalfYear));
        assert_eq!(
            "half_year".parse::<ZoomLevel>(),
            Err(ParseZoomError::Unsupported("half_year".to_string()))
        );
        assert_eq!(" ".parse::<ZoomLevel>(), Err(ParseZoomError::Empty));
    }
}
