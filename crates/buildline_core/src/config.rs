//! Layout tuning constants.
//!
//! # Responsibility
//! - Carry every pixel and day constant used by the timeline engine.
//! - Validate host-supplied overrides before they reach geometry code.
//!
//! # Invariants
//! - `LayoutConfig::default()` always validates.
//! - Day counts stay within `MAX_CONFIG_DAYS`, so window arithmetic stays in
//!   the calendar range.
//! - Row height never depends on zoom level.

use crate::model::item::ItemFilter;
use crate::timeline::zoom::ZoomLevel;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for every configured day count (about ten years).
pub const MAX_CONFIG_DAYS: i64 = 3650;

/// Tunable layout constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutConfig {
    /// Height of one item row in pixels.
    pub row_height: f64,
    /// Height of a task duration bar.
    pub bar_height: f64,
    /// Floor applied to every duration bar width.
    pub min_bar_width: f64,
    pub marker_radius: f64,
    pub marker_radius_hovered: f64,
    /// Distance from diamond center to each vertex.
    pub diamond_radius: f64,
    pub diamond_radius_hovered: f64,
    /// Radius of the circular cap drawn at a bar's end.
    pub cap_radius: f64,
    /// Days of history always visible before today.
    pub lookback_days: i64,
    /// Days of future always visible after today.
    pub lookahead_days: i64,
    /// Padding added before the earliest date after the item scan.
    pub leading_padding_days: i64,
    /// Padding added after the latest date after the item scan.
    pub trailing_padding_days: i64,
    /// Horizontal viewport fraction where today is parked on recentering.
    pub today_anchor_fraction: f64,
    /// Viewport fraction moved per page action.
    pub pan_fraction: f64,
    pub default_zoom: ZoomLevel,
    pub default_filter: ItemFilter,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 36.0,
            bar_height: 20.0,
            min_bar_width: 8.0,
            marker_radius: 6.0,
            marker_radius_hovered: 8.0,
            diamond_radius: 8.0,
            diamond_radius_hovered: 10.0,
            cap_radius: 5.0,
            lookback_days: 14,
            lookahead_days: 90,
            leading_padding_days: 7,
            trailing_padding_days: 14,
            today_anchor_fraction: 0.25,
            pan_fraction: 0.5,
            default_zoom: ZoomLevel::Month,
            default_filter: ItemFilter::All,
        }
    }
}

impl LayoutConfig {
    /// Validates value ranges.
    ///
    /// # Errors
    /// - `NonPositive` for row/bar heights that are zero, negative or NaN.
    /// - `Negative` for widths, radii or day counts below zero.
    /// - `OutOfRange` for day counts above `MAX_CONFIG_DAYS`.
    /// - `FractionOutOfRange` for fractions outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.row_height, "rowHeight")?;
        require_positive(self.bar_height, "barHeight")?;

        for (value, field) in [
            (self.min_bar_width, "minBarWidth"),
            (self.marker_radius, "markerRadius"),
            (self.marker_radius_hovered, "markerRadiusHovered"),
            (self.diamond_radius, "diamondRadius"),
            (self.diamond_radius_hovered, "diamondRadiusHovered"),
            (self.cap_radius, "capRadius"),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }

        for (value, field) in [
            (self.lookback_days, "lookbackDays"),
            (self.lookahead_days, "lookaheadDays"),
            (self.leading_padding_days, "leadingPaddingDays"),
            (self.trailing_padding_days, "trailingPaddingDays"),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field });
            }
            if value > MAX_CONFIG_DAYS {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    max: MAX_CONFIG_DAYS,
                });
            }
        }

        require_fraction(self.today_anchor_fraction, "todayAnchorFraction")?;
        require_fraction(self.pan_fraction, "panFraction")?;
        Ok(())
    }
}

fn require_positive(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field })
    }
}

fn require_fraction(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FractionOutOfRange { field, value })
    }
}

/// Layout configuration validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str },
    Negative { field: &'static str },
    FractionOutOfRange { field: &'static str, value: f64 },
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field } => write!(f, "`{field}` must be greater than zero"),
            Self::Negative { field } => write!(f, "`{field}` must not be negative"),
            Self::FractionOutOfRange { field, value } => {
                write!(f, "`{field}` must be within (0, 1], got {value}")
            }
            Self::OutOfRange { field, value, max } => {
                write!(f, "`{field}` must be at most {max}, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
