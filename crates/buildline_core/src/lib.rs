//! Timeline layout engine for construction project schedules.
//! This crate is the single source of truth for timeline layout invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod timeline;

pub use config::{ConfigError, LayoutConfig, MAX_CONFIG_DAYS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{
    ItemFilter, ItemKind, ParseFilterError, ProjectDateKind, SourceRef, TimelineItem,
};
pub use model::record::{
    MilestoneRecord, ProjectRecord, ProjectSnapshot, RecordId, RfiRecord, SubmittalRecord,
    TaskRecord, TimelineSources,
};
pub use service::timeline_service::{
    ItemClickHandler, TimelineService, ViewAction, ViewChange, ViewState,
};
pub use timeline::bounds::Bounds;
pub use timeline::calendar::{
    days_between, parse_calendar_date, today_utc, DateLabels, EnglishLabels,
};
pub use timeline::geometry::Geometry;
pub use timeline::glyph::{legend, resolve_color, Color, GlyphMode, ItemGlyph, Shape};
pub use timeline::header::{build_header, DayCell, HeaderBands, MonthBand};
pub use timeline::layout::{DrawCommand, ItemSummary, LaidOutTimeline, TimelineLayout};
pub use timeline::normalize::normalize_items;
pub use timeline::viewport::{PanDirection, ViewportController};
pub use timeline::zoom::{ParseZoomError, ZoomLevel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
