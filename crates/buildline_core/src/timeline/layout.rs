//! Full layout assembly, draw order and hit testing.
//!
//! # Responsibility
//! - Chain bounds, geometry, header and glyph stages for one item list.
//! - Expose a draw list in the fixed z-order the host must respect.
//! - Resolve pointer positions to the topmost item.
//!
//! # Invariants
//! - An empty item list takes the empty-state path: no geometry is computed.
//! - Draw order is grid lines, row backgrounds, row dividers, today-guide,
//!   items. Hit testing walks the same order in reverse.

use crate::config::LayoutConfig;
use crate::model::item::{ItemKind, TimelineItem};
use crate::timeline::bounds::Bounds;
use crate::timeline::calendar::DateLabels;
use crate::timeline::geometry::Geometry;
use crate::timeline::glyph::{build_glyphs, ItemGlyph};
use crate::timeline::header::{build_header, HeaderBands};
use crate::timeline::zoom::ZoomLevel;
use chrono::NaiveDate;
use log::debug;

/// Layout result for one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineLayout<'a> {
    /// Nothing to draw. Bounds are still known for headers or messaging.
    Empty { bounds: Bounds, zoom: ZoomLevel },
    Ready(LaidOutTimeline<'a>),
}

impl<'a> TimelineLayout<'a> {
    /// Computes the layout for already-normalized `items`.
    pub fn compute(
        items: Vec<TimelineItem<'a>>,
        today: NaiveDate,
        zoom: ZoomLevel,
        hovered: Option<&str>,
        config: &LayoutConfig,
        labels: &impl DateLabels,
    ) -> Self {
        let bounds = Bounds::compute(&items, today, config);
        if items.is_empty() {
            debug!(
                "event=layout_empty module=timeline status=ok zoom={} start={} end={}",
                zoom, bounds.start, bounds.end
            );
            return Self::Empty { bounds, zoom };
        }

        let geometry = Geometry::new(&bounds, zoom.day_width(), config.row_height);
        let header = build_header(&bounds, zoom, &geometry, labels);
        let glyphs = build_glyphs(&items, &geometry, config, hovered);

        debug!(
            "event=layout_computed module=timeline status=ok zoom={} items={} days={} months={}",
            zoom,
            items.len(),
            geometry.total_days(),
            header.months.len()
        );

        Self::Ready(LaidOutTimeline {
            bounds,
            zoom,
            geometry,
            header,
            glyphs,
            items,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        match self {
            Self::Empty { bounds, .. } => bounds,
            Self::Ready(laid_out) => &laid_out.bounds,
        }
    }

    pub fn zoom(&self) -> ZoomLevel {
        match self {
            Self::Empty { zoom, .. } => *zoom,
            Self::Ready(laid_out) => laid_out.zoom,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn as_ready(&self) -> Option<&LaidOutTimeline<'a>> {
        match self {
            Self::Empty { .. } => None,
            Self::Ready(laid_out) => Some(laid_out),
        }
    }
}

/// Geometry-complete timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutTimeline<'a> {
    pub bounds: Bounds,
    pub zoom: ZoomLevel,
    pub geometry: Geometry,
    pub header: HeaderBands,
    /// One glyph per item, row index equal to item index.
    pub glyphs: Vec<ItemGlyph>,
    pub items: Vec<TimelineItem<'a>>,
}

/// One drawing instruction in z-order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand<'l> {
    /// Vertical grid line. `major` lines mark month starts.
    GridLine { x: f64, major: bool },
    RowBackground {
        row: usize,
        top: f64,
        height: f64,
        striped: bool,
    },
    RowDivider { y: f64 },
    TodayGuide { x: f64 },
    Item(&'l ItemGlyph),
}

/// Hover tooltip content for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub name: String,
    pub kind_label: &'static str,
    /// `Feb 1, 2025 - Feb 10, 2025` for bars, single date otherwise.
    pub date_text: String,
    pub status: Option<String>,
}

impl<'a> LaidOutTimeline<'a> {
    pub fn total_width(&self) -> f64 {
        self.geometry.total_width()
    }

    pub fn total_height(&self) -> f64 {
        self.geometry.stack_height(self.items.len())
    }

    pub fn today_x(&self) -> f64 {
        self.geometry.position(self.bounds.today)
    }

    pub fn item(&self, item_id: &str) -> Option<&TimelineItem<'a>> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Emits every draw command in hit-test-relevant z-order.
    pub fn draw_list(&self) -> Vec<DrawCommand<'_>> {
        let rows = self.items.len();
        let row_height = self.geometry.row_height();
        let mut commands = Vec::new();

        for band in &self.header.months {
            commands.push(DrawCommand::GridLine {
                x: band.x,
                major: true,
            });
        }
        for cell in &self.header.days {
            if cell.x != 0.0 && !self.header.months.iter().any(|band| band.x == cell.x) {
                commands.push(DrawCommand::GridLine {
                    x: cell.x,
                    major: false,
                });
            }
        }

        for row in 0..rows {
            commands.push(DrawCommand::RowBackground {
                row,
                top: self.geometry.row_top(row),
                height: row_height,
                striped: row % 2 == 1,
            });
        }
        for row in 0..rows {
            commands.push(DrawCommand::RowDivider {
                y: self.geometry.row_top(row + 1),
            });
        }

        commands.push(DrawCommand::TodayGuide { x: self.today_x() });
        commands.extend(self.glyphs.iter().map(DrawCommand::Item));
        commands
    }

    /// Topmost glyph under `(x, y)` in content coordinates.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ItemGlyph> {
        self.glyphs.iter().rev().find(|glyph| glyph.shape.contains(x, y))
    }

    /// Tooltip content for `item_id`.
    pub fn summary(&self, item_id: &str, labels: &impl DateLabels) -> Option<ItemSummary> {
        let item = self.item(item_id)?;
        let date_text = match (item.kind, item.start_date) {
            (ItemKind::Task, Some(start)) => format!(
                "{} - {}",
                labels.long_date(start),
                labels.long_date(item.date)
            ),
            _ => labels.long_date(item.date),
        };
        Some(ItemSummary {
            name: item.name.clone(),
            kind_label: item.kind.label(),
            date_text,
            status: item.status.clone(),
        })
    }
}
