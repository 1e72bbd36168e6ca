//! Render shape and color selection per item.
//!
//! # Responsibility
//! - Pick exactly one render mode per item from `(kind, has start date)`.
//! - Resolve a status-driven color with a fixed per-kind fallback.
//! - Compute final screen geometry and clickable areas.
//!
//! # Invariants
//! - Mode dispatch is an exhaustive match; there is no string-keyed default.
//! - Unrecognized statuses never fail, they take the kind's fallback color.

use crate::config::LayoutConfig;
use crate::model::item::{ItemKind, TimelineItem};
use crate::timeline::geometry::Geometry;

/// Palette used by timeline glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Blue,
    Red,
    Gray,
    Amber,
    Lime,
    Purple,
    Indigo,
    /// Reserved for project key dates.
    Alert,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Blue => "#3b82f6",
            Self::Red => "#ef4444",
            Self::Gray => "#9ca3af",
            Self::Amber => "#f59e0b",
            Self::Lime => "#84cc16",
            Self::Purple => "#a855f7",
            Self::Indigo => "#6366f1",
            Self::Alert => "#dc2626",
        }
    }
}

/// Render mode chosen for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphMode {
    /// Task with a start date: bar from start to due date.
    DurationBar,
    Diamond,
    /// Project key date: dashed line across all rows plus a marker.
    GuideLine,
    /// Everything else: a circle at the anchor date.
    Marker,
}

impl GlyphMode {
    pub fn select(item: &TimelineItem<'_>) -> Self {
        match item.kind {
            ItemKind::Task if item.start_date.is_some() => Self::DurationBar,
            ItemKind::Milestone => Self::Diamond,
            ItemKind::ProjectDate => Self::GuideLine,
            ItemKind::Task | ItemKind::Rfi | ItemKind::Submittal => Self::Marker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Final screen shape for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Bar { rect: Rect, cap: Circle },
    /// Vertices in N, E, S, W order.
    Diamond { vertices: [Point; 4] },
    GuideLine {
        x: f64,
        top: f64,
        bottom: f64,
        dashed: bool,
        marker: Circle,
    },
    Marker(Circle),
}

impl Shape {
    /// Returns whether the point falls on the clickable part of the shape.
    ///
    /// Guide lines are only clickable through their marker.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Self::Bar { rect, cap } => rect.contains(x, y) || cap.contains(x, y),
            Self::Diamond { vertices } => {
                let [north, east, _, _] = vertices;
                let center_x = north.x;
                let center_y = east.y;
                let radius = east.x - center_x;
                (x - center_x).abs() + (y - center_y).abs() <= radius
            }
            Self::GuideLine { marker, .. } => marker.contains(x, y),
            Self::Marker(circle) => circle.contains(x, y),
        }
    }
}

/// Positioned, colored glyph for one item row.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGlyph {
    pub item_id: String,
    pub kind: ItemKind,
    /// Row index, equal to the item's position in the sorted list.
    pub row: usize,
    pub mode: GlyphMode,
    pub color: Color,
    pub hovered: bool,
    pub shape: Shape,
}

/// Resolves the glyph color from kind and status.
pub fn resolve_color(kind: ItemKind, status: Option<&str>) -> Color {
    let key = status.map(status_key).unwrap_or_default();
    match kind {
        ItemKind::Task => match key.as_str() {
            "completed" => Color::Green,
            "inprogress" => Color::Blue,
            "blocked" => Color::Red,
            _ => Color::Gray,
        },
        ItemKind::Milestone => match key.as_str() {
            "completed" | "achieved" => Color::Green,
            "missed" => Color::Red,
            _ => Color::Indigo,
        },
        ItemKind::Rfi => match key.as_str() {
            "answered" => Color::Green,
            "open" => Color::Amber,
            "draft" => Color::Gray,
            _ => Color::Blue,
        },
        ItemKind::Submittal => match key.as_str() {
            "approved" => Color::Green,
            "approvedasnoted" => Color::Lime,
            "reviseandresubmit" => Color::Amber,
            "rejected" => Color::Red,
            _ => Color::Purple,
        },
        ItemKind::ProjectDate => Color::Alert,
    }
}

/// Status legend for one kind. The `None` label row is the fallback color.
pub fn legend(kind: ItemKind) -> &'static [(Option<&'static str>, Color)] {
    match kind {
        ItemKind::Task => &[
            (Some("Completed"), Color::Green),
            (Some("In Progress"), Color::Blue),
            (Some("Blocked"), Color::Red),
            (None, Color::Gray),
        ],
        ItemKind::Milestone => &[
            (Some("Completed"), Color::Green),
            (Some("Missed"), Color::Red),
            (None, Color::Indigo),
        ],
        ItemKind::Rfi => &[
            (Some("Answered"), Color::Green),
            (Some("Open"), Color::Amber),
            (Some("Draft"), Color::Gray),
            (None, Color::Blue),
        ],
        ItemKind::Submittal => &[
            (Some("Approved"), Color::Green),
            (Some("Approved as Noted"), Color::Lime),
            (Some("Revise and Resubmit"), Color::Amber),
            (Some("Rejected"), Color::Red),
            (None, Color::Purple),
        ],
        ItemKind::ProjectDate => &[(None, Color::Alert)],
    }
}

/// Builds glyphs for every item, one row per item in list order.
pub fn build_glyphs(
    items: &[TimelineItem<'_>],
    geometry: &Geometry,
    config: &LayoutConfig,
    hovered: Option<&str>,
) -> Vec<ItemGlyph> {
    let stack_height = geometry.stack_height(items.len());
    items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let is_hovered = hovered == Some(item.id.as_str());
            let mode = GlyphMode::select(item);
            ItemGlyph {
                item_id: item.id.clone(),
                kind: item.kind,
                row,
                mode,
                color: resolve_color(item.kind, item.status.as_deref()),
                hovered: is_hovered,
                shape: build_shape(item, mode, row, geometry, config, is_hovered, stack_height),
            }
        })
        .collect()
}

fn build_shape(
    item: &TimelineItem<'_>,
    mode: GlyphMode,
    row: usize,
    geometry: &Geometry,
    config: &LayoutConfig,
    hovered: bool,
    stack_height: f64,
) -> Shape {
    let center = Point {
        x: geometry.position(item.date),
        y: geometry.row_y(row),
    };
    let marker_radius = if hovered {
        config.marker_radius_hovered
    } else {
        config.marker_radius
    };

    match mode {
        GlyphMode::DurationBar => {
            let start = item.start_date.unwrap_or(item.date);
            let x = geometry.position(start);
            let width = geometry.bar_width(start, item.date, config.min_bar_width);
            Shape::Bar {
                rect: Rect {
                    x,
                    y: center.y - config.bar_height / 2.0,
                    width,
                    height: config.bar_height,
                },
                cap: Circle {
                    center: Point {
                        x: x + width,
                        y: center.y,
                    },
                    radius: config.cap_radius,
                },
            }
        }
        GlyphMode::Diamond => {
            let r = if hovered {
                config.diamond_radius_hovered
            } else {
                config.diamond_radius
            };
            Shape::Diamond {
                vertices: [
                    Point { x: center.x, y: center.y - r },
                    Point { x: center.x + r, y: center.y },
                    Point { x: center.x, y: center.y + r },
                    Point { x: center.x - r, y: center.y },
                ],
            }
        }
        GlyphMode::GuideLine => Shape::GuideLine {
            x: center.x,
            top: 0.0,
            bottom: stack_height,
            dashed: true,
            marker: Circle {
                center,
                radius: marker_radius,
            },
        },
        GlyphMode::Marker => Shape::Marker(Circle {
            center,
            radius: marker_radius,
        }),
    }
}

/// Case, space and punctuation insensitive status key.
fn status_key(status: &str) -> String {
    status
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
