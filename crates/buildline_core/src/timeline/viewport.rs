//! Horizontal scroll control for the timeline viewport.
//!
//! # Invariants
//! - Scroll offset stays within `[0, max(content_width - viewport_width, 0)]`,
//!   the same range a native scroll container enforces.
//! - Auto-centering happens once per distinct `(bounds, zoom)` pair.

use crate::timeline::bounds::Bounds;
use crate::timeline::zoom::ZoomLevel;
use log::debug;

/// Manual paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    /// Toward earlier dates.
    Back,
    /// Toward later dates.
    Forward,
}

/// Scroll state of the timeline's horizontal container.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport_width: f64,
    content_width: f64,
    scroll_left: f64,
    today_anchor_fraction: f64,
    pan_fraction: f64,
    centered_on: Option<(Bounds, ZoomLevel)>,
}

impl ViewportController {
    pub fn new(viewport_width: f64, today_anchor_fraction: f64, pan_fraction: f64) -> Self {
        Self {
            viewport_width: viewport_width.max(0.0),
            content_width: 0.0,
            scroll_left: 0.0,
            today_anchor_fraction,
            pan_fraction,
            centered_on: None,
        }
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Updates the container width, e.g. after a resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width.max(0.0);
        self.scroll_left = self.clamp(self.scroll_left);
    }

    /// Target offset that parks `today_x` at the anchor fraction of the viewport.
    pub fn anchor_offset(&self, today_x: f64) -> f64 {
        (today_x - self.viewport_width * self.today_anchor_fraction).max(0.0)
    }

    /// Re-centers on today when `(bounds, zoom)` differs from the last
    /// centered pair. Returns whether the scroll offset was reset.
    pub fn sync(
        &mut self,
        bounds: &Bounds,
        zoom: ZoomLevel,
        today_x: f64,
        content_width: f64,
    ) -> bool {
        self.content_width = content_width.max(0.0);
        if self.centered_on == Some((*bounds, zoom)) {
            self.scroll_left = self.clamp(self.scroll_left);
            return false;
        }

        self.scroll_left = self.clamp(self.anchor_offset(today_x));
        self.centered_on = Some((*bounds, zoom));
        debug!(
            "event=viewport_centered module=timeline status=ok zoom={} today_x={} scroll_left={}",
            zoom, today_x, self.scroll_left
        );
        true
    }

    /// Moves one page (a fraction of the viewport width) in `direction`.
    pub fn pan(&mut self, direction: PanDirection) -> f64 {
        let step = self.viewport_width * self.pan_fraction;
        let target = match direction {
            PanDirection::Back => self.scroll_left - step,
            PanDirection::Forward => self.scroll_left + step,
        };
        self.scroll_left = self.clamp(target);
        self.scroll_left
    }

    /// Applies a host-reported scroll position (user dragged the scrollbar).
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_left = self.clamp(offset);
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll())
    }
}

#[cfg(test)]
mod tests {
    use super::{PanDirection, ViewportController};
    use crate::timeline::bounds::Bounds;
    use crate::timeline::zoom::ZoomLevel;
    use chrono::NaiveDate;

    fn bounds() -> Bounds {
        let ymd = |m, d| NaiveDate::from_ymd_opt(2025, m, d).expect("valid date");
        Bounds {
            start: ymd(1, 1),
            end: ymd(6, 1),
            today: ymd(2, 1),
        }
    }

    #[test]
    fn sync_parks_today_at_left_quarter() {
        let mut viewport = ViewportController::new(800.0, 0.25, 0.5);
        assert!(viewport.sync(&bounds(), ZoomLevel::Month, 744.0, 3_624.0));
        assert_eq!(viewport.scroll_left(), 544.0);
    }

    #[test]
    fn sync_never_scrolls_negative() {
        let mut viewport = ViewportController::new(800.0, 0.25, 0.5);
        viewport.sync(&bounds(), ZoomLevel::Month, 100.0, 3_624.0);
        assert_eq!(viewport.scroll_left(), 0.0);
    }

    #[test]
    fn sync_is_sticky_for_same_bounds_and_zoom() {
        let mut viewport = ViewportController::new(800.0, 0.25, 0.5);
        viewport.sync(&bounds(), ZoomLevel::Month, 744.0, 3_624.0);
        viewport.pan(PanDirection::Forward);
        assert_eq!(viewport.scroll_left(), 944.0);

        assert!(!viewport.sync(&bounds(), ZoomLevel::Month, 744.0, 3_624.0));
        assert_eq!(viewport.scroll_left(), 944.0);

        assert!(viewport.sync(&bounds(), ZoomLevel::Week, 1_240.0, 6_040.0));
        assert_eq!(viewport.scroll_left(), 1_040.0);
    }

    #[test]
    fn pan_is_clamped_to_scroll_range() {
        let mut viewport = ViewportController::new(800.0, 0.25, 0.5);
        viewport.sync(&bounds(), ZoomLevel::Month, 0.0, 1_000.0);
        assert_eq!(viewport.pan(PanDirection::Back), 0.0);
        assert_eq!(viewport.pan(PanDirection::Forward), 200.0);
        assert_eq!(viewport.pan(PanDirection::Forward), 200.0);
    }
}
