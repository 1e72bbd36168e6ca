//! Pure date-to-pixel and row mapping.

use crate::timeline::bounds::Bounds;
use crate::timeline::calendar::days_between;
use chrono::NaiveDate;

/// Screen mapping for one `(bounds, zoom)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    origin: NaiveDate,
    end: NaiveDate,
    day_width: f64,
    row_height: f64,
}

impl Geometry {
    pub fn new(bounds: &Bounds, day_width: f64, row_height: f64) -> Self {
        Self {
            origin: bounds.start,
            end: bounds.end,
            day_width,
            row_height,
        }
    }

    pub fn day_width(&self) -> f64 {
        self.day_width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Horizontal offset of `date` from the window start. Zero at the start.
    pub fn position(&self, date: NaiveDate) -> f64 {
        days_between(self.origin, date) as f64 * self.day_width
    }

    /// Number of days covered by the window.
    pub fn total_days(&self) -> i64 {
        days_between(self.origin, self.end)
    }

    pub fn total_width(&self) -> f64 {
        self.total_days() as f64 * self.day_width
    }

    /// Vertical center of row `index`.
    pub fn row_y(&self, index: usize) -> f64 {
        index as f64 * self.row_height + self.row_height / 2.0
    }

    /// Top edge of row `index`.
    pub fn row_top(&self, index: usize) -> f64 {
        index as f64 * self.row_height
    }

    /// Height of a stack of `rows` rows.
    pub fn stack_height(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height
    }

    /// Bar width from `start` to `end`, floored at `min_width`.
    ///
    /// Zero and negative spans (end before start) collapse to `min_width`.
    pub fn bar_width(&self, start: NaiveDate, end: NaiveDate, min_width: f64) -> f64 {
        (self.position(end) - self.position(start)).max(min_width)
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;
    use crate::timeline::bounds::Bounds;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn geometry(day_width: f64) -> Geometry {
        let bounds = Bounds {
            start: ymd(2025, 1, 1),
            end: ymd(2025, 3, 1),
            today: ymd(2025, 1, 15),
        };
        Geometry::new(&bounds, day_width, 36.0)
    }

    #[test]
    fn position_is_zero_at_start_and_scales_with_day_width() {
        let geometry = geometry(24.0);
        assert_eq!(geometry.position(ymd(2025, 1, 1)), 0.0);
        assert_eq!(geometry.position(ymd(2025, 1, 11)), 240.0);
        assert_eq!(geometry.position(ymd(2024, 12, 31)), -24.0);
    }

    #[test]
    fn total_width_spans_window() {
        let geometry = geometry(4.0);
        assert_eq!(geometry.total_days(), 59);
        assert_eq!(geometry.total_width(), 236.0);
    }

    #[test]
    fn rows_are_centered_and_zoom_independent() {
        assert_eq!(geometry(40.0).row_y(0), 18.0);
        assert_eq!(geometry(4.0).row_y(2), 90.0);
        assert_eq!(geometry(4.0).row_top(2), 72.0);
    }

    #[test]
    fn bar_width_clamps_reversed_spans() {
        let geometry = geometry(24.0);
        assert_eq!(
            geometry.bar_width(ymd(2025, 2, 10), ymd(2025, 2, 1), 8.0),
            8.0
        );
        assert_eq!(
            geometry.bar_width(ymd(2025, 2, 1), ymd(2025, 2, 10), 8.0),
            216.0
        );
    }
}
