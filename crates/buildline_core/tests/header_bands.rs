use buildline_core::{
    build_header, Bounds, DateLabels, EnglishLabels, Geometry, HeaderBands, LayoutConfig,
    ZoomLevel,
};
use chrono::{Datelike, NaiveDate, Weekday};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn header_for(zoom: ZoomLevel) -> (HeaderBands, Geometry) {
    // 2024-12-25 ..= 2025-04-29, 125 days.
    let bounds = Bounds::compute(&[], ymd(2025, 1, 15), &LayoutConfig::default());
    let geometry = Geometry::new(&bounds, zoom.day_width(), 36.0);
    (
        build_header(&bounds, zoom, &geometry, &EnglishLabels),
        geometry,
    )
}

#[test]
fn month_bands_group_contiguous_days() {
    let (header, _) = header_for(ZoomLevel::Month);

    let labels: Vec<&str> = header.months.iter().map(|band| band.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Dec 2024", "Jan 2025", "Feb 2025", "Mar 2025", "Apr 2025"]
    );

    let spans: Vec<(f64, f64)> = header.months.iter().map(|band| (band.x, band.width)).collect();
    assert_eq!(
        spans,
        vec![
            (0.0, 168.0),
            (168.0, 744.0),
            (912.0, 672.0),
            (1_584.0, 744.0),
            (2_328.0, 672.0),
        ]
    );
    assert_eq!(header.months[0].first_day, ymd(2024, 12, 25));
    assert_eq!(header.months[1].first_day, ymd(2025, 1, 1));
}

#[test]
fn month_bands_tile_total_width() {
    for zoom in ZoomLevel::ORDERED {
        let (header, geometry) = header_for(zoom);
        let covered: f64 = header.months.iter().map(|band| band.width).sum();
        assert_eq!(covered, geometry.total_width(), "zoom {zoom}");

        for pair in header.months.windows(2) {
            assert_eq!(pair[0].x + pair[0].width, pair[1].x);
        }
    }
}

#[test]
fn day_cells_cover_every_offset_inclusive() {
    let (header, geometry) = header_for(ZoomLevel::Week);

    assert_eq!(header.days.len(), 126);
    assert_eq!(header.days[0].x, 0.0);
    assert_eq!(header.days[125].x, geometry.total_width());
    assert_eq!(header.days[1].x, 40.0);
}

#[test]
fn day_cells_flag_weekends_and_today() {
    let (header, _) = header_for(ZoomLevel::Month);

    let today: Vec<NaiveDate> = header
        .days
        .iter()
        .filter(|cell| cell.is_today)
        .map(|cell| cell.date)
        .collect();
    assert_eq!(today, vec![ymd(2025, 1, 15)]);

    for cell in &header.days {
        let weekend = matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(cell.is_weekend, weekend, "{}", cell.date);
    }

    let christmas = &header.days[0];
    assert_eq!(christmas.label, "25");
    assert_eq!(christmas.day_name, "Wed");
    assert!(!christmas.is_weekend);
}

#[test]
fn coarse_zoom_levels_emit_no_day_cells() {
    for zoom in [ZoomLevel::Quarter, ZoomLevel::HalfYear] {
        let (header, _) = header_for(zoom);
        assert!(header.days.is_empty(), "zoom {zoom}");
        assert_eq!(header.months.len(), 5);
    }
}

struct NumericLabels;

impl DateLabels for NumericLabels {
    fn month_label(&self, first_day: NaiveDate) -> String {
        format!("{:02}/{}", first_day.month(), first_day.year())
    }

    fn day_label(&self, date: NaiveDate) -> String {
        format!("{:02}", date.day())
    }

    fn day_name(&self, date: NaiveDate) -> String {
        date.weekday().number_from_monday().to_string()
    }

    fn long_date(&self, date: NaiveDate) -> String {
        date.to_string()
    }
}

#[test]
fn labels_come_from_the_locale_seam() {
    let bounds = Bounds::compute(&[], ymd(2025, 1, 15), &LayoutConfig::default());
    let geometry = Geometry::new(&bounds, 24.0, 36.0);
    let header = build_header(&bounds, ZoomLevel::Month, &geometry, &NumericLabels);

    assert_eq!(header.months[1].label, "01/2025");
    assert_eq!(header.days[0].label, "25");
    assert_eq!(header.days[0].day_name, "3");
}
