use buildline_core::{
    normalize_items, Bounds, Geometry, ItemFilter, LayoutConfig, MilestoneRecord, ProjectSnapshot,
    Shape, TaskRecord, TimelineLayout, EnglishLabels, ZoomLevel,
};
use chrono::NaiveDate;
use uuid::Uuid;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn task(title: &str, start: Option<&str>, due: &str) -> TaskRecord {
    TaskRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        status: Some("In Progress".to_string()),
        start_date: start.map(str::to_string),
        due_date: Some(due.to_string()),
    }
}

fn milestone(name: &str, due: &str) -> MilestoneRecord {
    MilestoneRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        due_date: Some(due.to_string()),
        status: None,
    }
}

fn bar_width(layout: &TimelineLayout<'_>) -> f64 {
    let laid_out = layout.as_ready().expect("layout should not be empty");
    match &laid_out.glyphs[0].shape {
        Shape::Bar { rect, .. } => rect.width,
        other => panic!("expected bar, got {other:?}"),
    }
}

#[test]
fn empty_item_set_uses_default_window() {
    let bounds = Bounds::compute(&[], ymd(2025, 1, 15), &LayoutConfig::default());
    assert_eq!(bounds.start, ymd(2024, 12, 25));
    assert_eq!(bounds.end, ymd(2025, 4, 29));
    assert_eq!(bounds.today, ymd(2025, 1, 15));
}

#[test]
fn window_widens_to_cover_items_then_pads() {
    let snapshot = ProjectSnapshot {
        tasks: vec![task("Early works", Some("2024-10-01"), "2024-10-05")],
        milestones: vec![milestone("Handover", "2025-12-01")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let bounds = Bounds::compute(&items, ymd(2025, 1, 15), &LayoutConfig::default());

    assert_eq!(bounds.start, ymd(2024, 9, 24));
    assert_eq!(bounds.end, ymd(2025, 12, 15));
    for item in &items {
        assert!(bounds.start <= item.earliest_date());
        assert!(bounds.end >= item.date);
    }
    assert!(bounds.start <= bounds.today && bounds.today <= bounds.end);
}

#[test]
fn reversed_task_dates_still_extend_the_window() {
    let snapshot = ProjectSnapshot {
        tasks: vec![task("Reversed", Some("2025-09-01"), "2024-11-01")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let bounds = Bounds::compute(&items, ymd(2025, 1, 15), &LayoutConfig::default());

    assert_eq!(bounds.start, ymd(2024, 10, 25));
    // Only the anchor date pushes the end; the later start date does not.
    assert_eq!(bounds.end, ymd(2025, 4, 29));
}

#[test]
fn bounds_are_deterministic() {
    let snapshot = ProjectSnapshot {
        milestones: vec![milestone("Handover", "2025-06-30")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let config = LayoutConfig::default();
    assert_eq!(
        Bounds::compute(&items, ymd(2025, 1, 15), &config),
        Bounds::compute(&items, ymd(2025, 1, 15), &config)
    );
}

#[test]
fn position_is_zero_at_start_and_monotonic() {
    let bounds = Bounds::compute(&[], ymd(2025, 1, 15), &LayoutConfig::default());
    for zoom in ZoomLevel::ORDERED {
        let geometry = Geometry::new(&bounds, zoom.day_width(), 36.0);
        assert_eq!(geometry.position(bounds.start), 0.0);

        let mut previous = f64::MIN;
        let mut date = bounds.start;
        while date <= bounds.end {
            let x = geometry.position(date);
            assert!(x >= previous);
            previous = x;
            date = date.succ_opt().unwrap();
        }
        assert_eq!(geometry.position(bounds.end), geometry.total_width());
    }
}

#[test]
fn month_zoom_bar_spans_nine_days() {
    let snapshot = ProjectSnapshot {
        tasks: vec![task("Pour foundation", Some("2025-02-01"), "2025-02-10")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let layout = TimelineLayout::compute(
        items,
        ymd(2025, 1, 15),
        ZoomLevel::Month,
        None,
        &LayoutConfig::default(),
        &EnglishLabels,
    );
    assert_eq!(bar_width(&layout), 216.0);
}

#[test]
fn same_day_task_bar_is_clamped_to_minimum() {
    let snapshot = ProjectSnapshot {
        tasks: vec![task("Inspection", Some("2025-02-01"), "2025-02-01")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let layout = TimelineLayout::compute(
        items,
        ymd(2025, 1, 15),
        ZoomLevel::Week,
        None,
        &LayoutConfig::default(),
        &EnglishLabels,
    );
    assert_eq!(bar_width(&layout), 8.0);
}

#[test]
fn reversed_task_bar_is_clamped_not_rejected() {
    let snapshot = ProjectSnapshot {
        tasks: vec![task("Reversed", Some("2025-02-10"), "2025-02-01")],
        ..ProjectSnapshot::default()
    };
    let items = normalize_items(&snapshot.sources(), ItemFilter::All);
    let layout = TimelineLayout::compute(
        items,
        ymd(2025, 1, 15),
        ZoomLevel::Month,
        None,
        &LayoutConfig::default(),
        &EnglishLabels,
    );
    assert_eq!(bar_width(&layout), 8.0);
}
