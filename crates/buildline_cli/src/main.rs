//! CLI probe for the timeline engine.
//!
//! # Responsibility
//! - Lay out a project snapshot file and print a deterministic summary.
//! - Print the core version when run without arguments.

use buildline_core::{
    core_version, default_log_level, init_logging, parse_calendar_date, today_utc, EnglishLabels,
    ItemFilter, LayoutConfig, ProjectSnapshot, Shape, TimelineLayout, TimelineService, ViewAction,
    ZoomLevel,
};
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

/// Snapshot file: records plus an optional `config` override.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(flatten)]
    snapshot: ProjectSnapshot,
    #[serde(default)]
    config: Option<LayoutConfig>,
}

#[derive(Parser, Debug)]
#[command(name = "buildline_cli", version, about = "Lay out a project snapshot as a timeline")]
struct Cli {
    /// Snapshot JSON file. Without it the core version is printed.
    #[arg(value_name = "SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Anchor date (YYYY-MM-DD); defaults to the current UTC day.
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Zoom level: week, month, quarter or halfYear.
    #[arg(long, value_parser = ZoomLevel::from_str)]
    zoom: Option<ZoomLevel>,

    /// Collection filter: all, tasks, milestones, rfis or submittals.
    #[arg(long, value_parser = ItemFilter::from_str)]
    filter: Option<ItemFilter>,

    /// Viewport width in pixels.
    #[arg(
        long = "viewport",
        value_name = "PX",
        default_value_t = 1200.0,
        value_parser = parse_viewport
    )]
    viewport_width: f64,

    /// Directory for rolling log files. Logging stays off when omitted.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let Some(snapshot_path) = cli.snapshot.as_deref() else {
        println!("buildline_core version={}", core_version());
        return ExitCode::SUCCESS;
    };

    match run(&cli, snapshot_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).ok_or_else(|| format!("invalid date `{raw}`"))
}

fn parse_viewport(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|width| *width > 0.0 && width.is_finite())
        .ok_or_else(|| format!("invalid viewport width `{raw}`"))
}

fn run(cli: &Cli, snapshot_path: &Path) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir.to_string_lossy();
        init_logging(default_log_level(), &log_dir).map_err(|err| err.to_string())?;
    }

    let raw = std::fs::read_to_string(snapshot_path)
        .map_err(|err| format!("failed to read `{}`: {err}", snapshot_path.display()))?;
    let file: SnapshotFile = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid snapshot `{}`: {err}", snapshot_path.display()))?;
    let config = file.config.unwrap_or_default();
    let today = cli.today.unwrap_or_else(today_utc);

    let sources = file.snapshot.sources();
    let mut service = TimelineService::new(sources, today, config, cli.viewport_width)
        .map_err(|err| format!("invalid layout config: {err}"))?;
    if let Some(zoom) = cli.zoom {
        service.dispatch(ViewAction::SetZoom(zoom));
    }
    if let Some(filter) = cli.filter {
        service.dispatch(ViewAction::SetFilter(filter));
    }

    let layout = service.refresh();
    info!(
        "event=cli_layout module=cli status=ok empty={} zoom={}",
        layout.is_empty(),
        layout.zoom()
    );
    print_layout(&layout, service.viewport().scroll_left());
    Ok(())
}

fn print_layout(layout: &TimelineLayout<'_>, scroll_left: f64) {
    let bounds = layout.bounds();
    println!(
        "bounds start={} end={} today={} zoom={}",
        bounds.start,
        bounds.end,
        bounds.today,
        layout.zoom()
    );

    let Some(laid_out) = layout.as_ready() else {
        println!("no dated items to display");
        return;
    };

    println!(
        "canvas width={} height={} months={} days={}",
        laid_out.total_width(),
        laid_out.total_height(),
        laid_out.header.months.len(),
        laid_out.header.days.len()
    );
    for (item, glyph) in laid_out.items.iter().zip(&laid_out.glyphs) {
        let geometry = match &glyph.shape {
            Shape::Bar { rect, .. } => format!("bar x={} w={}", rect.x, rect.width),
            Shape::Diamond { vertices } => format!("diamond x={}", vertices[0].x),
            Shape::GuideLine { x, .. } => format!("guide x={x}"),
            Shape::Marker(circle) => format!("marker x={}", circle.center.x),
        };
        let summary = laid_out.summary(&item.id, &EnglishLabels);
        println!(
            "row={} kind={} color={} {} date={} name={}",
            glyph.row,
            item.kind.as_str(),
            glyph.color.hex(),
            geometry,
            summary.map(|s| s.date_text).unwrap_or_default(),
            item.name
        );
    }
    println!("scroll_left={scroll_left}");
}
