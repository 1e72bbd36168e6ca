//! Timeline view controller.
//!
//! # Responsibility
//! - Own the interactive view state (hover, filter, zoom) for one view.
//! - Apply user actions as explicit state transitions.
//! - Recompute layouts and keep the viewport centered on today.
//! - Route clicks back to the host with the original record.
//!
//! # Invariants
//! - `ViewState` is mutated only through `dispatch`.
//! - At most one item is hovered at a time.
//! - A filter change clears the hover, since the hovered item may be gone.
//! - The layout config has passed `LayoutConfig::validate` before use.
//! - Source records are borrowed for the service lifetime and never mutated.

use crate::config::{ConfigError, LayoutConfig};
use crate::model::item::{ItemFilter, ItemKind, SourceRef, TimelineItem};
use crate::model::record::TimelineSources;
use crate::timeline::bounds::Bounds;
use crate::timeline::calendar::{DateLabels, EnglishLabels};
use crate::timeline::layout::{ItemSummary, TimelineLayout};
use crate::timeline::normalize::normalize_items;
use crate::timeline::viewport::{PanDirection, ViewportController};
use crate::timeline::zoom::ZoomLevel;
use chrono::NaiveDate;
use log::debug;

/// Interactive state owned by one hosting view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: ItemFilter,
    pub zoom: ZoomLevel,
    pub hovered: Option<String>,
}

impl ViewState {
    pub fn new(filter: ItemFilter, zoom: ZoomLevel) -> Self {
        Self {
            filter,
            zoom,
            hovered: None,
        }
    }

    /// Applies one action and reports what has to be recomputed.
    pub fn apply(&mut self, action: ViewAction) -> ViewChange {
        match action {
            ViewAction::PointerEnter(item_id) => {
                if self.hovered.as_deref() == Some(item_id.as_str()) {
                    return ViewChange::None;
                }
                self.hovered = Some(item_id);
                ViewChange::Hover
            }
            ViewAction::PointerLeave => match self.hovered.take() {
                Some(_) => ViewChange::Hover,
                None => ViewChange::None,
            },
            ViewAction::SetFilter(filter) => {
                if self.filter == filter {
                    return ViewChange::None;
                }
                self.filter = filter;
                self.hovered = None;
                ViewChange::Items
            }
            ViewAction::SetZoom(zoom) => self.set_zoom(zoom),
            ViewAction::ZoomIn => self.set_zoom(self.zoom.zoom_in()),
            ViewAction::ZoomOut => self.set_zoom(self.zoom.zoom_out()),
        }
    }

    fn set_zoom(&mut self, zoom: ZoomLevel) -> ViewChange {
        if self.zoom == zoom {
            return ViewChange::None;
        }
        self.zoom = zoom;
        ViewChange::Scale
    }
}

/// Discrete user actions accepted by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    PointerEnter(String),
    PointerLeave,
    SetFilter(ItemFilter),
    SetZoom(ZoomLevel),
    ZoomIn,
    ZoomOut,
}

impl ViewAction {
    fn name(&self) -> &'static str {
        match self {
            Self::PointerEnter(_) => "pointer_enter",
            Self::PointerLeave => "pointer_leave",
            Self::SetFilter(_) => "set_filter",
            Self::SetZoom(_) => "set_zoom",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
        }
    }
}

/// What a state transition invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    /// No-op, including boundary zoom steps.
    None,
    /// Only glyph hover sizing changed.
    Hover,
    /// Item set changed; bounds and geometry follow.
    Items,
    /// Pixel scale changed; geometry and viewport follow.
    Scale,
}

/// Host callback for item clicks.
pub trait ItemClickHandler<'a> {
    /// Receives the item's kind and the original record it came from.
    fn on_item_click(&mut self, kind: ItemKind, source: SourceRef<'a>);
}

impl<'a, F> ItemClickHandler<'a> for F
where
    F: FnMut(ItemKind, SourceRef<'a>),
{
    fn on_item_click(&mut self, kind: ItemKind, source: SourceRef<'a>) {
        self(kind, source)
    }
}

/// Controller for one timeline view instance.
pub struct TimelineService<'a, L: DateLabels = EnglishLabels> {
    sources: TimelineSources<'a>,
    today: NaiveDate,
    config: LayoutConfig,
    labels: L,
    state: ViewState,
    viewport: ViewportController,
}

impl<'a> TimelineService<'a, EnglishLabels> {
    /// Creates a controller with English labels.
    ///
    /// # Errors
    /// - Returns the `ConfigError` reported by `LayoutConfig::validate`.
    pub fn new(
        sources: TimelineSources<'a>,
        today: NaiveDate,
        config: LayoutConfig,
        viewport_width: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_labels(sources, today, config, viewport_width, EnglishLabels)
    }
}

impl<'a, L: DateLabels> TimelineService<'a, L> {
    pub fn with_labels(
        sources: TimelineSources<'a>,
        today: NaiveDate,
        config: LayoutConfig,
        viewport_width: f64,
        labels: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = ViewState::new(config.default_filter, config.default_zoom);
        let viewport = ViewportController::new(
            viewport_width,
            config.today_anchor_fraction,
            config.pan_fraction,
        );
        Ok(Self {
            sources,
            today,
            config,
            labels,
            state,
            viewport,
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Applies a user action to the view state.
    pub fn dispatch(&mut self, action: ViewAction) -> ViewChange {
        let name = action.name();
        let change = self.state.apply(action);
        debug!(
            "event=view_action module=service status=ok action={} change={:?} filter={} zoom={}",
            name, change, self.state.filter, self.state.zoom
        );
        change
    }

    /// Normalized items for the active filter.
    pub fn items(&self) -> Vec<TimelineItem<'a>> {
        normalize_items(&self.sources, self.state.filter)
    }

    /// Bounds for the active filter's item set.
    pub fn bounds(&self) -> Bounds {
        Bounds::compute(&self.items(), self.today, &self.config)
    }

    /// Pure layout for the current state. Does not touch the viewport.
    pub fn layout(&self) -> TimelineLayout<'a> {
        TimelineLayout::compute(
            self.items(),
            self.today,
            self.state.zoom,
            self.state.hovered.as_deref(),
            &self.config,
            &self.labels,
        )
    }

    /// Recomputes the layout and re-centers the viewport on today when the
    /// bounds or zoom changed since the last centering.
    pub fn refresh(&mut self) -> TimelineLayout<'a> {
        let layout = self.layout();
        if let Some(laid_out) = layout.as_ready() {
            self.viewport.sync(
                &laid_out.bounds,
                laid_out.zoom,
                laid_out.today_x(),
                laid_out.total_width(),
            );
        }
        layout
    }

    /// Pages the viewport back or forward.
    pub fn pan(&mut self, direction: PanDirection) -> f64 {
        self.viewport.pan(direction)
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport.set_viewport_width(width);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.viewport.scroll_to(offset);
    }

    /// Translates a pointer position into hover enter/leave actions.
    pub fn pointer_move(&mut self, layout: &TimelineLayout<'_>, x: f64, y: f64) -> ViewChange {
        let hit = layout
            .as_ready()
            .and_then(|laid_out| laid_out.hit_test(x, y))
            .map(|glyph| glyph.item_id.clone());
        match hit {
            Some(item_id) => self.dispatch(ViewAction::PointerEnter(item_id)),
            None => self.dispatch(ViewAction::PointerLeave),
        }
    }

    /// Hover tooltip for the currently hovered item.
    pub fn hovered_summary(&self, layout: &TimelineLayout<'_>) -> Option<ItemSummary> {
        let item_id = self.state.hovered.as_deref()?;
        layout.as_ready()?.summary(item_id, &self.labels)
    }

    /// Invokes `handler` for the topmost item under `(x, y)`.
    ///
    /// Returns the clicked item id, or `None` when nothing was hit.
    pub fn click_at(
        &self,
        layout: &TimelineLayout<'a>,
        x: f64,
        y: f64,
        handler: &mut impl ItemClickHandler<'a>,
    ) -> Option<String> {
        let laid_out = layout.as_ready()?;
        let glyph = laid_out.hit_test(x, y)?;
        let item = laid_out.items.get(glyph.row)?;
        debug!(
            "event=item_click module=service status=ok kind={}",
            item.kind.as_str()
        );
        handler.on_item_click(item.kind, item.source);
        Some(item.id.clone())
    }
}
