//! The year grid widget: composes layout, rendering, hit-testing and the
//! selection state machine behind one egui `show` call.
//!
//! Input mapping: a primary click is a tap; a touch long-press or a
//! secondary click is a long-press. Gesture results come back in the
//! [`YearViewResult`] so hosts can match the event exhaustively; ignoring
//! the result is the "no listener" case, highlight state still updates.

use chrono::{Local, NaiveDate, TimeZone};
use std::time::Instant;

use crate::models::config::{TitleGravity, YearConfig};
use crate::ui_egui::hit_test::{dispatch, GestureEvent, GestureKind};
use crate::ui_egui::render::{render_year, RenderOutput, DAY_PATTERN};
use crate::ui_egui::selection::SelectionState;
use crate::ui_egui::styles::ResolvedStyles;
use crate::utils::date::{Clock, EnglishNames, NameProvider, SystemClock};

/// Result of one `show` pass.
pub struct YearViewResult {
    /// Semantic gesture event for this frame, if any.
    pub event: Option<GestureEvent>,
    /// Raw egui response over the whole widget area.
    pub response: egui::Response,
}

/// A full-year calendar grid widget. One instance renders exactly one
/// year; hosts paging through years keep one instance per page.
pub struct YearView {
    config: YearConfig,
    styles: ResolvedStyles,
    state: SelectionState,
    clock: Box<dyn Clock>,
    names: Box<dyn NameProvider>,
}

impl YearView {
    pub fn new(config: YearConfig) -> Self {
        config.validate();
        let styles = ResolvedStyles::resolve(&config);
        let mut state = SelectionState::new();
        if config.sticky_day_selection && !config.initial_selected_day.is_empty() {
            state.set_selected_day(config.initial_selected_day.clone());
        }
        Self {
            config,
            styles,
            state,
            clock: Box::new(SystemClock),
            names: Box::new(EnglishNames),
        }
    }

    /// Replace the clock capability (tests, screenshots).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the locale name provider.
    pub fn with_names(mut self, names: impl NameProvider + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn config(&self) -> &YearConfig {
        &self.config
    }

    /// Replace the whole configuration and re-resolve styles. The previous
    /// resolved styles are discarded wholesale; nothing is patched in
    /// place.
    pub fn set_config(&mut self, config: YearConfig) {
        config.validate();
        self.styles = ResolvedStyles::resolve(&config);
        self.config = config;
    }

    pub fn year(&self) -> i32 {
        self.config.year
    }

    pub fn set_year(&mut self, year: i32) {
        let mut config = self.config.clone();
        config.year = year;
        self.set_config(config);
    }

    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    pub fn columns(&self) -> u32 {
        self.config.columns
    }

    pub fn set_weekend_days(&mut self, weekend_days: Vec<u32>) {
        let mut config = self.config.clone();
        config.weekend_days = weekend_days;
        self.set_config(config);
    }

    pub fn set_title_gravity(&mut self, gravity: TitleGravity) {
        let mut config = self.config.clone();
        config.title_gravity = gravity;
        self.set_config(config);
    }

    /// Toggle sticky day selection. Turning it off clears any stuck day.
    pub fn set_day_selection_sticky(&mut self, sticky: bool) {
        let mut config = self.config.clone();
        config.sticky_day_selection = sticky;
        self.set_config(config);
        if !sticky {
            self.state.set_selected_day(String::new());
        }
    }

    /// Currently stuck day as `yyyy-MM-dd`, empty when none.
    pub fn selected_day(&self) -> &str {
        self.state.selected_day()
    }

    pub fn set_selected_day(&mut self, day: String) {
        self.state.set_selected_day(day);
    }

    /// Epoch milliseconds of the stuck day at local midnight; 0 when no
    /// day is stuck or the stored string does not parse.
    pub fn selected_day_timestamp(&self) -> i64 {
        let text = self.state.selected_day();
        if text.is_empty() {
            return 0;
        }
        let Ok(date) = NaiveDate::parse_from_str(text, DAY_PATTERN) else {
            log::warn!("stored selected day {text:?} does not parse");
            return 0;
        };
        date.and_hms_opt(0, 0, 0)
            .and_then(|dt| Local.from_local_datetime(&dt).single())
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }

    /// Render the year into all available space and handle this frame's
    /// input. Layout, hit records and highlight state are rebuilt from
    /// scratch; nothing survives from the previous frame's geometry.
    pub fn show(&mut self, ui: &mut egui::Ui) -> YearViewResult {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        // Drive the auto-clear deadline; keep repainting while one is
        // pending so the clear becomes visible without further input.
        if let Some(remaining) = self.state.tick(Instant::now()) {
            ui.ctx().request_repaint_after(remaining);
        }

        let today = self.clock.today();
        let output = match render_year(
            ui.painter(),
            rect,
            &self.config,
            &self.styles,
            self.names.as_ref(),
            today,
            self.state.selected_day(),
            self.state.highlighted_month(),
        ) {
            Ok(output) => output,
            Err(err) => {
                // Unreachable with a sane configuration; never take down
                // the host frame over it.
                log::error!("year grid render failed: {err}");
                RenderOutput::default()
            }
        };

        let gesture = if response.clicked() {
            Some(GestureKind::Tap)
        } else if response.long_touched() || response.secondary_clicked() {
            Some(GestureKind::LongPress)
        } else {
            None
        };

        let mut event = None;
        if let (Some(kind), Some(pos)) = (gesture, response.interact_pointer_pos()) {
            event = dispatch(
                pos,
                kind,
                &output.cells,
                &output.records,
                &self.config,
                &mut self.state,
            );
            // Selection visuals may have changed even without an event
            // (sticky deselect, highlight re-trigger).
            ui.ctx().request_repaint();
        }

        YearViewResult { event, response }
    }
}
