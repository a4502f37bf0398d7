//! Selection state machine: the auto-clearing month highlight and the
//! sticky day selection.
//!
//! The month highlight is `Idle -> Highlighted(index) -> Idle`, where the
//! transition back is a cancellable deadline two tap-timeouts after the
//! most recent month hit. A new hit restarts the deadline, it never
//! stacks. Dropping the state (widget teardown) drops the deadline with
//! it, so nothing can fire against a disposed widget.

use std::time::{Duration, Instant};

/// Tap-timeout constant; the highlight clears after twice this.
pub const TAP_TIMEOUT: Duration = Duration::from_millis(100);

/// Delay from the most recent month hit to the automatic highlight clear.
pub const AUTO_CLEAR_DELAY: Duration = Duration::from_millis(200);

/// Per-widget selection state. Each widget instance owns exactly one.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    highlighted_month: Option<usize>,
    /// `yyyy-MM-dd`, empty when nothing is stuck.
    selected_day: String,
    clear_deadline: Option<Instant>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted month, if the auto-clear has not fired yet.
    pub fn highlighted_month(&self) -> Option<usize> {
        self.highlighted_month
    }

    /// Currently stuck day as `yyyy-MM-dd`, empty when none.
    pub fn selected_day(&self) -> &str {
        &self.selected_day
    }

    pub fn set_selected_day(&mut self, day: String) {
        self.selected_day = day;
    }

    /// Highlight a month and (re)arm the auto-clear deadline. Re-triggering
    /// restarts the countdown from now.
    pub fn highlight_month(&mut self, index: usize) {
        self.highlighted_month = Some(index);
        self.clear_deadline = Some(Instant::now() + AUTO_CLEAR_DELAY);
    }

    /// Toggle the sticky day selection. Returns `true` when `date` became
    /// the new selection, `false` when it was already stuck and is now
    /// cleared.
    pub fn toggle_day(&mut self, date: String) -> bool {
        if self.selected_day == date {
            self.selected_day.clear();
            false
        } else {
            self.selected_day = date;
            true
        }
    }

    /// Drive the auto-clear: clears an expired highlight and returns the
    /// remaining wait when one is still pending (so the caller can schedule
    /// the next repaint). Calling this after the highlight is gone is a
    /// no-op.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let deadline = self.clear_deadline?;
        if now >= deadline {
            self.highlighted_month = None;
            self.clear_deadline = None;
            None
        } else {
            Some(deadline - now)
        }
    }

    /// Cancel any pending auto-clear without touching the highlight.
    pub fn cancel_pending_clear(&mut self) {
        self.clear_deadline = None;
    }
}
