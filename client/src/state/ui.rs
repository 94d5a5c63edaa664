//! Local UI chrome state (theme, scroll position) and the pure rules the
//! page components render from.
//!
//! DESIGN
//! ======
//! Components read browser facts (scroll offset, element rects, observer
//! ratios) and hand them to these helpers, so thresholds and timings are
//! testable without a DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::theme::Theme;

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_COMPACT_SCROLL_Y: f64 = 50.0;
/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_VISIBLE_Y: f64 = 300.0;

pub const LOADING_DURATION_MS: u32 = 2000;
pub const LOADING_TICK_MS: u32 = 100;
pub const LOADING_STEP: u8 = 5;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// UI state shared by the header, scroll-to-top button and page sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub scroll_y: f64,
}

impl UiState {
    #[must_use]
    pub fn header_compact(&self) -> bool {
        self.scroll_y > HEADER_COMPACT_SCROLL_Y
    }

    #[must_use]
    pub fn show_scroll_top(&self) -> bool {
        self.scroll_y > SCROLL_TOP_VISIBLE_Y
    }
}

/// Next loading-bar value: advances by [`LOADING_STEP`] and holds at 100.
#[must_use]
pub fn next_loading_progress(current: u8) -> u8 {
    current.saturating_add(LOADING_STEP).min(100)
}

/// Reveal fires once: only an unrevealed section crossing the threshold flips.
#[must_use]
pub fn should_reveal(already_revealed: bool, intersection_ratio: f64) -> bool {
    !already_revealed && intersection_ratio >= REVEAL_THRESHOLD
}

/// `"1 year"` / `"N years"`.
#[must_use]
pub fn years_label(years: u8) -> String {
    if years == 1 { "1 year".to_owned() } else { format!("{years} years") }
}

// =============================================================================
// EXPERIENCE TIMELINE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Entries alternate starting on the left.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-item timeline-item--left",
            Self::Right => "timeline-item timeline-item--right",
        }
    }
}

/// Fill fraction of the timeline progress line.
///
/// Starts when the timeline top reaches 75% of the viewport height and is
/// full when its bottom reaches 25%. Result is clamped to `0.0..=1.0`.
#[must_use]
pub fn timeline_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = height + viewport_height * 0.5;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height * 0.75 - top) / span).clamp(0.0, 1.0)
}
