use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_light_at_top() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.scroll_y, 0.0);
    assert!(!state.header_compact());
    assert!(!state.show_scroll_top());
}

#[test]
fn header_compacts_strictly_past_threshold() {
    let at = UiState { scroll_y: 50.0, ..UiState::default() };
    let past = UiState { scroll_y: 50.5, ..UiState::default() };
    assert!(!at.header_compact());
    assert!(past.header_compact());
}

#[test]
fn scroll_top_button_appears_past_300() {
    let at = UiState { scroll_y: 300.0, ..UiState::default() };
    let past = UiState { scroll_y: 301.0, ..UiState::default() };
    assert!(!at.show_scroll_top());
    assert!(past.show_scroll_top());
    assert!(past.header_compact());
}

// =============================================================
// Loading screen
// =============================================================

#[test]
fn loading_progress_steps_by_five_and_caps() {
    assert_eq!(next_loading_progress(0), 5);
    assert_eq!(next_loading_progress(95), 100);
    assert_eq!(next_loading_progress(100), 100);
    assert_eq!(next_loading_progress(98), 100);
    assert_eq!(next_loading_progress(u8::MAX), 100);
}

#[test]
fn loading_reaches_full_within_duration() {
    let ticks = LOADING_DURATION_MS / LOADING_TICK_MS;
    let mut progress = 0;
    for _ in 0..ticks {
        progress = next_loading_progress(progress);
    }
    assert_eq!(progress, 100);
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_triggers_once_at_threshold() {
    assert!(!should_reveal(false, 0.1));
    assert!(should_reveal(false, 0.2));
    assert!(should_reveal(false, 1.0));
    assert!(!should_reveal(true, 1.0));
}

// =============================================================
// Skills + timeline
// =============================================================

#[test]
fn years_label_singular_and_plural() {
    assert_eq!(years_label(1), "1 year");
    assert_eq!(years_label(2), "2 years");
    assert_eq!(years_label(0), "0 years");
}

#[test]
fn timeline_alternates_starting_left() {
    let sides: Vec<_> = (0..4).map(TimelineSide::for_index).collect();
    assert_eq!(sides, [TimelineSide::Left, TimelineSide::Right, TimelineSide::Left, TimelineSide::Right]);
}

#[test]
fn timeline_progress_spans_entry_to_exit() {
    // Viewport 800: starts at top = 600, full when bottom = 200.
    assert_eq!(timeline_progress(700.0, 1000.0, 800.0), 0.0);
    assert_eq!(timeline_progress(600.0, 1000.0, 800.0), 0.0);
    assert!((timeline_progress(-100.0, 1000.0, 800.0) - 0.5).abs() < 1e-9);
    assert_eq!(timeline_progress(-800.0, 1000.0, 800.0), 1.0);
    assert_eq!(timeline_progress(-5000.0, 1000.0, 800.0), 1.0);
}

#[test]
fn timeline_progress_handles_degenerate_sizes() {
    assert_eq!(timeline_progress(0.0, 0.0, 0.0), 0.0);
}
