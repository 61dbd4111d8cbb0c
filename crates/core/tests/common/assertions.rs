//! Custom assertion helpers for integration tests.

use sk_core::display::SurfaceState;
use sk_protocol::ipc::Signal;

/// Number of `Hidden` signals in a sequence.
#[allow(dead_code)]
pub fn count_hidden(signals: &[Signal]) -> usize {
    signals.iter().filter(|s| matches!(s, Signal::Hidden)).count()
}

/// Whether a sequence contains any `Selected` signal.
#[allow(dead_code)]
pub fn has_selected(signals: &[Signal]) -> bool {
    signals.iter().any(|s| matches!(s, Signal::Selected { .. }))
}

/// The `count` of the last `ResultsReady` signal, if any.
#[allow(dead_code)]
pub fn last_results_count(signals: &[Signal]) -> Option<usize> {
    signals.iter().rev().find_map(|s| match s {
        Signal::ResultsReady { count, .. } => Some(*count),
        _ => None,
    })
}

/// Display texts currently rendered.
#[allow(dead_code)]
pub fn rendered_texts(state: &SurfaceState) -> Vec<String> {
    state.entries.iter().map(|e| e.text.clone()).collect()
}

/// Assert that exactly one non-selectable placeholder is displayed.
#[allow(dead_code)]
pub fn assert_single_placeholder(state: &SurfaceState, text: &str) {
    assert_eq!(
        state.entries.len(),
        1,
        "Expected a single placeholder, got: {:?}",
        rendered_texts(state)
    );
    assert!(!state.entries[0].selectable, "Placeholder must not be selectable");
    assert_eq!(state.entries[0].text, text);
    assert!(state.visible, "Placeholder should be shown");
    assert_eq!(state.highlighted, None);
}
