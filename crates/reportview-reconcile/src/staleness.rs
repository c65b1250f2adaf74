//! Staleness of displayed elements
//!
//! An element is stale when it belongs to a run that is being, or is about to
//! be, replaced. The presentation layer uses this to fade elements out; it has
//! no effect on reconciliation.

use reportview_core::{Element, ExecutionPhase, RunId};

/// Decide whether an element should be shown as stale
///
/// - `RerunRequested`: every element is stale.
/// - `Running`: stale iff the element was produced by a run other than
///   `current_run`.
/// - `Idle` / `Complete`: never stale.
///
/// The end-of-content marker is never stale.
pub fn is_stale(element: &Element, phase: ExecutionPhase, current_run: &RunId) -> bool {
    if element.is_end_marker() {
        return false;
    }
    match phase {
        ExecutionPhase::RerunRequested => true,
        ExecutionPhase::Running => element.origin != *current_run,
        ExecutionPhase::Idle | ExecutionPhase::Complete => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reportview_core::ElementKind;

    #[test]
    fn test_rerun_requested_marks_everything() {
        let run = RunId::new("r2");
        let fresh = Element::new(ElementKind::Text, "r2");
        let old = Element::new(ElementKind::Text, "r1");
        assert!(is_stale(&fresh, ExecutionPhase::RerunRequested, &run));
        assert!(is_stale(&old, ExecutionPhase::RerunRequested, &run));
    }

    #[test]
    fn test_running_compares_origin() {
        let run = RunId::new("r2");
        assert!(!is_stale(&Element::new(ElementKind::Text, "r2"), ExecutionPhase::Running, &run));
        assert!(is_stale(&Element::new(ElementKind::Text, "r1"), ExecutionPhase::Running, &run));
    }

    #[test]
    fn test_idle_and_complete_never_stale() {
        let run = RunId::new("r2");
        let old = Element::new(ElementKind::Chart, "r1");
        assert!(!is_stale(&old, ExecutionPhase::Idle, &run));
        assert!(!is_stale(&old, ExecutionPhase::Complete, &run));
    }

    #[test]
    fn test_end_marker_is_exempt() {
        let run = RunId::new("r2");
        let marker = Element::end_marker("r1");
        assert!(!is_stale(&marker, ExecutionPhase::RerunRequested, &run));
        assert!(!is_stale(&marker, ExecutionPhase::Running, &run));
    }

    proptest! {
        #[test]
        fn prop_staleness_table(origin in "r[0-3]", current in "r[0-3]") {
            let element = Element::new(ElementKind::Text, origin.as_str());
            let run = RunId::new(current.as_str());

            prop_assert!(is_stale(&element, ExecutionPhase::RerunRequested, &run));
            prop_assert_eq!(
                is_stale(&element, ExecutionPhase::Running, &run),
                origin != current
            );
            prop_assert!(!is_stale(&element, ExecutionPhase::Idle, &run));
            prop_assert!(!is_stale(&element, ExecutionPhase::Complete, &run));
        }
    }
}
