//! Frame reconciliation during an in-flight run
//!
//! While a run is executing, the backend streams a frame in which positions
//! that have not been recomputed yet are `empty`. Showing that frame as-is
//! would blank out most of the report on every rerun, so while running each
//! `empty` position falls back to whatever was displayed there before.

use reportview_core::{
    Container, Element, ElementFrame, Error, ExecutionPhase, Region, Result, RunId,
};
use tracing::{error, trace};

/// The frame to put on screen, plus the trailing end-of-content anchor
///
/// Every position of `frame` holds an element. The end marker is not part of
/// the frame: pass [`DisplayFrame::frame`] back as `previous` on the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    frame: ElementFrame,
    end_marker: Element,
}

impl DisplayFrame {
    /// The reconciled frame, without the end marker
    pub fn frame(&self) -> &ElementFrame {
        &self.frame
    }

    /// Consume into the reconciled frame
    pub fn into_frame(self) -> ElementFrame {
        self.frame
    }

    /// The synthetic anchor appended after the content
    pub fn end_marker(&self) -> &Element {
        &self.end_marker
    }

    /// Elements of a region in display order
    ///
    /// The main region ends with the end marker; it appears exactly once
    /// across the whole display.
    pub fn display_list(&self, container: Container) -> Vec<&Element> {
        let mut list: Vec<&Element> = self.frame.elements(container).collect();
        if container == Container::Main {
            list.push(&self.end_marker);
        }
        list
    }
}

/// Compute the frame to display
///
/// With `phase == Running`, every `empty` position in `incoming` is replaced
/// by the element displayed at the same index in `previous`, when there is a
/// non-empty one. In every other phase `incoming` is used verbatim.
///
/// Alignment is purely positional. If the element count shrinks or elements
/// are reordered between runs, substitution still pairs index `i` with index
/// `i`.
///
/// Returns [`Error::MalformedFrame`] if `incoming` has a missing entry at any
/// position, and [`Error::StrayEndMarker`] if it carries an end marker. A
/// missing entry in `previous` just means "no substitute".
pub fn reconcile(
    previous: &ElementFrame,
    incoming: &ElementFrame,
    phase: ExecutionPhase,
    current_run: &RunId,
) -> Result<DisplayFrame> {
    let mut substituted = 0;
    let primary = reconcile_region(
        Container::Main,
        &previous.primary,
        &incoming.primary,
        phase,
        &mut substituted,
    )?;
    let auxiliary = reconcile_region(
        Container::Sidebar,
        &previous.auxiliary,
        &incoming.auxiliary,
        phase,
        &mut substituted,
    )?;

    trace!(
        %phase,
        run = %current_run,
        primary = primary.len(),
        auxiliary = auxiliary.len(),
        substituted,
        "reconciled frame"
    );

    Ok(DisplayFrame {
        frame: ElementFrame { primary, auxiliary },
        end_marker: Element::end_marker(current_run.clone()),
    })
}

fn reconcile_region(
    container: Container,
    previous: &Region,
    incoming: &Region,
    phase: ExecutionPhase,
    substituted: &mut usize,
) -> Result<Region> {
    let mut out = Region::with_capacity(incoming.len());

    for (index, slot) in incoming.iter().enumerate() {
        let Some(element) = slot else {
            error!(%container, index, "incoming frame has a missing element");
            return Err(Error::MalformedFrame { container, index });
        };
        if element.is_end_marker() {
            error!(%container, index, "incoming frame carries an end marker");
            return Err(Error::StrayEndMarker { container, index });
        }

        let fallback = if phase.is_running() && element.is_empty() {
            previous
                .get(index)
                .and_then(Option::as_ref)
                .filter(|prev| !prev.is_empty() && !prev.is_end_marker())
        } else {
            None
        };

        match fallback {
            Some(prev) => {
                *substituted += 1;
                out.push(Some(prev.clone()));
            }
            None => out.push(Some(element.clone())),
        }
    }

    Ok(out)
}
