//! Reportview Reconcile - What to put on screen while a run is in flight
//!
//! This crate provides the pure, stateless pieces the presentation layer
//! calls on every frame:
//!
//! - **Reconciliation**: merge the newest frame with the one on screen,
//!   keeping prior content visible at positions not yet recomputed
//! - **Staleness**: decide which displayed elements belong to a superseded run
//! - **Dispatch**: resolve the renderer for each element kind
//!
//! # Architecture
//!
//! ```text
//!  previous ──┐
//!             ├──▶ reconcile ──▶ DisplayFrame ──▶ is_stale ──▶ RendererRegistry
//!  incoming ──┘        ▲                              ▲
//!                      └────── phase, current run ────┘
//! ```
//!
//! Nothing here keeps state between calls: the caller supplies the previously
//! displayed frame every time.
//!
//! # Example
//!
//! ```
//! use reportview_core::{Element, ElementFrame, ElementKind, ExecutionPhase, RunId};
//! use reportview_reconcile::reconcile;
//!
//! let prev = ElementFrame::from_elements(
//!     vec![Element::new(ElementKind::Text, "r1"), Element::new(ElementKind::Chart, "r1")],
//!     vec![],
//! );
//! let incoming = ElementFrame::from_elements(
//!     vec![Element::new(ElementKind::Text, "r2"), Element::empty("r2")],
//!     vec![],
//! );
//!
//! let run = RunId::new("r2");
//! let shown = reconcile(&prev, &incoming, ExecutionPhase::Running, &run).unwrap();
//! assert_eq!(shown.frame().primary[1], prev.primary[1]);
//! ```

mod dispatch;
mod reconciliation;
mod staleness;

pub use dispatch::{Renderer, RendererRegistry};
pub use reconciliation::{reconcile, DisplayFrame};
pub use staleness::is_stale;
