//! Reportview Session - A live report and its controls
//!
//! This crate ties the stateless reconciliation engine to a connection:
//!
//! - [`ReportSession`]: feeds backend frames (or per-element deltas) through
//!   reconciliation, in arrival order, and keeps the widget store in step
//! - [`RenderPlan`]: the per-element stale/disabled decisions for a render
//!   pass, with the sidebar omitted when empty
//! - [`SessionConfig`]: presentation settings loaded from RON
//!
//! # Example
//!
//! ```
//! use reportview_core::{Element, ElementFrame, ElementKind, ExecutionPhase, RunId};
//! use reportview_session::{InboundFrame, ReportSession, SessionConfig};
//! use reportview_widgets::RecordingSink;
//!
//! let mut session = ReportSession::new(SessionConfig::default(), RecordingSink::new());
//! session
//!     .handle_frame(InboundFrame {
//!         frame: ElementFrame::from_elements(vec![Element::new(ElementKind::Text, "r1")], vec![]),
//!         phase: ExecutionPhase::Complete,
//!         run_id: RunId::new("r1"),
//!     })
//!     .unwrap();
//!
//! let plan = session.render_plan();
//! assert_eq!(plan.main.len(), 2); // text + end marker
//! assert!(plan.sidebar.is_none());
//! ```

mod config;
mod error;
mod session;

pub use config::{SessionConfig, DEFAULT_WIDTH};
pub use error::{Error, Result};
pub use session::{InboundFrame, PlannedElement, RenderPlan, ReportSession};
