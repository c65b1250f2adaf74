//! Reportview Core - Data model for live, incrementally updated reports
//!
//! This crate provides the types shared by the reconciliation engine and the
//! widget state store:
//! - Run and control identifiers (`RunId`, `ControlId`)
//! - Typed elements and their two-region frames (`Element`, `ElementFrame`)
//! - Backend deltas addressed by container and index (`Delta`)
//! - The execution phase reported by the backend (`ExecutionPhase`)
//! - Typed control values (`ControlValue`, `ControlKind`)
//! - Opaque payload values (`Value`, `ValueMap`)

mod control;
mod element;
mod error;
mod frame;
mod identity;
mod phase;
mod value;

pub use control::{ControlKind, ControlValue};
pub use element::{Element, ElementKind};
pub use error::{Error, Result};
pub use frame::{Container, Delta, ElementFrame, Region};
pub use identity::{ControlId, RunId};
pub use phase::ExecutionPhase;
pub use value::{Value, ValueMap};
