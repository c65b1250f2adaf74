//! Outbound messages carrying widget state to the backend

use crate::error::Result;
use reportview_core::{ControlId, ControlKind, ControlValue};
use serde::{Deserialize, Serialize};

/// One control's entry in a state update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    pub id: ControlId,
    pub value: ControlValue,
}

impl WidgetState {
    pub fn new(id: impl Into<ControlId>, value: ControlValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// The kind of the carried value
    pub fn kind(&self) -> ControlKind {
        self.value.kind()
    }
}

/// A full snapshot of every stored control
///
/// Always complete, never a delta: consecutive updates repeat unchanged
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetStates {
    pub widgets: Vec<WidgetState>,
}

impl WidgetStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the entry for a control
    pub fn get(&self, id: &str) -> Option<&WidgetState> {
        self.widgets.iter().find(|w| w.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Message from the frontend back to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BackMsg {
    /// Current values of all controls
    UpdateWidgets(WidgetStates),
}

impl BackMsg {
    /// The widget states carried by this message, if any
    pub fn widget_states(&self) -> Option<&WidgetStates> {
        match self {
            BackMsg::UpdateWidgets(states) => Some(states),
        }
    }

    /// Encode as RON
    ///
    /// Output is deterministic for a given message.
    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }
}
