//! WidgetStateManager - Authoritative client-side values of interactive controls
//!
//! Every mutation is followed, synchronously, by a message carrying the full
//! state of every control. There is no dirty-checking: writing an unchanged
//! value still sends.

use crate::error::{Error, Result};
use crate::message::{BackMsg, WidgetState, WidgetStates};
use crate::time_input::TimeOfDay;
use crate::transport::MessageSink;
use indexmap::IndexMap;
use reportview_core::{ControlId, ControlKind, ControlValue, Element};
use tracing::{debug, warn};

/// Holds control values and pushes them to the backend on every change
///
/// Slots are created on first write and keep their kind for life. Iteration
/// (and therefore wire order) follows first-write order.
pub struct WidgetStateManager<S: MessageSink> {
    /// Delivers updates to the backend
    sink: S,
    /// Current value per control
    widget_states: IndexMap<ControlId, ControlValue>,
}

impl<S: MessageSink> WidgetStateManager<S> {
    /// Create an empty store that sends through `sink`
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            widget_states: IndexMap::new(),
        }
    }

    /// True if no slot exists
    ///
    /// Only the case before the first control has ever been written, which
    /// tells a fresh connection apart from one whose controls sit at defaults.
    pub fn is_empty(&self) -> bool {
        self.widget_states.is_empty()
    }

    /// Number of stored controls
    pub fn len(&self) -> usize {
        self.widget_states.len()
    }

    /// Get the raw value of a control
    pub fn get_value(&self, id: &str) -> Option<&ControlValue> {
        self.widget_states.get(id)
    }

    /// Get the kind of a control's slot
    pub fn get_kind(&self, id: &str) -> Option<ControlKind> {
        self.get_value(id).map(ControlValue::kind)
    }

    pub fn get_bool_value(&self, id: &str) -> Option<bool> {
        self.get_value(id).and_then(ControlValue::as_bool)
    }

    pub fn set_bool_value(&mut self, id: impl Into<ControlId>, value: bool) -> Result<()> {
        self.set_value(id.into(), ControlValue::Bool(value))
    }

    pub fn get_int_value(&self, id: &str) -> Option<i64> {
        self.get_value(id).and_then(ControlValue::as_int)
    }

    pub fn set_int_value(&mut self, id: impl Into<ControlId>, value: i64) -> Result<()> {
        self.set_value(id.into(), ControlValue::Int(value))
    }

    pub fn get_float_value(&self, id: &str) -> Option<f64> {
        self.get_value(id).and_then(ControlValue::as_float)
    }

    pub fn set_float_value(&mut self, id: impl Into<ControlId>, value: f64) -> Result<()> {
        self.set_value(id.into(), ControlValue::Float(value))
    }

    pub fn get_string_value(&self, id: &str) -> Option<&str> {
        self.get_value(id).and_then(ControlValue::as_str)
    }

    pub fn set_string_value(
        &mut self,
        id: impl Into<ControlId>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.set_value(id.into(), ControlValue::String(value.into()))
    }

    pub fn get_float_array_value(&self, id: &str) -> Option<&[f64]> {
        self.get_value(id).and_then(ControlValue::as_float_array)
    }

    pub fn set_float_array_value(
        &mut self,
        id: impl Into<ControlId>,
        value: impl Into<Vec<f64>>,
    ) -> Result<()> {
        self.set_value(id.into(), ControlValue::FloatArray(value.into()))
    }

    /// Get a time input's value
    ///
    /// Absent if the slot is missing, not a string, or not a valid `HH:MM`.
    pub fn get_time_value(&self, id: &str) -> Option<TimeOfDay> {
        self.get_string_value(id)?.parse().ok()
    }

    /// Set a time input's value, stored as an `HH:MM` string
    pub fn set_time_value(&mut self, id: impl Into<ControlId>, value: TimeOfDay) -> Result<()> {
        self.set_string_value(id, value.to_string())
    }

    /// Fire a one-shot trigger
    ///
    /// The slot is set to `true`, a full update is sent, and the slot is then
    /// removed whatever the outcome of the send. The backend sees exactly one
    /// fired event; reading the control afterwards yields nothing.
    /// An id already holding another kind is rejected and left as it was.
    pub fn set_trigger_value(&mut self, id: impl Into<ControlId>) -> Result<()> {
        let id = id.into();
        self.store(id.clone(), ControlValue::Trigger(true))?;
        let sent = self.send_update_message();
        self.widget_states.shift_remove(&id);
        sent
    }

    /// Write an element's default value into the store
    ///
    /// Reads the `value` payload of an interactive element and stores it under
    /// the element's control id. Returns `Ok(false)` when there is nothing to
    /// seed: non-interactive kinds, elements with no id, triggers, or a payload
    /// that does not fit the control's kind.
    pub fn seed_from_element(&mut self, element: &Element) -> Result<bool> {
        let (Some(id), Some(kind)) = (element.control_id(), element.kind.control_kind()) else {
            return Ok(false);
        };
        let Some(default) = element.get("value") else {
            return Ok(false);
        };

        let value = match kind {
            ControlKind::Bool => default.as_bool().map(ControlValue::Bool),
            ControlKind::Int => default.as_int().map(ControlValue::Int),
            ControlKind::Float => default.as_float().map(ControlValue::Float),
            ControlKind::String => default.as_str().map(|s| ControlValue::String(s.to_string())),
            ControlKind::FloatArray => default.as_float_list().map(ControlValue::FloatArray),
            ControlKind::Trigger => None,
        };

        match value {
            Some(value) => {
                self.set_value(id, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Send the full current state to the backend
    ///
    /// Every stored control appears exactly once, in first-write order.
    pub fn send_update_message(&mut self) -> Result<()> {
        let states = self.widget_states_msg();
        let count = states.len();

        match self.sink.send(BackMsg::UpdateWidgets(states)) {
            Ok(()) => {
                debug!(widgets = count, "sent widget state update");
                Ok(())
            }
            Err(err) => {
                warn!(widgets = count, error = %err, "failed to send widget state update");
                Err(Error::Transport(Box::new(err)))
            }
        }
    }

    /// Build the snapshot that would be sent right now
    pub fn widget_states_msg(&self) -> WidgetStates {
        WidgetStates {
            widgets: self
                .widget_states
                .iter()
                .map(|(id, value)| WidgetState::new(id, value.clone()))
                .collect(),
        }
    }

    /// Get the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get mutable access to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn set_value(&mut self, id: ControlId, value: ControlValue) -> Result<()> {
        self.store(id, value)?;
        self.send_update_message()
    }

    /// Insert or overwrite a slot, keeping its kind fixed
    fn store(&mut self, id: ControlId, value: ControlValue) -> Result<()> {
        if let Some(existing) = self.widget_states.get(&id) {
            if existing.kind() != value.kind() {
                return Err(Error::KindMismatch {
                    id,
                    expected: existing.kind(),
                    found: value.kind(),
                });
            }
        }
        self.widget_states.insert(id, value);
        Ok(())
    }
}
