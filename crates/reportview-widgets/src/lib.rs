//! Reportview Widgets - Interactive control state, synchronised with the backend
//!
//! [`WidgetStateManager`] is the single owner of every control value. Each
//! write is followed by a [`BackMsg::UpdateWidgets`] carrying the complete
//! state, handed to the [`MessageSink`] given at construction.
//!
//! # Example
//!
//! ```
//! use reportview_widgets::{RecordingSink, WidgetStateManager};
//!
//! let mut widgets = WidgetStateManager::new(RecordingSink::new());
//! widgets.set_int_value("radio", 2).unwrap();
//! widgets.set_trigger_value("submit").unwrap();
//!
//! assert_eq!(widgets.sink().sent().len(), 2);
//! assert_eq!(widgets.get_bool_value("submit"), None);
//! ```

mod error;
mod message;
mod store;
mod time_input;
mod transport;

pub use error::{Error, Result};
pub use message::{BackMsg, WidgetState, WidgetStates};
pub use store::WidgetStateManager;
pub use time_input::TimeOfDay;
pub use transport::{MessageSink, RecordingSink};
