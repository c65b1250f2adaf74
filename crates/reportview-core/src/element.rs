//! Typed elements, the units a frame is made of

use crate::control::ControlKind;
use crate::identity::{ControlId, RunId};
use crate::value::{Value, ValueMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator selecting how an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Not yet computed; carries no payload
    Empty,
    Text,
    Markdown,
    Json,
    DocString,
    Exception,
    Table,
    DataFrame,
    Chart,
    VegaLiteChart,
    Image,
    Audio,
    Video,
    Progress,
    Button,
    Checkbox,
    Slider,
    TextInput,
    TextArea,
    NumberInput,
    TimeInput,
    DateInput,
    Radio,
    Selectbox,
    /// Synthetic anchor appended after the displayed content
    EndOfContent,
}

impl ElementKind {
    /// Get the name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Empty => "empty",
            ElementKind::Text => "text",
            ElementKind::Markdown => "markdown",
            ElementKind::Json => "json",
            ElementKind::DocString => "doc_string",
            ElementKind::Exception => "exception",
            ElementKind::Table => "table",
            ElementKind::DataFrame => "data_frame",
            ElementKind::Chart => "chart",
            ElementKind::VegaLiteChart => "vega_lite_chart",
            ElementKind::Image => "image",
            ElementKind::Audio => "audio",
            ElementKind::Video => "video",
            ElementKind::Progress => "progress",
            ElementKind::Button => "button",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Slider => "slider",
            ElementKind::TextInput => "text_input",
            ElementKind::TextArea => "text_area",
            ElementKind::NumberInput => "number_input",
            ElementKind::TimeInput => "time_input",
            ElementKind::DateInput => "date_input",
            ElementKind::Radio => "radio",
            ElementKind::Selectbox => "selectbox",
            ElementKind::EndOfContent => "end_of_content",
        }
    }

    /// The kind of slot an interactive element stores its value in
    ///
    /// Returns `None` for non-interactive kinds.
    pub fn control_kind(&self) -> Option<ControlKind> {
        match self {
            ElementKind::Button => Some(ControlKind::Trigger),
            ElementKind::Checkbox => Some(ControlKind::Bool),
            ElementKind::Slider => Some(ControlKind::FloatArray),
            ElementKind::TextInput
            | ElementKind::TextArea
            | ElementKind::TimeInput
            | ElementKind::DateInput => Some(ControlKind::String),
            ElementKind::NumberInput => Some(ControlKind::Float),
            ElementKind::Radio | ElementKind::Selectbox => Some(ControlKind::Int),
            _ => None,
        }
    }

    /// Check if elements of this kind are interactive controls
    pub fn is_interactive(&self) -> bool {
        self.control_kind().is_some()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One typed element of a frame
///
/// Elements have no identity beyond their position in a region; `origin`
/// only records which run produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// How this element is rendered
    pub kind: ElementKind,
    /// The run that produced this element
    pub origin: RunId,
    /// Kind-specific data, opaque to the core
    #[serde(default)]
    pub payload: ValueMap,
}

impl Element {
    /// Create a new element with an empty payload
    pub fn new(kind: ElementKind, origin: impl Into<RunId>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            payload: ValueMap::new(),
        }
    }

    /// Create a "not yet computed" placeholder
    pub fn empty(origin: impl Into<RunId>) -> Self {
        Self::new(ElementKind::Empty, origin)
    }

    /// Create the synthetic end-of-content anchor
    pub fn end_marker(origin: impl Into<RunId>) -> Self {
        Self::new(ElementKind::EndOfContent, origin)
    }

    /// Builder: add a payload entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Check if this is an `empty` placeholder
    pub fn is_empty(&self) -> bool {
        self.kind == ElementKind::Empty
    }

    /// Check if this is the synthetic end marker
    pub fn is_end_marker(&self) -> bool {
        self.kind == ElementKind::EndOfContent
    }

    /// Get a payload entry
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// The control this element addresses, read from its `id` payload entry
    ///
    /// Only interactive kinds have one.
    pub fn control_id(&self) -> Option<ControlId> {
        if !self.kind.is_interactive() {
            return None;
        }
        self.get("id").and_then(Value::as_str).map(ControlId::new)
    }
}
