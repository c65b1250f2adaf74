//! Element frames: the two-region snapshot produced by one run
//!
//! Position is the only addressing key. Nothing in a frame carries an
//! identity that survives across runs, so every cross-frame operation lines
//! elements up by index.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::identity::RunId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One region of a frame
///
/// Entries are optional because a frame decoded from the wire may carry a
/// null at some position.
pub type Region = Vec<Option<Element>>;

/// Which region of a frame an element lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// The primary display region
    Main,
    /// The auxiliary, side region
    Sidebar,
}

impl Container {
    /// Both containers, in display order
    pub fn all() -> &'static [Container] {
        &[Container::Main, Container::Sidebar]
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Main => write!(f, "main"),
            Container::Sidebar => write!(f, "sidebar"),
        }
    }
}

/// An incremental update from the backend: place `element` at `index`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub container: Container,
    pub index: usize,
    pub element: Element,
}

impl Delta {
    /// Create a new delta
    pub fn new(container: Container, index: usize, element: Element) -> Self {
        Self {
            container,
            index,
            element,
        }
    }
}

/// An ordered two-region snapshot of elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    /// Main display region
    #[serde(default)]
    pub primary: Region,
    /// Secondary, side region
    #[serde(default)]
    pub auxiliary: Region,
}

impl ElementFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame where every position holds an element
    pub fn from_elements(primary: Vec<Element>, auxiliary: Vec<Element>) -> Self {
        Self {
            primary: primary.into_iter().map(Some).collect(),
            auxiliary: auxiliary.into_iter().map(Some).collect(),
        }
    }

    /// Build the skeleton of a rerun: same shape as `displayed`, every
    /// position an `empty` placeholder stamped with `run`
    pub fn placeholders_for_rerun(displayed: &ElementFrame, run: &RunId) -> Self {
        let blank = |len: usize| -> Region {
            (0..len).map(|_| Some(Element::empty(run.clone()))).collect()
        };
        Self {
            primary: blank(displayed.primary.len()),
            auxiliary: blank(displayed.auxiliary.len()),
        }
    }

    /// Get a region
    pub fn region(&self, container: Container) -> &Region {
        match container {
            Container::Main => &self.primary,
            Container::Sidebar => &self.auxiliary,
        }
    }

    /// Get a mutable region
    pub fn region_mut(&mut self, container: Container) -> &mut Region {
        match container {
            Container::Main => &mut self.primary,
            Container::Sidebar => &mut self.auxiliary,
        }
    }

    /// Get the element at a position, if one is present
    pub fn get(&self, container: Container, index: usize) -> Option<&Element> {
        self.region(container).get(index).and_then(Option::as_ref)
    }

    /// Replace the element at an existing position
    pub fn set(&mut self, container: Container, index: usize, element: Element) -> Result<()> {
        let region = self.region_mut(container);
        let len = region.len();
        let slot = region.get_mut(index).ok_or(Error::IndexOutOfBounds {
            container,
            index,
            len,
        })?;
        *slot = Some(element);
        Ok(())
    }

    /// Append an element to a region
    pub fn push(&mut self, container: Container, element: Element) {
        self.region_mut(container).push(Some(element));
    }

    /// Apply a backend delta
    ///
    /// Writes past the end of the region pad the gap with `empty`
    /// placeholders from the delta's run.
    pub fn apply_delta(&mut self, delta: Delta) {
        let origin = delta.element.origin.clone();
        let region = self.region_mut(delta.container);
        while region.len() < delta.index {
            region.push(Some(Element::empty(origin.clone())));
        }
        if delta.index < region.len() {
            region[delta.index] = Some(delta.element);
        } else {
            region.push(Some(delta.element));
        }
    }

    /// Check that every position in both regions holds a content element
    pub fn validate(&self) -> Result<()> {
        for &container in Container::all() {
            for (index, slot) in self.region(container).iter().enumerate() {
                match slot {
                    None => return Err(Error::MalformedFrame { container, index }),
                    Some(e) if e.is_end_marker() => {
                        return Err(Error::StrayEndMarker { container, index });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Total number of positions across both regions
    pub fn len(&self) -> usize {
        self.primary.len() + self.auxiliary.len()
    }

    /// Check if both regions are empty
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.auxiliary.is_empty()
    }

    /// Iterate over present elements of a region, in display order
    pub fn elements(&self, container: Container) -> impl Iterator<Item = &Element> {
        self.region(container).iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn text(run: &str, body: &str) -> Element {
        Element::new(ElementKind::Text, run).with("body", body)
    }

    #[test]
    fn test_from_elements() {
        let frame = ElementFrame::from_elements(vec![text("r1", "a")], vec![]);
        assert_eq!(frame.len(), 1);
        assert_eq!(
            frame.get(Container::Main, 0).map(|e| e.kind),
            Some(ElementKind::Text)
        );
        assert!(frame.get(Container::Sidebar, 0).is_none());
    }

    #[test]
    fn test_apply_delta_pads_gap() {
        let mut frame = ElementFrame::new();
        frame.apply_delta(Delta::new(Container::Main, 2, text("r2", "c")));

        assert_eq!(frame.primary.len(), 3);
        assert!(frame.get(Container::Main, 0).is_some_and(Element::is_empty));
        assert!(frame.get(Container::Main, 1).is_some_and(Element::is_empty));
        assert_eq!(
            frame.get(Container::Main, 0).map(|e| e.origin.clone()),
            Some(RunId::new("r2"))
        );
        assert_eq!(frame.get(Container::Main, 2), Some(&text("r2", "c")));
    }

    #[test]
    fn test_apply_delta_overwrites() {
        let mut frame = ElementFrame::from_elements(vec![], vec![text("r1", "a")]);
        frame.apply_delta(Delta::new(Container::Sidebar, 0, text("r2", "b")));
        assert_eq!(frame.auxiliary.len(), 1);
        assert_eq!(frame.get(Container::Sidebar, 0), Some(&text("r2", "b")));
    }

    #[test]
    fn test_placeholders_for_rerun() {
        let displayed = ElementFrame::from_elements(
            vec![text("r1", "a"), text("r1", "b")],
            vec![text("r1", "s")],
        );
        let run = RunId::new("r2");
        let skeleton = ElementFrame::placeholders_for_rerun(&displayed, &run);

        assert_eq!(skeleton.primary.len(), 2);
        assert_eq!(skeleton.auxiliary.len(), 1);
        assert!(skeleton
            .elements(Container::Main)
            .all(|e| e.is_empty() && e.origin == run));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut frame = ElementFrame::new();
        let err = frame.set(Container::Main, 0, text("r1", "a")).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                container: Container::Main,
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn test_validate() {
        let mut frame = ElementFrame::from_elements(vec![text("r1", "a")], vec![text("r1", "b")]);
        assert!(frame.validate().is_ok());

        frame.auxiliary.push(None);
        assert_eq!(
            frame.validate(),
            Err(Error::MalformedFrame {
                container: Container::Sidebar,
                index: 1
            })
        );

        let mut frame = ElementFrame::from_elements(vec![text("r1", "a")], vec![]);
        frame.push(Container::Main, Element::end_marker("r1"));
        assert_eq!(
            frame.validate(),
            Err(Error::StrayEndMarker {
                container: Container::Main,
                index: 1
            })
        );
    }

    #[test]
    fn test_frame_ron_roundtrip() {
        let frame = ElementFrame::from_elements(vec![text("r1", "a")], vec![]);
        let encoded = ron::to_string(&frame).unwrap();
        let decoded: ElementFrame = ron::from_str(&encoded).unwrap();
        assert_eq!(decoded, frame);
    }
}
