//! Renderer dispatch by element kind
//!
//! Renderers themselves live outside this crate. The registry only resolves
//! which one handles a given element, once per element.

use reportview_core::{Element, ElementKind};
use std::collections::HashMap;

/// Turns an element into a renderable unit sized to `width`
pub trait Renderer {
    /// What the renderer produces
    type Output;

    /// Render an element
    fn render(&self, element: &Element, width: u16) -> Self::Output;
}

impl<F, O> Renderer for F
where
    F: Fn(&Element, u16) -> O,
{
    type Output = O;

    fn render(&self, element: &Element, width: u16) -> O {
        self(element, width)
    }
}

/// Lookup table from element kind to renderer
pub struct RendererRegistry<O> {
    renderers: HashMap<ElementKind, Box<dyn Renderer<Output = O>>>,
}

impl<O> RendererRegistry<O> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer for a kind
    ///
    /// Returns the renderer previously registered for that kind, if any.
    /// Registrations for `Empty` and `EndOfContent` are ignored since those
    /// kinds never render.
    pub fn register<R>(
        &mut self,
        kind: ElementKind,
        renderer: R,
    ) -> Option<Box<dyn Renderer<Output = O>>>
    where
        R: Renderer<Output = O> + 'static,
    {
        if matches!(kind, ElementKind::Empty | ElementKind::EndOfContent) {
            return None;
        }
        self.renderers.insert(kind, Box::new(renderer))
    }

    /// Check if a kind has a renderer
    pub fn is_registered(&self, kind: ElementKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Render an element with the renderer registered for its kind
    ///
    /// Returns `None` for `empty` placeholders, the end marker, and kinds
    /// with no registered renderer.
    pub fn dispatch(&self, element: &Element, width: u16) -> Option<O> {
        self.renderers
            .get(&element.kind)
            .map(|renderer| renderer.render(element, width))
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl<O> Default for RendererRegistry<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Banner;

    impl Renderer for Banner {
        type Output = String;

        fn render(&self, element: &Element, width: u16) -> String {
            let body = element.get("body").and_then(|v| v.as_str()).unwrap_or("");
            format!("{:^width$}", body, width = width as usize)
        }
    }

    #[test]
    fn test_dispatch_by_kind() {
        let mut registry = RendererRegistry::new();
        registry.register(ElementKind::Text, Banner);
        registry.register(ElementKind::Chart, |_: &Element, width: u16| {
            format!("chart@{}", width)
        });

        let text = Element::new(ElementKind::Text, "r1").with("body", "hi");
        let chart = Element::new(ElementKind::Chart, "r1");

        assert_eq!(registry.dispatch(&text, 6), Some("  hi  ".to_string()));
        assert_eq!(registry.dispatch(&chart, 40), Some("chart@40".to_string()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unrecognized_and_empty_render_nothing() {
        let mut registry = RendererRegistry::new();
        assert!(registry.register(ElementKind::Empty, Banner).is_none());
        assert!(!registry.is_registered(ElementKind::Empty));

        assert_eq!(registry.dispatch(&Element::empty("r1"), 10), None);
        assert_eq!(registry.dispatch(&Element::end_marker("r1"), 10), None);
        assert_eq!(
            registry.dispatch(&Element::new(ElementKind::Video, "r1"), 10),
            None
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = RendererRegistry::new();
        assert!(registry.register(ElementKind::Text, Banner).is_none());
        assert!(registry.register(ElementKind::Text, Banner).is_some());
        assert_eq!(registry.len(), 1);
    }
}
