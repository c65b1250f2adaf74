//! ReportSession - Glue between the backend stream and the presentation layer
//!
//! The session remembers what is on screen, feeds each new frame through
//! [`reconcile`] in arrival order, and turns the result into a [`RenderPlan`].
//! It also owns the [`WidgetStateManager`] the controls on screen write to.

use crate::config::SessionConfig;
use crate::error::Result;
use reportview_core::{Container, Delta, Element, ElementFrame, ExecutionPhase, RunId};
use reportview_reconcile::{is_stale, reconcile, DisplayFrame, RendererRegistry};
use reportview_widgets::{MessageSink, WidgetStateManager};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A frame as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundFrame {
    pub frame: ElementFrame,
    pub phase: ExecutionPhase,
    pub run_id: RunId,
}

/// How one element should be presented
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedElement<'a> {
    pub element: &'a Element,
    /// Fade out: the element belongs to a superseded run
    pub stale: bool,
    /// Interactive, but the backend is unreachable
    pub disabled: bool,
}

/// Everything the presentation layer needs for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<'a> {
    /// Main region, ending with the end-of-content marker
    pub main: Vec<PlannedElement<'a>>,
    /// Side region; `None` when it has no elements
    pub sidebar: Option<Vec<PlannedElement<'a>>>,
    /// Width handed to renderers
    pub width: u16,
}

impl<'a> RenderPlan<'a> {
    /// Render every planned element, sidebar first
    ///
    /// Elements without a renderer (including `empty` placeholders and the
    /// end marker) produce nothing.
    pub fn render<O>(&self, registry: &RendererRegistry<O>) -> Vec<O> {
        self.sidebar
            .iter()
            .flatten()
            .chain(self.main.iter())
            .filter_map(|planned| registry.dispatch(planned.element, self.width))
            .collect()
    }
}

/// One connected report and its control state
pub struct ReportSession<S: MessageSink> {
    config: SessionConfig,
    widgets: WidgetStateManager<S>,
    /// Latest frame received for the current run
    pending: ElementFrame,
    /// What is currently on screen
    displayed: Option<DisplayFrame>,
    phase: ExecutionPhase,
    current_run: RunId,
    connected: bool,
}

impl<S: MessageSink> ReportSession<S> {
    /// Create a session that sends widget updates through `sink`
    pub fn new(config: SessionConfig, sink: S) -> Self {
        Self {
            config,
            widgets: WidgetStateManager::new(sink),
            pending: ElementFrame::new(),
            displayed: None,
            phase: ExecutionPhase::Idle,
            current_run: RunId::default(),
            connected: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> ExecutionPhase {
        self.phase
    }

    pub fn current_run(&self) -> &RunId {
        &self.current_run
    }

    /// The frame currently on screen
    pub fn displayed(&self) -> Option<&DisplayFrame> {
        self.displayed.as_ref()
    }

    pub fn widgets(&self) -> &WidgetStateManager<S> {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetStateManager<S> {
        &mut self.widgets
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            info!(connected, "backend connection changed");
        }
        self.connected = connected;
    }

    /// Take a complete frame from the backend
    ///
    /// The frame replaces the pending one and is reconciled against what is
    /// on screen. Controls appearing for the first time have their default
    /// value written to the widget store.
    ///
    /// A malformed frame is rejected as a whole: display, phase and run stay
    /// as they were. A failed seed send does not undo the new display; the
    /// first such error is returned once every new control has been seeded.
    pub fn handle_frame(&mut self, inbound: InboundFrame) -> Result<&DisplayFrame> {
        self.commit(inbound.phase, inbound.run_id, inbound.frame)
    }

    /// Start a new run
    ///
    /// The pending frame becomes a skeleton of `empty` placeholders shaped
    /// like the display, so prior content stays visible until recomputed.
    pub fn begin_run(&mut self, run_id: RunId) -> Result<&DisplayFrame> {
        let skeleton = match &self.displayed {
            Some(displayed) => ElementFrame::placeholders_for_rerun(displayed.frame(), &run_id),
            None => ElementFrame::new(),
        };
        self.commit(ExecutionPhase::Running, run_id, skeleton)
    }

    /// Apply one backend delta to the pending frame
    pub fn apply_delta(&mut self, delta: Delta) -> Result<&DisplayFrame> {
        let mut candidate = self.pending.clone();
        candidate.apply_delta(delta);
        self.commit(self.phase, self.current_run.clone(), candidate)
    }

    /// The backend asked for a rerun; everything on screen is about to go
    pub fn request_rerun(&mut self) -> Result<&DisplayFrame> {
        let run = self.current_run.clone();
        self.commit(ExecutionPhase::RerunRequested, run, self.pending.clone())
    }

    /// The current run finished; show the pending frame as-is
    pub fn finish_run(&mut self) -> Result<&DisplayFrame> {
        let run = self.current_run.clone();
        self.commit(ExecutionPhase::Complete, run, self.pending.clone())
    }

    /// Plan the next render pass
    pub fn render_plan(&self) -> RenderPlan<'_> {
        let Some(displayed) = &self.displayed else {
            return RenderPlan {
                main: Vec::new(),
                sidebar: None,
                width: self.config.default_width,
            };
        };

        let sidebar = if displayed.frame().auxiliary.is_empty() {
            None
        } else {
            Some(self.plan_region(displayed, Container::Sidebar))
        };

        RenderPlan {
            main: self.plan_region(displayed, Container::Main),
            sidebar,
            width: self.config.default_width,
        }
    }

    fn plan_region<'a>(
        &'a self,
        displayed: &'a DisplayFrame,
        container: Container,
    ) -> Vec<PlannedElement<'a>> {
        displayed
            .display_list(container)
            .into_iter()
            .map(|element| self.plan_element(element))
            .collect()
    }

    fn plan_element<'a>(&self, element: &'a Element) -> PlannedElement<'a> {
        let stale = self.config.show_stale_element_indicator
            && is_stale(element, self.phase, &self.current_run);
        let disabled = element.kind.is_interactive()
            && self.config.disable_widgets_when_disconnected
            && !self.connected;
        PlannedElement {
            element,
            stale,
            disabled,
        }
    }

    fn transition(&mut self, phase: ExecutionPhase, run_id: RunId) {
        if self.phase != phase || self.current_run != run_id {
            debug!(from = %self.phase, to = %phase, run = %run_id, "execution phase changed");
        }
        self.phase = phase;
        self.current_run = run_id;
    }

    /// Reconcile `pending` and, only if that succeeds, make it current
    fn commit(
        &mut self,
        phase: ExecutionPhase,
        run_id: RunId,
        pending: ElementFrame,
    ) -> Result<&DisplayFrame> {
        let empty = ElementFrame::new();
        let previous = self.displayed.as_ref().map_or(&empty, DisplayFrame::frame);
        let next = reconcile(previous, &pending, phase, &run_id)?;

        self.transition(phase, run_id);
        self.pending = pending;
        let displayed = self.displayed.insert(next);
        Self::seed_new_controls(&mut self.widgets, displayed.frame())?;
        Ok(displayed)
    }

    /// Write defaults for controls the store has never seen
    ///
    /// Keeps going past a failed send so later controls are still seeded.
    fn seed_new_controls(widgets: &mut WidgetStateManager<S>, frame: &ElementFrame) -> Result<()> {
        let mut first_err = None;
        for &container in Container::all() {
            for element in frame.elements(container) {
                let is_new = element
                    .control_id()
                    .is_some_and(|id| widgets.get_value(id.as_str()).is_none());
                if !is_new {
                    continue;
                }
                if let Err(e) = widgets.seed_from_element(element) {
                    warn!(kind = element.kind.name(), error = %e, "could not seed control");
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
