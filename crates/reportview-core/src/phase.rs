//! Execution phase reported by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of the current run
///
/// Owned by whoever talks to the backend; the core only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionPhase {
    #[default]
    Idle,
    /// A new run is about to replace everything on screen
    RerunRequested,
    /// A run is in flight and the frame is still being populated
    Running,
    Complete,
}

impl ExecutionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, ExecutionPhase::Running)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExecutionPhase::Idle => "idle",
            ExecutionPhase::RerunRequested => "rerun_requested",
            ExecutionPhase::Running => "running",
            ExecutionPhase::Complete => "complete",
        }
    }
}

impl fmt::Display for ExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
