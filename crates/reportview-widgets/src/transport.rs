//! Sink for outbound messages
//!
//! The store hands every update to a sink supplied at construction. Users
//! implement this for their chosen channel (WebSocket, test recorder, etc.).

use crate::message::BackMsg;
use std::convert::Infallible;

/// Destination for messages to the backend
pub trait MessageSink {
    /// Error type for this sink
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver one message
    fn send(&mut self, msg: BackMsg) -> Result<(), Self::Error>;
}

impl<F, E> MessageSink for F
where
    F: FnMut(BackMsg) -> Result<(), E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn send(&mut self, msg: BackMsg) -> Result<(), E> {
        self(msg)
    }
}

/// Sink that keeps every message it is given, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Vec<BackMsg>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far
    pub fn sent(&self) -> &[BackMsg] {
        &self.sent
    }

    /// The most recent message
    pub fn last(&self) -> Option<&BackMsg> {
        self.sent.last()
    }

    /// Take the recorded messages, leaving the sink empty
    pub fn drain(&mut self) -> Vec<BackMsg> {
        std::mem::take(&mut self.sent)
    }
}

impl MessageSink for RecordingSink {
    type Error = Infallible;

    fn send(&mut self, msg: BackMsg) -> Result<(), Infallible> {
        self.sent.push(msg);
        Ok(())
    }
}
