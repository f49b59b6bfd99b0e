//! Listener entry definitions for the Beacon registry.
//!
//! This module defines the listener callback shapes and the entry type
//! stored inside a registry bucket.

use crate::listener::payload::Payload;
use std::sync::Arc;

/// Type alias for callbacks invoked with no data.
pub type BareCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for callbacks invoked with the optional trigger payload.
pub type PayloadCallback = Arc<dyn Fn(Option<&Payload>) + Send + Sync>;

/// The two listener shapes, as a tagged union.
///
/// An entry holds exactly one of these; the "both present" and "both
/// absent" states cannot be represented.
#[derive(Clone)]
pub enum ListenerCallback {
    /// Invoked with no data; any trigger payload is ignored.
    Bare(BareCallback),
    /// Invoked with the payload passed to the trigger, which may be absent.
    WithPayload(PayloadCallback),
}

/// One registered callback plus its optional identifier.
///
/// Identifiers are not required to be unique; removal matches the first
/// entry carrying a given non-empty id. Entries created without an id
/// hold the empty string and cannot be removed individually.
#[derive(Clone)]
pub struct ListenerEntry {
    /// Identifier used for removal, empty when the caller supplied none
    pub id: String,
    /// Callback to execute when the event triggers
    pub callback: ListenerCallback,
}

impl ListenerEntry {
    /// Create a new listener entry
    pub fn new(callback: ListenerCallback, listener_id: Option<&str>) -> Self {
        ListenerEntry {
            id: listener_id.unwrap_or_default().to_string(),
            callback,
        }
    }

    /// Create an entry that does not expect data from the trigger
    pub fn bare<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        ListenerEntry::new(ListenerCallback::Bare(Arc::new(action)), None)
    }

    /// Create an entry that expects the optional trigger payload
    pub fn with_payload<F>(action: F) -> Self
    where
        F: Fn(Option<&Payload>) + Send + Sync + 'static,
    {
        ListenerEntry::new(ListenerCallback::WithPayload(Arc::new(action)), None)
    }

    /// Attach an identifier to this entry
    pub fn with_id(mut self, listener_id: &str) -> Self {
        self.id = listener_id.to_string();
        self
    }

    /// Invoke the callback, dispatching on its shape.
    ///
    /// A bare callback ignores `payload`; a with-payload callback receives
    /// it as-is, including absence.
    pub fn invoke(&self, payload: Option<&Payload>) {
        match &self.callback {
            ListenerCallback::Bare(action) => action(),
            ListenerCallback::WithPayload(action) => action(payload),
        }
    }
}
