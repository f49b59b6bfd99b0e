//! Listener registry module for Beacon.
//!
//! This module provides the core per-object event-listener registry: an
//! in-memory mapping from event name to an ordered list of listener
//! entries, with add, remove, and trigger operations.

pub mod entry;
pub mod payload;
pub mod registry;

pub use entry::ListenerCallback;
pub use entry::ListenerEntry;
pub use payload::Payload;
pub use registry::ListenerRegistry;
