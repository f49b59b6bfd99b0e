//! Beacon: a per-object event-listener registry.
//!
//! Any subject can register named listeners, remove them by identifier,
//! and trigger every listener registered for an event name, optionally
//! passing a payload. Listeners fire synchronously, in registration
//! order, on the calling thread.
//!
//! # Example
//!
//! ```
//! use beacon::{ListenerEntry, ListenerRegistry, Payload};
//!
//! let registry = ListenerRegistry::new();
//!
//! registry.add_listener("ping", ListenerEntry::bare(|| {
//!     println!("ping received");
//! }).with_id("console"));
//!
//! registry.add_listener("data", ListenerEntry::with_payload(|payload| {
//!     println!("data received: {:?}", payload);
//! }));
//!
//! registry.trigger("ping", None);
//! registry.trigger("data", Some(Payload::from(42)));
//!
//! registry.remove_listener("ping", "console");
//! registry.remove_listeners(None);
//! ```
//!
//! Subjects that cannot own a registry field directly hold a
//! [`SubjectId`] and share a [`RegistryTable`], which creates each
//! subject's registry lazily on first access.

pub mod attach;
pub mod listener;

pub use attach::{RegistryTable, SubjectId};
pub use listener::{ListenerCallback, ListenerEntry, ListenerRegistry, Payload};
