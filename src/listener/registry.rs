//! Registry manager for Beacon.
//!
//! This module provides the per-object registry that handles listener
//! registration, removal, and triggering.

use crate::listener::entry::ListenerEntry;
use crate::listener::payload::Payload;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Per-object registry mapping event names to ordered listener buckets.
///
/// Cloning produces another handle to the same registry. All operations
/// are synchronous and total: missing event names and unmatched listener
/// ids are valid, silently-handled states rather than errors.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    /// Map of event names to listener buckets, insertion order preserved
    buckets: Arc<RwLock<HashMap<String, Vec<ListenerEntry>>>>,
}

impl ListenerRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        ListenerRegistry {
            buckets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a listener for an event name.
    ///
    /// The entry is appended to the end of the event's bucket, creating
    /// the bucket on first use. Duplicate ids are permitted; removal only
    /// ever matches the first occurrence.
    pub fn add_listener(&self, event_name: &str, entry: ListenerEntry) {
        let mut buckets = self.buckets.write().unwrap();
        log::trace!("adding listener '{}' for event '{}'", entry.id, event_name);
        buckets
            .entry(event_name.to_string())
            .or_insert_with(Vec::new)
            .push(entry);
    }

    /// Remove the first listener with the given id from an event's bucket.
    ///
    /// Scanning stops at the first match, so later entries sharing the
    /// same id stay registered. A missing bucket or an unmatched id is a
    /// silent no-op.
    pub fn remove_listener(&self, event_name: &str, listener_id: &str) {
        // Entries registered without an id hold the empty string; they are
        // not addressable for individual removal.
        if listener_id.is_empty() {
            return;
        }

        let mut buckets = self.buckets.write().unwrap();
        if let Some(bucket) = buckets.get_mut(event_name) {
            if let Some(position) = bucket.iter().position(|entry| entry.id == listener_id) {
                bucket.remove(position);
                log::trace!("removed listener '{}' from event '{}'", listener_id, event_name);
                return;
            }
        }
        log::debug!(
            "remove_listener matched nothing for event '{}', id '{}'",
            event_name,
            listener_id
        );
    }

    /// Remove listeners in bulk.
    ///
    /// With an event name, empties that bucket only; the now-empty key
    /// stays present. With `None`, removes every bucket. Naming a bucket
    /// that does not exist is a silent no-op.
    pub fn remove_listeners(&self, event_name: Option<&str>) {
        let mut buckets = self.buckets.write().unwrap();
        match event_name {
            Some(name) => {
                if let Some(bucket) = buckets.get_mut(name) {
                    bucket.clear();
                    log::trace!("cleared listeners for event '{}'", name);
                }
            }
            None => {
                buckets.clear();
                log::trace!("cleared all listeners");
            }
        }
    }

    /// Trigger an event, invoking every listener currently registered for
    /// it, in registration order, on the calling thread.
    ///
    /// Iterates a snapshot of the bucket taken at call start, so listeners
    /// may add or remove listeners mid-trigger without affecting this
    /// invocation pass; entries added during the trigger do not fire.
    /// Panics raised by a callback are not caught and propagate to the
    /// caller. A never-registered event name invokes nothing.
    pub fn trigger(&self, event_name: &str, payload: Option<Payload>) {
        // Clone the bucket under the read lock, then invoke with no lock
        // held: callbacks are free to mutate this registry.
        let snapshot = {
            let buckets = self.buckets.read().unwrap();
            match buckets.get(event_name) {
                Some(bucket) => bucket.clone(),
                None => {
                    log::debug!("trigger for event '{}' found no listeners", event_name);
                    return;
                }
            }
        };

        for entry in &snapshot {
            entry.invoke(payload.as_ref());
        }
    }

    /// Get the number of listeners registered for a specific event name
    pub fn listener_count(&self, event_name: &str) -> usize {
        let buckets = self.buckets.read().unwrap();
        buckets.get(event_name).map_or(0, |bucket| bucket.len())
    }

    /// Get the total number of listeners across all event names
    pub fn total_listener_count(&self) -> usize {
        let buckets = self.buckets.read().unwrap();
        buckets.values().map(|bucket| bucket.len()).sum()
    }
}
