//! Identity-keyed registry table.
//!
//! Subjects that cannot own a [`ListenerRegistry`] field directly hold a
//! [`SubjectId`] instead and look their registry up in a shared
//! [`RegistryTable`]. Ids are plain values, so the table never extends a
//! subject's lifetime; call [`RegistryTable::detach`] when the subject
//! goes away.

use crate::listener::registry::ListenerRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Opaque identity token for one subject object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(Uuid);

impl SubjectId {
    /// Mint a fresh subject identity
    pub fn new() -> Self {
        SubjectId(Uuid::new_v4())
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        SubjectId::new()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side table mapping subject identities to their registries.
///
/// Registries are created lazily on first access and retained until the
/// subject is detached. Cloning produces another handle to the same table.
#[derive(Clone, Default)]
pub struct RegistryTable {
    registries: Arc<RwLock<HashMap<SubjectId, ListenerRegistry>>>,
}

impl RegistryTable {
    /// Create a new, empty table
    pub fn new() -> Self {
        RegistryTable {
            registries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the registry for a subject, creating it on first access.
    ///
    /// The returned value is a handle; every call for the same subject
    /// reaches the same underlying registry.
    pub fn registry(&self, subject: SubjectId) -> ListenerRegistry {
        let mut registries = self.registries.write().unwrap();
        registries
            .entry(subject)
            .or_insert_with(|| {
                log::trace!("creating registry for subject {}", subject);
                ListenerRegistry::new()
            })
            .clone()
    }

    /// Get the registry for a subject without creating one
    pub fn get(&self, subject: SubjectId) -> Option<ListenerRegistry> {
        let registries = self.registries.read().unwrap();
        registries.get(&subject).cloned()
    }

    /// Drop a subject's registry and all of its listeners.
    ///
    /// Silent no-op if the subject was never attached. Handles obtained
    /// earlier keep working but are no longer reachable through the table.
    pub fn detach(&self, subject: SubjectId) {
        let mut registries = self.registries.write().unwrap();
        if registries.remove(&subject).is_some() {
            log::trace!("detached registry for subject {}", subject);
        }
    }

    /// Get the number of subjects currently holding a registry
    pub fn subject_count(&self) -> usize {
        let registries = self.registries.read().unwrap();
        registries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::entry::ListenerEntry;

    #[test]
    fn test_registry_created_lazily_and_reused() {
        let table = RegistryTable::new();
        let subject = SubjectId::new();
        assert_eq!(table.subject_count(), 0);
        assert!(table.get(subject).is_none());

        let registry = table.registry(subject);
        registry.add_listener("ping", ListenerEntry::bare(|| {}));
        assert_eq!(table.subject_count(), 1);

        // second lookup reaches the same registry
        assert_eq!(table.registry(subject).listener_count("ping"), 1);
    }

    #[test]
    fn test_subjects_are_isolated() {
        let table = RegistryTable::new();
        let first = SubjectId::new();
        let second = SubjectId::new();

        table.registry(first).add_listener("ping", ListenerEntry::bare(|| {}));

        assert_eq!(table.registry(first).listener_count("ping"), 1);
        assert_eq!(table.registry(second).listener_count("ping"), 0);
        assert_eq!(table.subject_count(), 2);
    }

    #[test]
    fn test_detach_forgets_a_subject() {
        let table = RegistryTable::new();
        let subject = SubjectId::new();

        table.registry(subject).add_listener("ping", ListenerEntry::bare(|| {}));
        table.detach(subject);

        assert_eq!(table.subject_count(), 0);
        assert!(table.get(subject).is_none());

        // detaching an unknown subject is a no-op
        table.detach(SubjectId::new());
        assert_eq!(table.subject_count(), 0);

        // re-attaching starts from an empty registry
        assert_eq!(table.registry(subject).listener_count("ping"), 0);
    }
}
