//! Attachment module for Beacon.
//!
//! This module provides the seam between subjects and their registries:
//! an identity-keyed side table with lazy get-or-create, for attaching a
//! registry to a type without modifying its definition.

pub mod table;

pub use table::RegistryTable;
pub use table::SubjectId;
