//! Protocol definitions shared between the Quarry discovery core and
//! structural scanner implementations.
//!
//! A scanner inspects one candidate artifact at a time without executing any
//! of its contents. This crate defines the vocabulary both sides agree on:
//!
//! - [`Candidate`] / [`ArtifactKind`] - a classified artifact reference
//! - [`MetadataTable`] - the run-scoped, append-only declaration index
//! - [`StructuralScanner`] - the capability trait scanners implement
//! - [`Exploration`] / [`ScanError`] - the per-candidate outcome contract
//! - [`manifest`] - serializable manifest types read from artifacts

pub mod error;
pub mod manifest;
pub mod table;
pub mod traits;
pub mod types;

pub use error::ScanError;
pub use table::{MetadataEntry, MetadataTable};
pub use traits::{Exploration, StructuralScanner};
pub use types::{ArtifactKind, Candidate, DeclarationKey, ExtensionDescriptor};
