//! Result types for discovery operations
//!
//! This module contains the result types returned by discovery manager
//! operations, providing a centralized location for output structures.

use std::path::PathBuf;

use quarry_scanner_protocol::{ArtifactKind, Candidate, ExtensionDescriptor, MetadataTable};

/// Information about one classified candidate
#[derive(Debug, Clone)]
pub struct CandidateInfo {
    pub location: PathBuf,
    pub kind: ArtifactKind,
    pub primary_source: bool,
}

/// Result of a complete discovery run
#[derive(Debug)]
pub struct DiscoveryOutcome {
    /// Resolved extension descriptors, in exploration order.
    pub descriptors: Vec<ExtensionDescriptor>,
    /// Every candidate the run classified, in accumulation order.
    pub candidates: Vec<CandidateInfo>,
    /// The completed metadata table, queryable by declaration key.
    pub table: MetadataTable,
}

impl From<&Candidate> for CandidateInfo {
    fn from(candidate: &Candidate) -> Self {
        Self {
            location: candidate.location.clone(),
            kind: candidate.kind,
            primary_source: candidate.primary_source,
        }
    }
}
