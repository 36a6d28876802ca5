//! Candidate accumulation and exploration orchestration.
//!
//! A [`Discoverer`] owns the run-scoped state of one discovery run: the
//! candidate list and the shared [`MetadataTable`]. Candidates are
//! accumulated from the host's own search path and from the dedicated
//! extension directory, then explored one at a time, in accumulation order,
//! by a [`StructuralScanner`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// Re-export the protocol types the discoverer trades in for convenience
pub use quarry_scanner_protocol::{
    ArtifactKind, Candidate, DeclarationKey, Exploration, ExtensionDescriptor, MetadataEntry,
    MetadataTable, ScanError, StructuralScanner,
};

use crate::classify::classify;
use crate::types::{QuarryError, QuarryResult};

/// The host runtime's own code locations, as supplied by the host.
///
/// `entries` is ordered; root scanning preserves that order. The
/// `known_libraries` list names files on the search path that belong to the
/// host itself and must never become candidates (merged with any
/// runtime-supplied extras before scanning).
#[derive(Debug, Clone, Default)]
pub struct HostSources {
    pub entries: Vec<PathBuf>,
    pub known_libraries: Vec<String>,
}

/// Run-scoped discovery state: the candidate list and the metadata table.
///
/// Construct one per run. Populate with [`scan_search_roots`] and
/// [`scan_extensions_dir`] (in that order - output ordering follows
/// accumulation order), then call [`identify`] to explore every candidate.
///
/// [`scan_search_roots`]: Discoverer::scan_search_roots
/// [`scan_extensions_dir`]: Discoverer::scan_extensions_dir
/// [`identify`]: Discoverer::identify
#[derive(Debug, Default)]
pub struct Discoverer {
    candidates: Vec<Candidate>,
    table: MetadataTable,
}

impl Discoverer {
    /// Create a discoverer with no candidates and an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate candidates from the host runtime's own search path.
    ///
    /// Every candidate produced here is marked as a primary source. Files
    /// whose name is in the merged known-library set (host defaults plus
    /// `extra_known_libraries`) are skipped; other files become archive
    /// candidates and directories become directory candidates, in the order
    /// the host supplied them.
    ///
    /// Special case: when the search path is exactly one entry and that
    /// entry is a file, it is always accepted as a single archive candidate,
    /// known-library list notwithstanding - the host's own packaged code is
    /// then the sole candidate.
    pub fn scan_search_roots(&mut self, sources: &HostSources, extra_known_libraries: &[String]) {
        let known_libraries: HashSet<&str> = sources
            .known_libraries
            .iter()
            .chain(extra_known_libraries.iter())
            .map(String::as_str)
            .collect();

        if sources.entries.len() == 1 && sources.entries[0].is_file() {
            let entry = &sources.entries[0];
            debug!(path = %entry.display(), "host code is a single file, accepting it as a candidate");
            self.candidates.push(Candidate::primary(
                entry.clone(),
                entry.clone(),
                ArtifactKind::Archive,
            ));
            return;
        }

        for entry in &sources.entries {
            if entry.is_file() {
                let name = entry.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if known_libraries.contains(name) {
                    debug!(path = %entry.display(), "skipping known library file");
                } else {
                    debug!(path = %entry.display(), "found a host-path file, examining for extension candidates");
                    self.candidates.push(Candidate::primary(
                        entry.clone(),
                        entry.clone(),
                        ArtifactKind::Archive,
                    ));
                }
            } else if entry.is_dir() {
                debug!(path = %entry.display(), "found a host-path directory, examining for extension candidates");
                self.candidates.push(Candidate::primary(
                    entry.clone(),
                    entry.clone(),
                    ArtifactKind::Directory,
                ));
            }
        }
    }

    /// Populate candidates from the dedicated extension directory.
    ///
    /// Immediate children are sorted lexicographically by file name before
    /// classification, so discovery order is reproducible regardless of the
    /// underlying directory-listing order. Subdirectories are accepted
    /// unconditionally; files only when the archive suffix matches.
    ///
    /// # Errors
    ///
    /// Returns [`QuarryError::Config`] when `dir` is not a readable
    /// directory. This is a setup precondition, checked before any candidate
    /// is produced, not a per-candidate problem.
    pub fn scan_extensions_dir(&mut self, dir: &Path) -> QuarryResult<()> {
        let entries = fs::read_dir(dir).map_err(|e| {
            QuarryError::Config(format!(
                "Failed to read extensions directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut children: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                QuarryError::Config(format!(
                    "Failed to read entry in extensions directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            children.push(entry.path());
        }
        children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in children {
            if let Some(kind) = classify(&path) {
                self.candidates
                    .push(Candidate::new(path.clone(), path, kind));
            }
        }

        Ok(())
    }

    /// Explore every accumulated candidate and collect resolved descriptors.
    ///
    /// Candidates are processed strictly in accumulation order. A
    /// recoverable scanner failure is logged with the candidate's location
    /// and cause, contributes nothing, and does not stop the run; any other
    /// failure aborts immediately and no partial descriptor list is
    /// returned. The metadata table keeps whatever the candidates that
    /// completed before an abort recorded.
    ///
    /// # Errors
    ///
    /// Propagates the first non-recoverable [`ScanError`].
    pub fn identify(
        &mut self,
        scanner: &dyn StructuralScanner,
    ) -> QuarryResult<Vec<ExtensionDescriptor>> {
        let mut descriptors = Vec::new();

        for candidate in &self.candidates {
            match scanner.explore(candidate, &mut self.table) {
                Ok(Exploration::Resolved(resolved)) => {
                    debug!(
                        candidate = %candidate.location.display(),
                        count = resolved.len(),
                        "candidate resolved extensions"
                    );
                    descriptors.extend(resolved);
                }
                Ok(Exploration::NotAnExtension) => {
                    debug!(
                        candidate = %candidate.location.display(),
                        "candidate is not an extension, skipping"
                    );
                }
                Err(err) if err.is_recoverable() => {
                    warn!(
                        candidate = %candidate.location.display(),
                        cause = %err,
                        "identified a problem with the extension candidate, ignoring this source"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(descriptors)
    }

    /// The accumulated candidates, in accumulation order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The shared metadata table.
    #[must_use]
    pub fn table(&self) -> &MetadataTable {
        &self.table
    }

    /// Consume the discoverer, yielding the candidate list and the table.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Candidate>, MetadataTable) {
        (self.candidates, self.table)
    }
}
