//! Default structural scanner backed by artifact manifests.
//!
//! Reads an `extension.json` entry from the root of each candidate - a zip
//! entry for archives, a plain file for exploded directories - and turns it
//! into metadata table entries plus resolved descriptors. Nothing from the
//! artifact is ever executed; the scanner only deserializes the manifest.

use std::fs::File;
use std::io::Read;

use quarry_scanner_protocol::manifest::{ExtensionManifest, MANIFEST_ENTRY_NAME};
use quarry_scanner_protocol::{
    ArtifactKind, Candidate, DeclarationKey, Exploration, ExtensionDescriptor, MetadataEntry,
    MetadataTable, ScanError, StructuralScanner,
};
use tracing::debug;

/// Scanner that resolves extensions from `extension.json` manifests.
///
/// Failure classification follows the discovery contract: anything
/// attributable to the artifact itself (unreadable archive, malformed JSON,
/// invalid declaration key) is recoverable and isolated to the candidate,
/// while underlying disk I/O failures abort the run.
#[derive(Debug, Default)]
pub struct ManifestScanner;

impl ManifestScanner {
    /// Read the raw manifest out of the candidate, or `None` when the
    /// artifact carries no manifest entry at all.
    fn read_manifest(&self, candidate: &Candidate) -> Result<Option<String>, ScanError> {
        match candidate.kind {
            ArtifactKind::Directory => {
                let path = candidate.location.join(MANIFEST_ENTRY_NAME);
                match std::fs::read_to_string(&path) {
                    Ok(raw) => Ok(Some(raw)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(ScanError::Io(e)),
                }
            }
            ArtifactKind::Archive => {
                let file = File::open(&candidate.location)?;
                let mut archive = zip::ZipArchive::new(file).map_err(|e| {
                    ScanError::invalid(
                        candidate.location.clone(),
                        format!("unreadable archive: {}", e),
                    )
                })?;

                let mut entry = match archive.by_name(MANIFEST_ENTRY_NAME) {
                    Ok(entry) => entry,
                    Err(zip::result::ZipError::FileNotFound) => return Ok(None),
                    Err(e) => {
                        return Err(ScanError::invalid(
                            candidate.location.clone(),
                            format!("unreadable archive entry: {}", e),
                        ))
                    }
                };

                let mut raw = String::new();
                entry.read_to_string(&mut raw).map_err(|e| {
                    ScanError::invalid(
                        candidate.location.clone(),
                        format!("unreadable manifest entry: {}", e),
                    )
                })?;
                Ok(Some(raw))
            }
        }
    }
}

impl StructuralScanner for ManifestScanner {
    fn key(&self) -> &str {
        "manifest"
    }

    fn explore(
        &self,
        candidate: &Candidate,
        table: &mut MetadataTable,
    ) -> Result<Exploration, ScanError> {
        let Some(raw) = self.read_manifest(candidate)? else {
            debug!(candidate = %candidate.location.display(), "no manifest entry found");
            return Ok(Exploration::NotAnExtension);
        };

        let manifest: ExtensionManifest = serde_json::from_str(&raw).map_err(|e| {
            ScanError::invalid(
                candidate.location.clone(),
                format!("malformed manifest: {}", e),
            )
        })?;

        // Validate the whole manifest before recording anything: a candidate
        // that fails recoverably must contribute nothing to the table.
        let mut records = Vec::with_capacity(manifest.declarations.len());
        for declaration in &manifest.declarations {
            let key = DeclarationKey::new(declaration.key.clone())
                .map_err(|reason| ScanError::invalid(candidate.location.clone(), reason))?;
            records.push((
                key,
                MetadataEntry {
                    owner: declaration.owner.clone(),
                    member: declaration.member.clone(),
                    values: declaration.values.clone(),
                },
            ));
        }
        for (key, entry) in records {
            table.record(key, entry);
        }

        if manifest.extensions.is_empty() {
            debug!(
                candidate = %candidate.location.display(),
                declarations = manifest.declarations.len(),
                "manifest declares no extension entry points"
            );
            return Ok(Exploration::NotAnExtension);
        }

        let descriptors = manifest
            .extensions
            .into_iter()
            .map(|ext| ExtensionDescriptor {
                id: ext.id,
                entry_type: ext.entry_type,
                version: ext.version,
                location: candidate.location.clone(),
                resolved_by: self.key().to_string(),
            })
            .collect();

        Ok(Exploration::Resolved(descriptors))
    }
}
