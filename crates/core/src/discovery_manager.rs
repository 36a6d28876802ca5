//! High-level discovery interface
//!
//! This module provides the [`DiscoveryManager`] which serves as the primary
//! entry point for running discovery. It encapsulates configuration loading,
//! candidate accumulation from both sources, and exploration with a scanner.
//!
//! The DiscoveryManager abstracts away:
//! - Loading `.quarry/discovery.yml` and applying defaults
//! - Building the host source description and the extensions directory path
//! - Driving the discoverer and assembling the run's outcome
//!
//! ## Example
//!
//! ```rust,no_run
//! use quarry_core::discovery_manager::{DiscoveryManager, DiscoveryManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> quarry_core::types::QuarryResult<()> {
//! let manager = DiscoveryManager::new(DiscoveryManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! let outcome = manager.discover()?;
//! for descriptor in &outcome.descriptors {
//!     println!("{} ({})", descriptor.id, descriptor.entry_type);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use quarry_scanner_protocol::StructuralScanner;

use crate::configs::{parse_discovery_config, DiscoveryConfig};
use crate::discoverer::{Discoverer, HostSources};
use crate::manifest_scanner::ManifestScanner;
use crate::results::{CandidateInfo, DiscoveryOutcome};
use crate::types::{QuarryError, QuarryResult};

/// Default extensions directory, relative to the workspace root.
const DEFAULT_EXTENSIONS_DIR: &str = "extensions";

/// High-level discovery manager that encapsulates one workspace's discovery setup
pub struct DiscoveryManager {
    pub workspace_root: PathBuf,
    pub config: DiscoveryConfig,
}

/// Configuration for initializing a discovery manager
pub struct DiscoveryManagerConfig {
    pub workspace_root: PathBuf,
}

impl DiscoveryManager {
    /// Initialize a new discovery manager from the given workspace root.
    ///
    /// A missing config file is not an error - defaults apply. A present but
    /// unparseable config file is.
    pub fn new(config: DiscoveryManagerConfig) -> QuarryResult<Self> {
        let discovery_config = Self::load_discovery_config(&config.workspace_root)?;

        Ok(Self {
            workspace_root: config.workspace_root,
            config: discovery_config,
        })
    }

    /// Run full discovery with the default manifest scanner.
    pub fn discover(&self) -> QuarryResult<DiscoveryOutcome> {
        self.discover_with(&ManifestScanner)
    }

    /// Run full discovery with the given scanner.
    pub fn discover_with(&self, scanner: &dyn StructuralScanner) -> QuarryResult<DiscoveryOutcome> {
        let mut discoverer = self.populate()?;
        let descriptors = discoverer.identify(scanner)?;

        let (candidates, table) = discoverer.into_parts();
        Ok(DiscoveryOutcome {
            descriptors,
            candidates: candidates.iter().map(CandidateInfo::from).collect(),
            table,
        })
    }

    /// Classify candidates from both sources without exploring any of them.
    pub fn list_candidates(&self) -> QuarryResult<Vec<CandidateInfo>> {
        let discoverer = self.populate()?;
        Ok(discoverer.candidates().iter().map(CandidateInfo::from).collect())
    }

    /// The extensions directory this workspace scans.
    #[must_use]
    pub fn extensions_dir(&self) -> PathBuf {
        let dir = self
            .config
            .extensions_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXTENSIONS_DIR));
        if dir.is_absolute() {
            dir
        } else {
            self.workspace_root.join(dir)
        }
    }

    // Private helper methods

    fn load_discovery_config(workspace_root: &Path) -> QuarryResult<DiscoveryConfig> {
        let config_path = workspace_root.join(".quarry").join("discovery.yml");
        if !config_path.exists() {
            return Ok(DiscoveryConfig::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            QuarryError::Config(format!(
                "Failed to read discovery config {}: {}",
                config_path.display(),
                e
            ))
        })?;

        parse_discovery_config(&content).map_err(|e| {
            QuarryError::Config(format!(
                "Failed to parse discovery config {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    fn host_sources(&self) -> HostSources {
        let entries = self
            .config
            .search_roots
            .as_ref()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|root| {
                if root.is_absolute() {
                    root
                } else {
                    self.workspace_root.join(root)
                }
            })
            .collect();

        HostSources {
            entries,
            known_libraries: self.config.known_libraries.clone().unwrap_or_default(),
        }
    }

    fn populate(&self) -> QuarryResult<Discoverer> {
        let extra_known = self
            .config
            .extra_known_libraries
            .clone()
            .unwrap_or_default();

        let mut discoverer = Discoverer::new();
        discoverer.scan_search_roots(&self.host_sources(), &extra_known);

        // The default directory is optional; a directory the user pointed at
        // explicitly must exist.
        let extensions_dir = self.extensions_dir();
        if self.config.extensions_dir.is_some() || extensions_dir.is_dir() {
            discoverer.scan_extensions_dir(&extensions_dir)?;
        }

        Ok(discoverer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_scanner_protocol::ArtifactKind;

    fn manager_for(root: &Path) -> DiscoveryManager {
        DiscoveryManager::new(DiscoveryManagerConfig {
            workspace_root: root.to_path_buf(),
        })
        .unwrap()
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = manager_for(temp_dir.path());

        assert_eq!(
            manager.extensions_dir(),
            temp_dir.path().join(DEFAULT_EXTENSIONS_DIR)
        );
        assert!(
            manager.list_candidates().unwrap().is_empty(),
            "no sources configured and no extensions directory present"
        );
    }

    #[test]
    fn unparseable_config_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(".quarry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("discovery.yml"), "extensionsDir: [oops").unwrap();

        let result = DiscoveryManager::new(DiscoveryManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
        });
        assert!(matches!(result, Err(QuarryError::Config(_))));
    }

    #[test]
    fn configured_but_missing_extensions_dir_fails_the_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(".quarry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("discovery.yml"), "extensionsDir: mods\n").unwrap();

        let manager = manager_for(temp_dir.path());
        assert!(matches!(
            manager.list_candidates(),
            Err(QuarryError::Config(_))
        ));
    }

    #[test]
    fn end_to_end_discovery_with_manifest_artifacts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let extensions = temp_dir.path().join(DEFAULT_EXTENSIONS_DIR);
        std::fs::create_dir_all(&extensions).unwrap();

        // One valid exploded extension, one file to ignore.
        let exploded = extensions.join("frob");
        std::fs::create_dir(&exploded).unwrap();
        std::fs::write(
            exploded.join("extension.json"),
            r#"{
                "extensions": [ { "id": "frob", "entryType": "frob.Main" } ],
                "declarations": [ { "key": "quarry.Extension", "owner": "frob.Main" } ]
            }"#,
        )
        .unwrap();
        std::fs::write(extensions.join("notes.txt"), b"ignored").unwrap();

        let manager = manager_for(temp_dir.path());
        let outcome = manager.discover().unwrap();

        assert_eq!(outcome.candidates.len(), 1);
        assert_eq!(outcome.candidates[0].kind, ArtifactKind::Directory);
        assert_eq!(outcome.descriptors.len(), 1);
        assert_eq!(outcome.descriptors[0].id, "frob");
        assert_eq!(outcome.table.len(), 1);
    }

    #[test]
    fn search_roots_resolve_relative_to_the_workspace() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join(".quarry");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("discovery.yml"),
            "searchRoots:\n  - host/app.jar\nknownLibraries: []\n",
        )
        .unwrap();
        let host_dir = temp_dir.path().join("host");
        std::fs::create_dir_all(&host_dir).unwrap();
        std::fs::write(host_dir.join("app.jar"), b"bytes").unwrap();

        let manager = manager_for(temp_dir.path());
        let candidates = manager.list_candidates().unwrap();

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].primary_source);
        assert_eq!(candidates[0].location, host_dir.join("app.jar"));
    }
}
