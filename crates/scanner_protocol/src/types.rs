//! Core types for the Quarry scanner protocol.
//!
//! This module contains the fundamental data structures exchanged between the
//! discovery core and scanner implementations:
//! - [`ArtifactKind`] - How a candidate artifact is laid out on disk
//! - [`Candidate`] - A classified, immutable reference to one artifact
//! - [`ExtensionDescriptor`] - A resolved extension entry point
//! - [`DeclarationKey`] - Type-safe identifier for a declaration kind

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a candidate artifact is laid out on the filesystem.
///
/// The kind is decided once, at classification time, from nothing but a
/// file-vs-directory test and the entry name. It never changes afterwards
/// and scanners may rely on it when choosing how to open the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// An exploded artifact: compiled units live directly under a directory.
    Directory,
    /// A packed artifact: a `.zip` or `.jar` file.
    Archive,
}

impl ArtifactKind {
    /// Returns whether artifacts of this kind must be opened as an archive.
    #[must_use]
    pub const fn is_archive(&self) -> bool {
        matches!(self, Self::Archive)
    }

    /// Returns a human-readable description of this artifact kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Directory => "exploded directory artifact",
            Self::Archive => "zip or jar archive artifact",
        }
    }
}

/// A classified reference to one artifact that may contain extensions.
///
/// Candidates are created during root or extension-directory scanning and
/// consumed exactly once by the exploration step of the same run. They are
/// immutable after construction.
///
/// **Primary sources**: candidates found on the host runtime's own search
/// path are marked `primary_source = true`, distinguishing them from entries
/// found in the dedicated extension directory. The loader may treat primary
/// sources differently (the host's own packaged code can itself carry
/// extensions), but discovery handles both identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Absolute path to the artifact (a directory or an archive file).
    pub location: PathBuf,

    /// The search-path entry this candidate was found under.
    ///
    /// Equals `location` when the entry itself is the artifact, which is the
    /// case for every candidate produced by the current scanning steps.
    pub origin_root: PathBuf,

    /// Layout of the artifact, decided at classification time.
    pub kind: ArtifactKind,

    /// True when the candidate came from a host search root rather than the
    /// dedicated extension directory.
    pub primary_source: bool,
}

impl Candidate {
    /// Create a candidate found in the dedicated extension directory.
    #[must_use]
    pub fn new(location: PathBuf, origin_root: PathBuf, kind: ArtifactKind) -> Self {
        Self {
            location,
            origin_root,
            kind,
            primary_source: false,
        }
    }

    /// Create a candidate found on the host runtime's own search path.
    #[must_use]
    pub fn primary(location: PathBuf, origin_root: PathBuf, kind: ArtifactKind) -> Self {
        Self {
            location,
            origin_root,
            kind,
            primary_source: true,
        }
    }

    /// The artifact's file name, for diagnostics.
    ///
    /// Falls back to the full path rendering when the location has no final
    /// component (e.g. a filesystem root).
    #[must_use]
    pub fn file_name(&self) -> String {
        self.location
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.location.display().to_string())
    }
}

/// A resolved extension entry point produced by a successful exploration.
///
/// The discovery core treats descriptors as opaque: only their count and
/// ordering matter to it. The downstream loader uses the fields to construct
/// and activate the extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    /// Stable identifier of the extension, unique within one artifact.
    pub id: String,

    /// Fully qualified name of the compiled type carrying the entry marker.
    pub entry_type: String,

    /// Declared version, if the artifact states one.
    pub version: Option<String>,

    /// The artifact this descriptor was resolved from.
    pub location: PathBuf,

    /// Key of the scanner that resolved this descriptor.
    ///
    /// Matches the value returned by [`StructuralScanner::key`].
    ///
    /// [`StructuralScanner::key`]: crate::traits::StructuralScanner::key
    pub resolved_by: String,
}

/// Type-safe identifier for a kind of structural declaration.
///
/// A declaration key names a marker/annotation type that compiled code can
/// carry (for example an entry-point marker or a capability registration).
/// Keys group entries in the [`MetadataTable`] and must therefore be stable
/// and unambiguous.
///
/// **Requirements**:
/// - Non-empty
/// - No whitespace characters
///
/// **Example**:
/// ```rust
/// # use quarry_scanner_protocol::DeclarationKey;
/// let key = DeclarationKey::new("quarry.Extension").unwrap();
/// assert_eq!(key.as_str(), "quarry.Extension");
///
/// assert!(DeclarationKey::new("").is_err());
/// assert!(DeclarationKey::new("has space").is_err());
/// ```
///
/// [`MetadataTable`]: crate::table::MetadataTable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclarationKey(String);

impl DeclarationKey {
    /// Create a new `DeclarationKey` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.is_empty() {
            return Err("Declaration key cannot be empty".to_string());
        }
        if key.chars().any(char::is_whitespace) {
            return Err(format!(
                "Declaration key '{}' contains whitespace characters",
                key
            ));
        }
        Ok(Self(key))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeclarationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeclarationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
