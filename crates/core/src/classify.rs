//! Artifact classification.
//!
//! A single filesystem entry classifies as a directory candidate, an archive
//! candidate, or nothing. Classification touches no file contents: it is a
//! function of the file-vs-directory state and the entry name, and archives
//! are never opened at this stage.

use std::path::Path;

use quarry_scanner_protocol::ArtifactKind;
use tracing::debug;

/// Suffixes accepted for archive candidates.
///
/// The match is a literal, case-sensitive suffix test: `B.JAR` does not
/// classify.
const ARCHIVE_SUFFIXES: &[&str] = &[".zip", ".jar"];

/// Whether a file name carries an accepted archive suffix.
#[must_use]
pub fn is_archive_name(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Classify one filesystem entry.
///
/// Directories always classify as [`ArtifactKind::Directory`]. Files
/// classify as [`ArtifactKind::Archive`] only when their name passes
/// [`is_archive_name`]; any other file yields `None`. One diagnostic event
/// is emitted per decision.
#[must_use]
pub fn classify(path: &Path) -> Option<ArtifactKind> {
    if path.is_dir() {
        debug!(path = %path.display(), "found a candidate extension directory");
        return Some(ArtifactKind::Directory);
    }

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if path.is_file() && is_archive_name(name) {
        debug!(path = %path.display(), "found a candidate zip or jar file");
        Some(ArtifactKind::Archive)
    } else {
        debug!(path = %path.display(), "ignoring unknown file");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_suffix_match_is_case_sensitive() {
        assert!(is_archive_name("a.jar"));
        assert!(is_archive_name("a.zip"));
        assert!(is_archive_name("nested.name.jar"));
        // Exact-case contract: upper-case suffixes are not archives.
        assert!(!is_archive_name("B.JAR"));
        assert!(!is_archive_name("b.Zip"));
        assert!(!is_archive_name("mid.txt"));
        assert!(!is_archive_name("jar"));
        assert!(!is_archive_name(""));
    }

    #[test]
    fn directories_always_classify_as_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub = temp_dir.path().join("anything.txt");
        std::fs::create_dir(&sub).unwrap();

        assert_eq!(classify(&sub), Some(ArtifactKind::Directory));
    }

    #[test]
    fn files_classify_by_suffix_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let jar = temp_dir.path().join("ext.jar");
        let upper = temp_dir.path().join("EXT.JAR");
        let text = temp_dir.path().join("readme.txt");
        for path in [&jar, &upper, &text] {
            std::fs::write(path, b"content").unwrap();
        }

        assert_eq!(classify(&jar), Some(ArtifactKind::Archive));
        assert_eq!(classify(&upper), None);
        assert_eq!(classify(&text), None);
    }

    #[test]
    fn missing_entries_classify_as_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert_eq!(classify(&temp_dir.path().join("gone.jar")), None);
    }
}
