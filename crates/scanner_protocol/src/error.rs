//! The per-candidate error taxonomy for exploration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors a structural scanner can produce while exploring one candidate.
///
/// [`ScanError::Invalid`] is the only variant the discovery loop swallows
/// (logging a warning and moving on to the next candidate). Every other
/// variant aborts the whole run: a disk error or a broken invariant means
/// the run's results would be unreliable.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The candidate is not a structurally valid extension artifact.
    ///
    /// Recoverable: a malformed archive, an unparseable manifest, a missing
    /// required marker, a version mismatch. Isolated to this candidate.
    #[error("invalid extension artifact {candidate}: {reason}")]
    Invalid { candidate: PathBuf, reason: String },

    /// An underlying I/O failure that is not attributable to the artifact's
    /// structure. Fatal: aborts the discovery run.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A scanner-internal contract violation. Fatal: aborts the run.
    #[error("scanner fault: {0}")]
    Internal(String),
}

impl ScanError {
    /// Convenience constructor for the recoverable variant.
    pub fn invalid(candidate: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }

    /// Whether the discovery loop may skip the candidate and continue.
    ///
    /// Only [`ScanError::Invalid`] is recoverable; anything else terminates
    /// the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_is_recoverable() {
        let invalid = ScanError::invalid("/ext/bad.zip", "truncated central directory");
        assert!(invalid.is_recoverable());

        let io = ScanError::Io(std::io::Error::other("disk gone"));
        assert!(!io.is_recoverable());

        let internal = ScanError::Internal("entry count mismatch".to_string());
        assert!(!internal.is_recoverable());
    }

    #[test]
    fn invalid_message_names_the_candidate() {
        let err = ScanError::invalid("/ext/z.zip", "not a zip file");
        let message = err.to_string();
        assert!(message.contains("z.zip"));
        assert!(message.contains("not a zip file"));
    }
}
