use quarry_scanner_protocol::ScanError;
use thiserror::Error;

/// The main error type for Quarry operations
#[derive(Debug, Error)]
pub enum QuarryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discovery error: {0}")]
    Discovery(String),

    /// A fatal scanner failure that aborted the run. Recoverable scanner
    /// failures never surface here; the discovery loop swallows and logs
    /// them per candidate.
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
}

/// Result type alias for Quarry operations
pub type QuarryResult<T> = Result<T, QuarryError>;
