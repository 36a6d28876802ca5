//! Configuration parsing
//!
//! Discovery is configured from `.quarry/discovery.yml` under the workspace
//! root: where the extension directory lives, which host search roots to
//! scan, and which library names to exclude from them.

pub mod discovery;

pub use discovery::{parse_discovery_config, DiscoveryConfig};
