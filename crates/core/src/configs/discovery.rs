use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::QuarryResult;

#[derive(Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiscoveryConfig {
    pub name: Option<String>,
    /// Directory holding extension artifacts, relative to the workspace
    /// root unless absolute. Defaults to `extensions`.
    pub extensions_dir: Option<PathBuf>,
    /// The host runtime's own search-path entries, in load order.
    pub search_roots: Option<Vec<PathBuf>>,
    /// File names on the search path that belong to the host itself.
    pub known_libraries: Option<Vec<String>>,
    /// Additional known-library names merged on top of the defaults.
    pub extra_known_libraries: Option<Vec<String>>,
}

pub fn parse_discovery_config(yaml_str: &str) -> QuarryResult<DiscoveryConfig> {
    let config: DiscoveryConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}
