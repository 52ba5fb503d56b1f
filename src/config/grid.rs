use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Exclusive upper bound on cell y coordinates.
    pub max_height: i32,
    /// False configures a replica view that refuses mutating operations.
    pub authoritative: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_height: 256,
            authoritative: true,
        }
    }
}

impl GridConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading grid config from {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing grid config from {}", path.display()))?;
        Ok(config)
    }
}
