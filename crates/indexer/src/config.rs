use crate::error::Result;
use crate::scanner::ScanOptions;
use repoqa_code_chunker::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a repository run needs, built once and passed in explicitly.
///
/// Every field has a default, so a TOML document only has to name the
/// values it overrides:
///
/// ```toml
/// [scan]
/// excluded_dirs = ["node_modules", ".git", "target"]
///
/// [chunker]
/// max_chunk_chars = 4000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Which files are selected
    pub scan: ScanOptions,

    /// How selected files are split
    pub chunker: ChunkerConfig,
}

impl IndexerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.chunker.validate()?;
        Ok(())
    }
}
