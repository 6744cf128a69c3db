//! Generator configuration
//!
//! A `provider-gen.toml` next to the working directory can override where
//! schemas and templates are read from and where output lands. Every key is
//! optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::functions::DEFAULT_MAX_NESTING_DEPTH;
use crate::error::Error;

/// File name looked up when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "provider-gen.toml";

/// Generator configuration loaded from `provider-gen.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Provider name used in generated identifiers and example paths
    pub provider: String,
    /// Directory holding one YAML schema per generation unit
    pub definitions_dir: PathBuf,
    /// Directory holding the template set
    pub templates_dir: PathBuf,
    /// Root every output path is resolved against
    pub output_dir: PathBuf,
    /// Document embedded verbatim into the changelog guide
    pub changelog: PathBuf,
    /// Deepest composite attribute templates may render
    pub max_nesting_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: "provider".to_string(),
            definitions_dir: PathBuf::from("gen/definitions"),
            templates_dir: PathBuf::from("gen/templates"),
            output_dir: PathBuf::from("."),
            changelog: PathBuf::from("CHANGELOG.md"),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Resolve every relative input path against `root`.
    ///
    /// Used when the config file lives somewhere other than the working
    /// directory: paths inside it are relative to the file.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { root.join(p) } else { p };
        self.definitions_dir = join(self.definitions_dir);
        self.templates_dir = join(self.templates_dir);
        self.output_dir = join(self.output_dir);
        self.changelog = join(self.changelog);
        self
    }
}

/// Load the generator configuration from a TOML file
///
/// # Returns
///
/// Returns `Ok(Some(config))` if the file exists and parses successfully,
/// `Ok(None)` if it doesn't exist (not an error),
/// `Err` if it exists but cannot be read or parsed.
pub fn load_generator_config(config_path: &Path) -> Result<Option<GeneratorConfig>, Error> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents =
        std::fs::read_to_string(config_path).map_err(|e| Error::fs("read", config_path, e))?;
    let config: GeneratorConfig = toml::from_str(&contents).map_err(|source| Error::Config {
        path: config_path.to_path_buf(),
        source,
    })?;

    Ok(Some(config))
}

/// Resolve the config file path
///
/// Priority:
/// 1. Explicitly provided path (via CLI), which must exist
/// 2. `provider-gen.toml` in the working directory
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default.exists() {
        Some(default)
    } else {
        None
    }
}
