//! Parser options loaded from `inrush.toml`.
//!
//! ```toml
//! [parser]
//! branch_nodes = true
//! relational_conditions = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "inrush.toml";

/// Grammar extensions. Everything is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Wrap IF bodies in `THEN_STATEMENT` / `ELSE_STATEMENT` nodes instead of
    /// attaching the statements directly to the `IF_STATEMENT`.
    pub branch_nodes: bool,
    /// Accept `IF name <relop> operand THEN` conditions.
    pub relational_conditions: bool,
}

/// Errors raised while reading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    parser: ParseConfig,
}

impl ParseConfig {
    /// Parses the `[parser]` table of a config file. A missing table yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML and on unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.parser)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Returns `dir/inrush.toml` if it exists.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}
