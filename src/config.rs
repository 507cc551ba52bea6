//! YAML configuration for the CLI.
//!
//! ```yaml
//! color: auto      # auto | always | never
//! symbols: never   # auto | always | never
//! max_items: 3
//! ```
//!
//! Every key is optional. Command-line flags override what the file says.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::diagnostics::ClarionError;
use crate::options::{Mode, RenderOptions, TerminalCaps, DEFAULT_MAX_ITEMS};

/// File looked up in the working directory by [`ClarionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "clarion.yaml";

fn default_max_items() -> NonZeroUsize {
    DEFAULT_MAX_ITEMS
}

/// Rendering preferences before terminal capabilities are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClarionConfig {
    #[serde(default)]
    pub color: Mode,
    #[serde(default)]
    pub symbols: Mode,
    #[serde(default = "default_max_items")]
    pub max_items: NonZeroUsize,
}

impl Default for ClarionConfig {
    fn default() -> Self {
        Self {
            color: Mode::Auto,
            symbols: Mode::Auto,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl ClarionConfig {
    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClarionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ClarionError::io(path, e))?;
        let config = Self::from_yaml(&content).map_err(|e| ClarionError::config(path, e))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parses config text. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Loads `clarion.yaml` from `dir` when it exists, defaults otherwise.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ClarionError> {
        let candidate: PathBuf = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.as_ref().display());
            Ok(Self::default())
        }
    }

    pub fn resolve(&self, caps: &TerminalCaps) -> RenderOptions {
        RenderOptions::resolve(self.color, self.symbols, self.max_items, caps)
    }
}
