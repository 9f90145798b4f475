use std::fs;
use std::path::{Path, PathBuf};

use poly_ast::{AstError, Variable};
use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "poly_config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Variable(#[from] AstError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolyConfig {
    /// Variable marker used for parsing and rendering
    pub variable: char,
    /// File whose first line is read when no expression is given
    pub file: PathBuf,
    /// Append the combined polynomial to `file`
    pub append: bool,
}

impl Default for PolyConfig {
    fn default() -> Self {
        Self {
            variable: poly_ast::DEFAULT_VARIABLE.symbol(),
            file: PathBuf::from("polynomial.txt"),
            append: true,
        }
    }
}

impl PolyConfig {
    /// Load `poly_config.toml` if present. A broken file is reported and
    /// defaults are used instead.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PolyConfig = toml::from_str(content)?;
        config.variable()?;
        Ok(config)
    }

    pub fn variable(&self) -> Result<Variable, ConfigError> {
        Ok(Variable::new(self.variable)?)
    }
}
