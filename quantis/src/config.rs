//! Project configuration
//!
//! Loaded from `quantis.toml` (or `.quantis.toml`, `quantis.json`):
//!
//! ```toml
//! precision = 8
//!
//! [[unit]]
//! name = "slug"
//! formula = "32.174_049 * lb"
//!
//! [[unit]]
//! name = "lbf_derived"
//! formula = "ft * slug / s^2"
//! ```
//!
//! Units are defined in order, so a formula may use any unit declared above it.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::eval::{EvalError, Evaluator, SymbolTable};

/// File names searched by [`UnitsConfig::find_config`], in order
pub const CONFIG_FILES: [&str; 3] = ["quantis.toml", ".quantis.toml", "quantis.json"];

/// A named unit defined by a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    pub formula: String,
}

/// Configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsConfig {
    /// Extra units, evaluated in order
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitDefinition>,

    /// Significant digits printed by the CLI
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    10
}

impl Default for UnitsConfig {
    fn default() -> Self {
        UnitsConfig {
            units: Vec::new(),
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read `{}`", .path.display())]
    #[diagnostic(code(U0201))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse `{}`: {message}", .path.display())]
    #[diagnostic(code(U0202))]
    Parse { path: PathBuf, message: String },

    #[error("unknown config file format `{}`", .path.display())]
    #[diagnostic(code(U0203), help("use a `.toml` or `.json` file"))]
    UnknownFormat { path: PathBuf },

    #[error("`{name}` is not a valid unit name")]
    #[diagnostic(
        code(U0204),
        help("unit names consist of ASCII letters and underscores so formulas can refer to them")
    )]
    InvalidName { name: String },

    #[error("cannot define unit `{name}`")]
    #[diagnostic(code(U0205))]
    Definition {
        name: String,
        #[source]
        #[diagnostic_source]
        source: EvalError,
    },
}

impl UnitsConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };
        let config: UnitsConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            _ => {
                return Err(ConfigError::UnknownFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        debug!(
            path = %path.display(),
            units = config.units.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Find a config file in `start` or any of its ancestors
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        let mut dir = if start.is_file() {
            start.parent()?.to_path_buf()
        } else {
            start.to_path_buf()
        };

        loop {
            for name in CONFIG_FILES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// The default symbol table extended with the configured units
    pub fn symbol_table(&self) -> Result<SymbolTable, ConfigError> {
        let mut table = SymbolTable::defaults().clone();
        for definition in &self.units {
            let name = definition.name.as_str();
            if !is_valid_unit_name(name) {
                return Err(ConfigError::InvalidName {
                    name: name.to_string(),
                });
            }
            let unit = Evaluator::new(&table)
                .eval_unit(&definition.formula)
                .map_err(|source| ConfigError::Definition {
                    name: name.to_string(),
                    source,
                })?;
            debug!(name, %unit, "defined unit");
            table.define(name, unit);
        }
        Ok(table)
    }
}

/// Unit names are what the lexer reads as one identifier: ASCII letters and `_`
pub fn is_valid_unit_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}
