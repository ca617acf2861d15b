//! Runtime configuration with TOML preset support.
//!
//! All sub-structs use `#[serde(default)]`, so a preset only needs the keys
//! it overrides.

mod drag;
mod list;
mod transition;

use std::path::Path;

pub use drag::DragOptions;
pub use list::{ListOptions, DEFAULT_ITEMS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::GlideError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// FLIP and snap-back timing.
    pub transition: TransitionOptions,
    /// Drag gesture behavior.
    pub drag: DragOptions,
    /// Initial items and shuffle seed.
    pub list: ListOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlideError> {
        let content = std::fs::read_to_string(path).map_err(GlideError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, GlideError> {
        toml::from_str(content)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlideError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlideError::Io)?;
        }
        std::fs::write(path, content).map_err(GlideError::Io)
    }
}
