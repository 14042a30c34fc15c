//! Render settings model
//!
//! This module defines the `[settings]` table of a snippet manifest.

use serde::{Deserialize, Serialize};

use crate::snippet::DEFAULT_SEPARATOR;

/// Settings applied when rendering a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Separator placed between rendered snippets
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Treat unresolved placeholders as errors
    #[serde(default)]
    pub strict: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            strict: false,
        }
    }
}
