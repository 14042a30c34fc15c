//! Snippet manifest model
//!
//! A manifest lists the templates known to the placeholder renderer and the
//! snippets to register, in the order they are appended.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::settings::RenderSettings;
use crate::models::{Snippet, SnippetValues};
use crate::render::PlaceholderRenderer;

/// Contents of a snippet manifest file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetManifest {
    /// Render settings
    #[serde(default)]
    pub settings: RenderSettings,
    /// Template texts indexed by template identifier
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
    /// Snippets in append order
    #[serde(default)]
    pub snippets: Vec<SnippetEntry>,
}

impl SnippetManifest {
    /// Builds a placeholder renderer over this manifest's templates
    #[must_use]
    pub fn placeholder_renderer(&self) -> PlaceholderRenderer {
        PlaceholderRenderer::from_templates(
            self.templates
                .iter()
                .map(|(id, text)| (id.clone(), text.clone())),
        )
        .strict(self.settings.strict)
    }

    /// Finds a snippet entry by name
    ///
    /// If the name appears more than once, the last entry wins, matching what
    /// a helper built from this manifest holds.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&SnippetEntry> {
        self.snippets.iter().rev().find(|e| e.name == name)
    }
}

/// A named snippet in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Name the snippet is registered under
    pub name: String,
    /// Template identifier
    pub template: String,
    /// Placement tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    /// Whether the snippet starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Values passed to the renderer
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub values: SnippetValues,
}

const fn default_enabled() -> bool {
    true
}

impl SnippetEntry {
    /// Creates an enabled entry with no values and the default placement
    #[must_use]
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            placement: None,
            enabled: true,
            values: SnippetValues::new(),
        }
    }

    /// Sets the placement tag
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Adds a single value
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Marks the entry as initially disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Returns the snippet definition described by this entry
    #[must_use]
    pub fn to_snippet(&self) -> Snippet {
        Snippet {
            template: self.template.clone(),
            values: self.values.clone(),
            placement: self.placement.clone(),
        }
    }
}
