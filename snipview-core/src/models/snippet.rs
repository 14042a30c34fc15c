//! Snippet model for placement-aware view fragments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Values passed to the renderer alongside a snippet's template
pub type SnippetValues = Map<String, Value>;

/// A template-backed view fragment
///
/// The snippet's name is not part of the definition; it is the key under
/// which the definition is registered in a `SnippetHelper`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Template identifier, resolved by the renderer
    pub template: String,
    /// Values passed to the renderer
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub values: SnippetValues,
    /// Placement tag; `None` is the default placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

impl Snippet {
    /// Creates a snippet for the given template with no values and the
    /// default placement
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            values: SnippetValues::new(),
            placement: None,
        }
    }

    /// Replaces the values of this snippet
    #[must_use]
    pub fn with_values(mut self, values: SnippetValues) -> Self {
        self.values = values;
        self
    }

    /// Adds a single value to this snippet
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Sets the placement tag of this snippet
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<String>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Returns the placement tag, if any
    #[must_use]
    pub fn placement(&self) -> Option<&str> {
        self.placement.as_deref()
    }

    /// Returns true if this snippet belongs to `placement`
    ///
    /// Matching is exact: `None` only matches snippets without a placement.
    #[must_use]
    pub fn is_placed_at(&self, placement: Option<&str>) -> bool {
        self.placement() == placement
    }
}
