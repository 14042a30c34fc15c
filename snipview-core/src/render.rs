//! Renderer seam for snippet templates
//!
//! `SnippetHelper` never interprets templates itself. It hands a template
//! identifier and the snippet's values to a [`Renderer`] supplied by the host
//! and returns whatever comes back.
//!
//! Two implementations ship with the crate:
//!
//! - [`FnRenderer`] wraps a closure, for hosts that already have a render
//!   function at hand.
//! - [`PlaceholderRenderer`] resolves template identifiers against an
//!   in-memory table and substitutes `${name}` placeholders. It is the
//!   adapter used by the command-line host.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{TemplateError, TemplateResult};
use crate::models::SnippetValues;

/// Matches `${name}` where `name` is alphanumeric with underscores
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("Invalid regex pattern")
});

/// Renders a template with a set of values
pub trait Renderer {
    /// Error reported by this renderer
    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders `template` with `values`
    ///
    /// # Errors
    ///
    /// Returns the renderer's own error if the template cannot be rendered.
    fn render(&self, template: &str, values: &SnippetValues) -> Result<String, Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    type Error = R::Error;

    fn render(&self, template: &str, values: &SnippetValues) -> Result<String, Self::Error> {
        (**self).render(template, values)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    type Error = R::Error;

    fn render(&self, template: &str, values: &SnippetValues) -> Result<String, Self::Error> {
        (**self).render(template, values)
    }
}

/// A renderer backed by a closure
///
/// Useful for plugging a host's existing render function into a
/// `SnippetHelper` without a dedicated type.
pub struct FnRenderer<F> {
    render_fn: F,
}

impl<F, E> FnRenderer<F>
where
    F: Fn(&str, &SnippetValues) -> Result<String, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    /// Creates a new closure-backed renderer.
    ///
    /// # Arguments
    ///
    /// * `render_fn` - Function called with the template identifier and values
    #[must_use]
    pub const fn new(render_fn: F) -> Self {
        Self { render_fn }
    }
}

impl<F> fmt::Debug for FnRenderer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRenderer").finish_non_exhaustive()
    }
}

impl<F, E> Renderer for FnRenderer<F>
where
    F: Fn(&str, &SnippetValues) -> Result<String, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn render(&self, template: &str, values: &SnippetValues) -> Result<String, E> {
        (self.render_fn)(template, values)
    }
}

/// Renders templates held in memory by substituting `${name}` placeholders
///
/// String values are inserted verbatim, `null` as an empty string and any
/// other JSON value as its JSON text. Output is not escaped.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderer {
    templates: HashMap<String, String>,
    strict: bool,
}

impl PlaceholderRenderer {
    /// Creates an empty, non-strict renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer from `(identifier, text)` pairs
    #[must_use]
    pub fn from_templates<I, K, V>(templates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            strict: false,
        }
    }

    /// Adds a template to this renderer
    #[must_use]
    pub fn with_template(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_template(id, text);
        self
    }

    /// Sets strict mode
    ///
    /// In strict mode an unresolved placeholder is an error; otherwise it is
    /// left in the output untouched.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if unresolved placeholders are errors
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Inserts or replaces a template, returning the previous text
    pub fn insert_template(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.templates.insert(id.into(), text.into())
    }

    /// Returns true if a template is registered under `id`
    #[must_use]
    pub fn contains_template(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Returns the number of registered templates
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Extracts all unique placeholder names from a template text, sorted
    #[must_use]
    pub fn extract_placeholders(text: &str) -> Vec<String> {
        let names: BTreeSet<String> = PLACEHOLDER_RE
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();

        names.into_iter().collect()
    }

    /// Substitutes placeholders in `text` with `values`
    ///
    /// Placeholders without a value are left unchanged.
    #[must_use]
    pub fn substitute(text: &str, values: &SnippetValues) -> String {
        PLACEHOLDER_RE
            .replace_all(text, |caps: &regex::Captures| {
                let name = caps.get(1).map_or("", |m| m.as_str());
                values
                    .get(name)
                    .map_or_else(|| caps[0].to_string(), value_to_text)
            })
            .into_owned()
    }
}

impl Renderer for PlaceholderRenderer {
    type Error = TemplateError;

    fn render(&self, template: &str, values: &SnippetValues) -> TemplateResult<String> {
        let text = self
            .templates
            .get(template)
            .ok_or_else(|| TemplateError::NotFound(template.to_string()))?;

        if self.strict {
            if let Some(name) = Self::extract_placeholders(text)
                .into_iter()
                .find(|name| !values.contains_key(name))
            {
                return Err(TemplateError::MissingValue {
                    template: template.to_string(),
                    name,
                });
            }
        }

        Ok(Self::substitute(text, values))
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
