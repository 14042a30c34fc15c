//! Snippet helper for placement-aware rendering
//!
//! This module provides the `SnippetHelper` which registers snippets under a
//! name, tracks whether each one is enabled and joins the rendered output of
//! the enabled snippets of one placement.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::SnippetManifest;
use crate::error::{SnippetError, SnippetResult};
use crate::models::Snippet;
use crate::render::Renderer;

/// Separator placed between rendered snippets
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Registry of named snippets for one rendering pass
///
/// The helper owns its renderer (which may be a reference, see
/// [`Renderer`]) and is meant to be built fresh for each page or response.
///
/// Rendering walks snippets in enabling order: the order in which a name
/// first received an enabled flag. Re-appending or re-flagging a snippet
/// keeps its position.
#[derive(Debug)]
pub struct SnippetHelper<R> {
    /// Renderer used for every snippet
    renderer: R,
    /// Snippet definitions indexed by name
    snippets: HashMap<String, Snippet>,
    /// Enabled flags indexed by name
    enabled: HashMap<String, bool>,
    /// Names in the order they first received a flag
    order: Vec<String>,
    /// Separator between rendered snippets
    separator: String,
}

impl<R: Renderer> SnippetHelper<R> {
    /// Creates an empty helper rendering through `renderer`
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            snippets: HashMap::new(),
            enabled: HashMap::new(),
            order: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Creates a helper holding every snippet of `manifest`
    ///
    /// Entries are appended in file order with their `enabled` flag, and the
    /// manifest's separator replaces the default one.
    #[must_use]
    pub fn from_manifest(renderer: R, manifest: &SnippetManifest) -> Self {
        let mut helper = Self::new(renderer).with_separator(manifest.settings.separator.clone());
        for entry in &manifest.snippets {
            helper.append_snippet(entry.name.clone(), entry.to_snippet(), entry.enabled);
        }
        helper
    }

    /// Sets the separator placed between rendered snippets
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Returns the separator placed between rendered snippets
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the renderer
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the helper itself
    ///
    /// Lets a host hand the helper out and configure it in one chain:
    /// `helper.invoke().append(...)`.
    pub fn invoke(&mut self) -> &mut Self {
        self
    }

    // ========== Registration ==========

    /// Registers `snippet` under `name` and sets its enabled flag
    ///
    /// An existing snippet with the same name is replaced.
    pub fn append_snippet(
        &mut self,
        name: impl Into<String>,
        snippet: Snippet,
        enable: bool,
    ) -> &mut Self {
        let name = name.into();
        debug!(
            snippet = %name,
            template = %snippet.template,
            placement = ?snippet.placement,
            enable,
            "Appending snippet"
        );

        if self.snippets.insert(name.clone(), snippet).is_some() {
            debug!(snippet = %name, "Replaced existing snippet definition");
        }
        self.flag(name, enable);
        self
    }

    /// Registers `snippet` under `name`, enabled
    pub fn append(&mut self, name: impl Into<String>, snippet: Snippet) -> &mut Self {
        self.append_snippet(name, snippet, true)
    }

    /// Sets the enabled flag of a registered snippet
    ///
    /// # Errors
    ///
    /// Returns `SnippetError::NotFound` if no snippet was appended under `name`.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> SnippetResult<&mut Self, R::Error> {
        if !self.snippets.contains_key(name) {
            return Err(SnippetError::NotFound(name.to_string()));
        }

        debug!(snippet = %name, enabled, "Setting snippet flag");
        self.flag(name.to_string(), enabled);
        Ok(self)
    }

    /// Sets the enabled flag of every registered snippet to `enabled`
    pub fn set_enable_all(&mut self, enabled: bool) -> &mut Self {
        debug!(count = self.order.len(), enabled, "Setting all snippet flags");
        for flag in self.enabled.values_mut() {
            *flag = enabled;
        }
        self
    }

    /// Records a flag, keeping the name's position if it already has one
    fn flag(&mut self, name: String, enabled: bool) {
        if let Some(flag) = self.enabled.get_mut(&name) {
            *flag = enabled;
        } else {
            self.enabled.insert(name.clone(), enabled);
            self.order.push(name);
        }
    }

    // ========== Queries ==========

    /// Returns true if a snippet is registered under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.snippets.contains_key(name)
    }

    /// Returns true if `name` is registered and enabled
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.get(name).copied().unwrap_or(false)
    }

    /// Gets a snippet definition by name
    #[must_use]
    pub fn snippet(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name)
    }

    /// Lists snippet names in enabling order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Lists the distinct placements in enabling order
    ///
    /// `None` stands for the default placement.
    #[must_use]
    pub fn placements(&self) -> Vec<Option<&str>> {
        let mut placements: Vec<Option<&str>> = Vec::new();
        for snippet in self.order.iter().filter_map(|name| self.snippets.get(name)) {
            if !placements.contains(&snippet.placement()) {
                placements.push(snippet.placement());
            }
        }
        placements
    }

    /// Returns the number of registered snippets
    #[must_use]
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Returns true if no snippet is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    // ========== Rendering ==========

    /// Renders a single snippet, enabled or not
    ///
    /// # Errors
    ///
    /// Returns `SnippetError::NotFound` if no snippet was appended under
    /// `name`, or `SnippetError::Render` if the renderer fails.
    pub fn render_snippet(&self, name: &str) -> SnippetResult<String, R::Error> {
        let snippet = self
            .snippets
            .get(name)
            .ok_or_else(|| SnippetError::NotFound(name.to_string()))?;

        self.render_definition(name, snippet)
    }

    /// Renders every enabled snippet of `placement`, joined by the separator
    ///
    /// `None` selects the snippets without a placement. Snippets that are
    /// disabled or placed elsewhere are skipped. The first renderer failure
    /// aborts the whole call.
    ///
    /// # Errors
    ///
    /// Returns `SnippetError::Render` if rendering any selected snippet fails.
    pub fn render(&self, placement: Option<&str>) -> SnippetResult<String, R::Error> {
        let mut pieces = Vec::new();

        for name in &self.order {
            if !self.is_enabled(name) {
                continue;
            }
            let snippet = self
                .snippets
                .get(name)
                .ok_or_else(|| SnippetError::NotFound(name.clone()))?;
            if !snippet.is_placed_at(placement) {
                continue;
            }
            pieces.push(self.render_definition(name, snippet)?);
        }

        trace!(placement = ?placement, rendered = pieces.len(), "Rendered placement");
        Ok(pieces.join(&self.separator))
    }

    /// Renders the snippets without a placement
    ///
    /// # Errors
    ///
    /// Returns `SnippetError::Render` if rendering any selected snippet fails.
    pub fn render_default(&self) -> SnippetResult<String, R::Error> {
        self.render(None)
    }

    fn render_definition(&self, name: &str, snippet: &Snippet) -> SnippetResult<String, R::Error> {
        self.renderer
            .render(&snippet.template, &snippet.values)
            .map_err(|e| {
                warn!(
                    snippet = %name,
                    template = %snippet.template,
                    error = %e,
                    "Snippet render failed"
                );
                SnippetError::Render(e)
            })
    }
}
