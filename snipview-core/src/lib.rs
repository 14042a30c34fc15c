//! `SnipView` Core Library
//!
//! This crate provides placement-aware view snippets: a per-render registry of
//! named, template-backed fragments that can be toggled on and off and
//! rendered per placement through a host-supplied renderer.
//!
//! ```
//! use snipview_core::{PlaceholderRenderer, Snippet, SnippetHelper};
//!
//! let renderer = PlaceholderRenderer::new().with_template("tpl/title", "<h1>${title}</h1>");
//! let mut helper = SnippetHelper::new(&renderer);
//! helper.append(
//!     "title",
//!     Snippet::new("tpl/title")
//!         .with_value("title", "Home")
//!         .with_placement("head"),
//! );
//!
//! assert_eq!(helper.render(Some("head")).unwrap(), "<h1>Home</h1>");
//! assert_eq!(helper.render_default().unwrap(), "");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod snippet;

pub use config::{ManifestLoader, RenderSettings, SnippetEntry, SnippetManifest};
pub use error::{
    ConfigError, ConfigResult, SnippetError, SnippetResult, TemplateError, TemplateResult,
};
pub use models::{Snippet, SnippetValues};
pub use render::{FnRenderer, PlaceholderRenderer, Renderer};
pub use snippet::{SnippetHelper, DEFAULT_SEPARATOR};
