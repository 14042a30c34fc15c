//! Snippet helper module
//!
//! This module provides the `SnippetHelper`, a per-render registry of named
//! snippets that renders the enabled ones for a placement in one call.

mod helper;

pub use helper::{SnippetHelper, DEFAULT_SEPARATOR};
