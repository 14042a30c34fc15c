//! Core data models for `SnipView`
//!
//! This module defines the snippet definition and the value map handed to
//! the renderer.

mod snippet;

pub use snippet::{Snippet, SnippetValues};
