//! Manifest configuration for `SnipView`
//!
//! This module provides the `ManifestLoader` for loading and saving snippet
//! manifests in TOML format, and the manifest and settings models.

mod manager;
mod manifest;
pub mod settings;

pub use manager::ManifestLoader;
pub use manifest::{SnippetEntry, SnippetManifest};
pub use settings::RenderSettings;
