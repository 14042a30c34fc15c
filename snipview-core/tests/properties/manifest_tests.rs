//! Tests for manifest persistence and manifest-driven rendering

use proptest::prelude::*;
use snipview_core::{ManifestLoader, SnippetEntry, SnippetHelper, SnippetManifest};
use tempfile::TempDir;

const SITE_MANIFEST: &str = r#"
[templates]
"tpl-a" = "<header>${title}</header>"
"tpl-b" = "<footer>(c) ${year}</footer>"
"tpl-c" = "<script src=\"${src}\"></script>"

[[snippets]]
name = "header"
template = "tpl-a"
placement = "top"

[snippets.values]
title = "Home"

[[snippets]]
name = "footer"
template = "tpl-b"
placement = "bottom"

[snippets.values]
year = 2024

[[snippets]]
name = "analytics"
template = "tpl-c"
placement = "bottom"
enabled = false

[snippets.values]
src = "/a.js"
"#;

#[test]
fn site_manifest_renders_per_placement() {
    let manifest = ManifestLoader::parse(SITE_MANIFEST).unwrap();
    assert!(ManifestLoader::validate_manifest(&manifest).is_empty());

    let mut helper = SnippetHelper::from_manifest(manifest.placeholder_renderer(), &manifest);

    assert_eq!(helper.render(Some("top")).unwrap(), "<header>Home</header>");
    assert_eq!(helper.render(Some("bottom")).unwrap(), "<footer>(c) 2024</footer>");
    assert_eq!(helper.render(None).unwrap(), "");

    helper.set_enabled("analytics", true).unwrap();
    assert_eq!(
        helper.render(Some("bottom")).unwrap(),
        "<footer>(c) 2024</footer>\n<script src=\"/a.js\"></script>"
    );
}

#[test]
fn manifest_file_round_trip_renders_the_same() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("site").join("snippets.toml");

    let manifest = ManifestLoader::parse(SITE_MANIFEST).unwrap();
    ManifestLoader::save(&path, &manifest).unwrap();
    let loaded = ManifestLoader::load(&path).unwrap();
    assert_eq!(loaded, manifest);

    let original = SnippetHelper::from_manifest(manifest.placeholder_renderer(), &manifest);
    let reloaded = SnippetHelper::from_manifest(loaded.placeholder_renderer(), &loaded);
    for placement in [None, Some("top"), Some("bottom")] {
        assert_eq!(
            original.render(placement).unwrap(),
            reloaded.render(placement).unwrap()
        );
    }
}

#[test]
fn missing_template_fails_whole_placement() {
    let mut manifest = ManifestLoader::parse(SITE_MANIFEST).unwrap();
    manifest
        .snippets
        .push(SnippetEntry::new("broken", "tpl-missing").with_placement("top"));

    let errors = ManifestLoader::validate_manifest(&manifest);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, 3);

    let helper = SnippetHelper::from_manifest(manifest.placeholder_renderer(), &manifest);
    let err = helper.render(Some("top")).unwrap_err();
    assert_eq!(err.to_string(), "Template not found: tpl-missing");
    assert!(helper.render(Some("bottom")).is_ok());
}

#[test]
fn duplicate_entries_overwrite_in_place() {
    let mut manifest = SnippetManifest::default();
    manifest.templates.insert("t1".to_string(), "one".to_string());
    manifest.templates.insert("t2".to_string(), "two".to_string());
    manifest.snippets = vec![
        SnippetEntry::new("x", "t1"),
        SnippetEntry::new("y", "t1"),
        SnippetEntry::new("x", "t2"),
    ];

    let helper = SnippetHelper::from_manifest(manifest.placeholder_renderer(), &manifest);
    assert_eq!(helper.render(None).unwrap(), "two\none");
    assert_eq!(manifest.entry("x").map(|e| e.template.as_str()), Some("t2"));
}

// Strategy for generating manifest entries with distinct names
fn arb_entries() -> impl Strategy<Value = Vec<SnippetEntry>> {
    prop::collection::btree_map(
        "[a-z][a-z0-9_]{0,10}",
        (
            prop_oneof![Just(None::<String>), "[a-z]{1,6}".prop_map(Some)],
            any::<bool>(),
            "[a-zA-Z0-9 ]{0,20}",
        ),
        0..8,
    )
    .prop_map(|map| {
        map.into_iter()
            .map(|(name, (placement, enabled, title))| {
                let mut entry = SnippetEntry::new(name, "tpl").with_value("title", title);
                entry.placement = placement;
                entry.enabled = enabled;
                entry
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Saving and loading a manifest preserves it
    #[test]
    fn manifest_save_load_preserves_entries(entries in arb_entries(), strict in any::<bool>()) {
        let temp_dir = TempDir::new().unwrap();
        let loader = ManifestLoader::with_config_dir(temp_dir.path().to_path_buf());

        let mut manifest = SnippetManifest::default();
        manifest.settings.strict = strict;
        manifest.templates.insert("tpl".to_string(), "[${title}]".to_string());
        manifest.snippets = entries;

        loader.save_default(&manifest).unwrap();
        let loaded = loader.load_default().unwrap();

        prop_assert_eq!(loaded, manifest);
    }
}
