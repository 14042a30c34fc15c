//! Property-based tests for placeholder rendering

use proptest::prelude::*;
use serde_json::Value;
use snipview_core::{
    PlaceholderRenderer, Renderer, Snippet, SnippetHelper, SnippetValues, TemplateError,
};

// Strategy for generating valid placeholder names
fn arb_placeholder() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}".prop_map(|s| s)
}

// Strategy for generating text without placeholder syntax
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,;:!?<>/=\"-]{0,50}".prop_map(|s| s)
}

fn arb_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,30}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Text without placeholders renders unchanged
    #[test]
    fn plain_text_renders_verbatim(text in arb_plain_text()) {
        let renderer = PlaceholderRenderer::new().with_template("tpl", text.clone());
        prop_assert_eq!(renderer.render("tpl", &SnippetValues::new()).unwrap(), text);
    }

    /// Every occurrence of a placeholder is replaced by its value
    #[test]
    fn substitute_replaces_all_occurrences(name in arb_placeholder(), value in arb_value()) {
        let text = format!("MARKER_ONE_${{{name}}} MARKER_TWO_${{{name}}}");
        let mut values = SnippetValues::new();
        values.insert(name.clone(), Value::String(value.clone()));

        let expected = format!("MARKER_ONE_{value} MARKER_TWO_{value}");
        prop_assert_eq!(PlaceholderRenderer::substitute(&text, &values), expected);
    }

    /// Strict rendering fails exactly when a placeholder has no value
    #[test]
    fn strict_requires_every_placeholder(
        names in prop::collection::btree_set(arb_placeholder(), 1..6),
        provided in any::<prop::sample::Index>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let text: String = names.iter().map(|n| format!("${{{n}}}")).collect();
        let renderer = PlaceholderRenderer::new().with_template("tpl", text).strict(true);

        // Leave out one placeholder
        let missing = provided.index(names.len());
        let values: SnippetValues = names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != missing)
            .map(|(_, n)| (n.clone(), Value::String("v".to_string())))
            .collect();

        let err = renderer.render("tpl", &values).unwrap_err();
        prop_assert!(
            matches!(err, TemplateError::MissingValue { ref name, .. } if *name == names[missing]),
            "Unexpected error: {:?}",
            err
        );

        let mut complete = values;
        complete.insert(names[missing].clone(), Value::String("v".to_string()));
        prop_assert_eq!(renderer.render("tpl", &complete).unwrap(), "v".repeat(names.len()));
    }

    /// A helper over the placeholder renderer returns the renderer's output verbatim
    #[test]
    fn helper_returns_renderer_output(text in arb_plain_text(), name in arb_placeholder()) {
        let renderer = PlaceholderRenderer::new().with_template("tpl", text);
        let mut helper = SnippetHelper::new(&renderer);
        helper.append(name.clone(), Snippet::new("tpl"));

        prop_assert_eq!(
            helper.render_snippet(&name).unwrap(),
            renderer.render("tpl", &SnippetValues::new()).unwrap()
        );
    }
}

