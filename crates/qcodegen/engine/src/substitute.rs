//! Placeholder substitution over template bodies.
//!
//! Placeholders are double-brace tokens, `{{KEY}}`. Substitution is one
//! scan over the original text: each exact token is replaced by its
//! mapped value, and values are inserted verbatim — never re-scanned —
//! so a value containing brace text cannot inject a second round of
//! substitution. After the pass, any surviving placeholder token
//! (unknown, malformed, or smuggled in through a value) is an error —
//! templates are emitted fully resolved or not at all.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GenerateError, GenerateResult};

/// Matches `{{KEY}}` with optional inner whitespace, capturing the key.
/// The scan is deliberately looser than the replacement form so that a
/// malformed `{{ KEY }}` in a template body is caught, not emitted.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern compiles")
});

/// The `{{KEY}}` token for a key.
pub fn placeholder_token(key: &str) -> String {
    format!("{{{{{}}}}}", key)
}

/// Stateless substitution engine.
pub struct SubstitutionEngine;

impl SubstitutionEngine {
    /// Replace every `{{KEY}}` token with its mapped value, then fail if
    /// any placeholder token survives.
    ///
    /// Only exact `{{KEY}}` tokens in the original text are replaced, in
    /// one pass — inserted values are never re-examined. Keys in the map
    /// with no token in the text are ignored; callers merge defaults
    /// with overrides and not every default need appear.
    pub fn apply(
        &self,
        text: &str,
        values: &BTreeMap<String, String>,
    ) -> GenerateResult<String> {
        let out = PLACEHOLDER_RE.replace_all(text, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            match values.get(key) {
                // A padded token like `{{ KEY }}` stays put for the
                // leftover scan to reject.
                Some(value) if caps[0] == placeholder_token(key) => value.clone(),
                _ => caps[0].to_string(),
            }
        });
        let mut leftover: Vec<String> = PLACEHOLDER_RE
            .captures_iter(&out)
            .map(|c| c[1].to_string())
            .collect();
        if leftover.is_empty() {
            Ok(out.into_owned())
        } else {
            leftover.sort();
            leftover.dedup();
            Err(GenerateError::UnresolvedPlaceholder { keys: leftover })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let engine = SubstitutionEngine;
        let out = engine
            .apply(
                "molecule = \"{{MOLECULE_NAME}}\"  # {{MOLECULE_NAME}}",
                &values(&[("MOLECULE_NAME", "H2")]),
            )
            .unwrap();
        assert_eq!(out, "molecule = \"H2\"  # H2");
    }

    #[test]
    fn unused_map_entries_are_ignored() {
        let engine = SubstitutionEngine;
        let out = engine
            .apply("shots = {{SHOTS}}", &values(&[("SHOTS", "1024"), ("OPTIMIZER", "COBYLA")]))
            .unwrap();
        assert_eq!(out, "shots = 1024");
    }

    #[test]
    fn leftover_tokens_are_an_error() {
        let engine = SubstitutionEngine;
        let err = engine
            .apply(
                "{{SHOTS}} {{OPTIMIZER}} {{SHOTS}}",
                &values(&[("SHOTS", "1024")]),
            )
            .unwrap_err();
        match err {
            GenerateError::UnresolvedPlaceholder { keys } => {
                assert_eq!(keys, vec!["OPTIMIZER".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn leftover_keys_are_sorted_and_deduplicated() {
        let engine = SubstitutionEngine;
        let err = engine
            .apply("{{B}} {{A}} {{B}}", &BTreeMap::new())
            .unwrap_err();
        match err {
            GenerateError::UnresolvedPlaceholder { keys } => {
                assert_eq!(keys, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_padded_tokens_are_caught_not_emitted() {
        let engine = SubstitutionEngine;
        let err = engine
            .apply("shots = {{ SHOTS }}", &values(&[("SHOTS", "1024")]))
            .unwrap_err();
        assert!(matches!(err, GenerateError::UnresolvedPlaceholder { .. }));
    }

    #[test]
    fn values_are_inserted_verbatim() {
        // A value that looks like a placeholder must not trigger a
        // second substitution round; it is caught by the leftover scan.
        // "B" sorts after "A", so a per-key replacement loop would
        // wrongly resolve it to "1".
        let engine = SubstitutionEngine;
        let err = engine
            .apply(
                "x = {{A}}",
                &values(&[("A", "{{B}}"), ("B", "1")]),
            )
            .unwrap_err();
        match err {
            GenerateError::UnresolvedPlaceholder { keys } => {
                assert_eq!(keys, vec!["B".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn verbatim_insertion_is_order_independent() {
        // Same contract with the reference pointing the other way in
        // sort order: the smuggled token must survive to the leftover
        // scan regardless of how the map iterates.
        let engine = SubstitutionEngine;
        let err = engine
            .apply(
                "x = {{Z}}",
                &values(&[("A", "1"), ("Z", "{{A}}")]),
            )
            .unwrap_err();
        match err {
            GenerateError::UnresolvedPlaceholder { keys } => {
                assert_eq!(keys, vec!["A".to_string()]);
            }
            other => panic!("expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let engine = SubstitutionEngine;
        let out = engine.apply("print('hello')\n", &BTreeMap::new()).unwrap();
        assert_eq!(out, "print('hello')\n");
    }

    proptest! {
        // Once every token is resolved, a second pass is the identity.
        #[test]
        fn substitution_is_idempotent(
            key in "[A-Z][A-Z0-9_]{0,8}",
            value in "[a-z0-9 .]{0,16}",
            prefix in "[a-z =(\n]{0,16}",
            suffix in "[a-z =)\n]{0,16}",
        ) {
            let engine = SubstitutionEngine;
            let text = format!("{}{}{}", prefix, placeholder_token(&key), suffix);
            let map = values(&[(key.as_str(), value.as_str())]);
            let once = engine.apply(&text, &map).unwrap();
            let twice = engine.apply(&once, &map).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
