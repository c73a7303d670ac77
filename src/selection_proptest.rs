//! Property-based tests for selection resolution.
//!
//! These tests use proptest to generate random token strings and verify that
//! the resolver invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::registry::Registry;
    use crate::selection::resolve;
    use proptest::prelude::*;

    /// Strategy producing token strings mixing declared group names, the
    /// wildcard, junk tokens, and an optional trailing comment.
    fn token_string() -> impl Strategy<Value = String> {
        let token = prop_oneof![
            Just("hotfix".to_string()),
            Just("msvc".to_string()),
            Just("exports".to_string()),
            Just("all".to_string()),
            "[a-z]{1,8}",
        ];
        (
            proptest::collection::vec(token, 0..6),
            proptest::option::of("[ a-z]{0,12}"),
        )
            .prop_map(|(tokens, comment)| {
                let mut raw = tokens.join(" ");
                if let Some(comment) = comment {
                    raw.push_str(" #");
                    raw.push_str(&comment);
                }
                raw
            })
    }

    proptest! {
        /// Property: resolving the same token string twice yields identical selections
        #[test]
        fn resolve_is_deterministic(raw in token_string()) {
            let registry = Registry::builtin();
            prop_assert_eq!(resolve(&registry, &raw), resolve(&registry, &raw));
        }

        /// Property: a selection never contains duplicate identifiers
        #[test]
        fn resolve_never_duplicates(raw in token_string()) {
            let registry = Registry::builtin();
            let selection = resolve(&registry, &raw);
            let mut seen = std::collections::HashSet::new();
            for patch in &selection {
                prop_assert!(seen.insert(patch), "duplicate identifier: {}", patch);
            }
        }

        /// Property: every selection is an order-preserving subsequence of
        /// the full wildcard selection
        #[test]
        fn resolve_is_subsequence_of_all(raw in token_string()) {
            let registry = Registry::builtin();
            let selection = resolve(&registry, &raw);
            let full = resolve(&registry, "all");
            let mut cursor = full.iter();
            for patch in &selection {
                prop_assert!(
                    cursor.any(|p| p == patch),
                    "'{}' out of order relative to declaration order",
                    patch
                );
            }
        }

        /// Property: token order never changes the resolved selection
        #[test]
        fn resolve_ignores_token_order(tokens in proptest::collection::vec(
            prop_oneof![
                Just("hotfix".to_string()),
                Just("msvc".to_string()),
                Just("exports".to_string()),
                Just("all".to_string()),
            ],
            0..4,
        )) {
            let registry = Registry::builtin();
            let forward = resolve(&registry, &tokens.join(" "));
            let mut reversed = tokens.clone();
            reversed.reverse();
            let backward = resolve(&registry, &reversed.join(" "));
            prop_assert_eq!(forward, backward);
        }

        /// Property: adding tokens never removes patches from the selection
        #[test]
        fn resolve_is_monotone(base in token_string(), extra in "[a-z]{1,8}") {
            let registry = Registry::builtin();
            // Append before any comment so the extra token is visible.
            let stripped = crate::selection::strip_comment(&base).to_string();
            let widened = format!("{stripped} {extra}");
            let before = resolve(&registry, &stripped);
            let after = resolve(&registry, &widened);
            for patch in &before {
                prop_assert!(after.contains(patch));
            }
        }
    }
}
