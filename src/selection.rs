//! # Selection Resolution
//!
//! This module turns a raw, whitespace-separated token string (the user's
//! requested patch set) into the concrete, ordered, deduplicated list of
//! patch identifiers to apply.
//!
//! ## Semantics
//!
//! - Tokens are matched case-sensitively against declared group names;
//!   unrecognized tokens are silently ignored. This mirrors membership-test
//!   semantics rather than strict validation: there is no error path for a
//!   typo, only a smaller selection.
//! - A group is active if its own name was requested, or if the wildcard
//!   token `all` was requested.
//! - Active groups contribute their full patch list in the registry's fixed
//!   declaration order. Input token order never influences output order.
//! - The union is idempotent: an identifier declared by more than one active
//!   group appears once.
//!
//! Inline `#` comments are stripped before tokenization, since the
//! configuration source may carry explanatory trailing comments on the same
//! line as the value.

use crate::defaults::DEFAULT_SELECTION;
use crate::registry::{Registry, WILDCARD};

/// Strip an inline comment: everything from the first `#` onward is ignored.
pub fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Resolve a raw token string into the ordered, deduplicated selection.
///
/// The result may be empty if no token matched a declared group; an empty
/// selection is not an error (an empty apply session is a no-op).
pub fn resolve(registry: &Registry, raw: &str) -> Vec<String> {
    let tokens: Vec<&str> = strip_comment(raw).split_whitespace().collect();
    let requested = |name: &str| tokens.iter().any(|t| *t == name);
    let wildcard = requested(WILDCARD);

    let mut selection: Vec<String> = Vec::new();
    for group in registry.groups() {
        if !wildcard && !requested(&group.name) {
            continue;
        }
        for patch in &group.patches {
            if !selection.iter().any(|p| p == patch) {
                selection.push(patch.clone());
            }
        }
    }
    selection
}

/// Resolve a possibly-absent token string, falling back to the default.
///
/// Missing or whitespace-only input (after comment stripping) resolves to the
/// configured default token string, not to an empty selection.
pub fn resolve_or_default(registry: &Registry, raw: Option<&str>) -> Vec<String> {
    let raw = raw.unwrap_or(DEFAULT_SELECTION);
    if strip_comment(raw).trim().is_empty() {
        return resolve(registry, DEFAULT_SELECTION);
    }
    resolve(registry, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Group;

    fn all_patches() -> Vec<String> {
        let registry = Registry::builtin();
        registry
            .groups()
            .iter()
            .flat_map(|g| g.patches.clone())
            .collect()
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("all # everything"), "all ");
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("hotfix msvc"), "hotfix msvc");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = Registry::builtin();
        assert_eq!(
            resolve(&registry, "hotfix exports"),
            resolve(&registry, "hotfix exports")
        );
    }

    #[test]
    fn test_wildcard_equals_every_concrete_group() {
        let registry = Registry::builtin();
        assert_eq!(
            resolve(&registry, "all"),
            resolve(&registry, "hotfix msvc exports")
        );
        assert_eq!(resolve(&registry, "all"), all_patches());
    }

    #[test]
    fn test_wildcard_dominates_other_tokens() {
        let registry = Registry::builtin();
        // Redundant concrete tokens next to the wildcard change nothing.
        assert_eq!(resolve(&registry, "all msvc"), resolve(&registry, "all"));
    }

    #[test]
    fn test_order_follows_declaration_not_input() {
        let registry = Registry::builtin();
        assert_eq!(
            resolve(&registry, "exports hotfix"),
            resolve(&registry, "hotfix exports")
        );
        let selection = resolve(&registry, "exports hotfix");
        assert_eq!(selection[0], "get_function_proto");
        assert_eq!(selection.last().unwrap(), "read_module_exports");
    }

    #[test]
    fn test_unrecognized_tokens_are_ignored() {
        let registry = Registry::builtin();
        assert_eq!(resolve(&registry, "bogus"), Vec::<String>::new());
        assert_eq!(
            resolve(&registry, "msvc bogus"),
            resolve(&registry, "msvc")
        );
        // Case-sensitive: "MSVC" is not a declared group.
        assert_eq!(resolve(&registry, "MSVC"), Vec::<String>::new());
    }

    #[test]
    fn test_inline_comment_leaves_wildcard_only() {
        let registry = Registry::builtin();
        let selection = resolve(&registry, "all #hotfix msvc exports");
        assert_eq!(selection, all_patches());
    }

    #[test]
    fn test_comment_can_hide_all_tokens() {
        let registry = Registry::builtin();
        assert_eq!(resolve(&registry, "#all"), Vec::<String>::new());
    }

    #[test]
    fn test_duplicate_membership_is_deduplicated() {
        // A future identifier declared in two groups must not appear twice.
        let registry = Registry::new(vec![
            Group::new("alpha", &["shared_fix", "alpha_only"]),
            Group::new("beta", &["shared_fix", "beta_only"]),
        ]);
        let selection = resolve(&registry, "alpha beta");
        assert_eq!(selection, vec!["shared_fix", "alpha_only", "beta_only"]);
    }

    #[test]
    fn test_resolve_or_default_falls_back_on_empty_input() {
        let registry = Registry::builtin();
        assert_eq!(resolve_or_default(&registry, None), all_patches());
        assert_eq!(resolve_or_default(&registry, Some("")), all_patches());
        assert_eq!(resolve_or_default(&registry, Some("   ")), all_patches());
        assert_eq!(
            resolve_or_default(&registry, Some("# just a comment")),
            all_patches()
        );
    }

    #[test]
    fn test_resolve_or_default_respects_explicit_tokens() {
        let registry = Registry::builtin();
        assert_eq!(
            resolve_or_default(&registry, Some("msvc")),
            vec!["basic_msvc_compat"]
        );
        // Unknown tokens still resolve to an empty selection, not the default.
        assert_eq!(
            resolve_or_default(&registry, Some("bogus")),
            Vec::<String>::new()
        );
    }
}
