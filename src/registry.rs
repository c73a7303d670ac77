//! # Patch Registry
//!
//! This module declares the fixed association between patch groups and the
//! patch identifiers each group contributes, in authoring order. The registry
//! is built once at process start and never mutated afterward.
//!
//! The `all` token is not a group of its own: it is a wildcard that, when
//! present in a selection, activates every declared group (see the
//! `selection` module).

/// The wildcard token that activates every declared group.
pub const WILDCARD: &str = "all";

/// Canonical group declarations, in fixed global order.
///
/// Intra-group order is the authoring order of the patches and is preserved
/// in every resolved selection.
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    (
        "hotfix",
        &[
            "get_function_proto",
            "check_stack_overflow",
            "infinity_handling",
            "atomic_new_class_id",
        ],
    ),
    ("msvc", &["basic_msvc_compat"]),
    ("exports", &["read_module_exports"]),
];

/// One named group of patches, selectable as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group name matched against selection tokens (case-sensitive).
    pub name: String,
    /// Patch identifiers owned by this group, in authoring order.
    pub patches: Vec<String>,
}

impl Group {
    pub fn new(name: impl Into<String>, patches: &[&str]) -> Self {
        Self {
            name: name.into(),
            patches: patches.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

/// Ordered, read-only mapping from group name to patch identifiers.
#[derive(Debug, Clone)]
pub struct Registry {
    groups: Vec<Group>,
}

impl Registry {
    /// Build a registry from explicit group declarations.
    ///
    /// Declaration order is significant: it fixes the global order in which
    /// group patches appear in any resolved selection.
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// The canonical built-in registry.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_GROUPS
                .iter()
                .map(|(name, patches)| Group::new(*name, patches))
                .collect(),
        )
    }

    /// All declared groups, in declaration order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Names of all declared groups, in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Whether any group declares the given patch identifier.
    pub fn declares_patch(&self, patch: &str) -> bool {
        self.groups
            .iter()
            .any(|g| g.patches.iter().any(|p| p == patch))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_group_order() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.group_names().collect();
        assert_eq!(names, vec!["hotfix", "msvc", "exports"]);
    }

    #[test]
    fn test_builtin_hotfix_patch_order() {
        let registry = Registry::builtin();
        let hotfix = &registry.groups()[0];
        assert_eq!(
            hotfix.patches,
            vec![
                "get_function_proto",
                "check_stack_overflow",
                "infinity_handling",
                "atomic_new_class_id",
            ]
        );
    }

    #[test]
    fn test_wildcard_is_not_a_group() {
        let registry = Registry::builtin();
        assert!(!registry.group_names().any(|name| name == WILDCARD));
    }

    #[test]
    fn test_declares_patch() {
        let registry = Registry::builtin();
        assert!(registry.declares_patch("basic_msvc_compat"));
        assert!(registry.declares_patch("read_module_exports"));
        assert!(!registry.declares_patch("no_such_patch"));
    }

    #[test]
    fn test_patch_identifiers_are_unique_across_groups() {
        let registry = Registry::builtin();
        let mut seen = std::collections::HashSet::new();
        for group in registry.groups() {
            for patch in &group.patches {
                assert!(seen.insert(patch.clone()), "duplicate identifier: {patch}");
            }
        }
    }
}
