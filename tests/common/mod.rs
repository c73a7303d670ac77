//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! #[cfg_attr(not(feature = "integration-tests"), ignore)]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     // ... test code
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::diffs;
    #[allow(unused_imports)]
    pub use super::TestFixture;
}

/// Unified-diff snippets matching the fixture tree contents.
///
/// All paths carry one leading component (`a/`, `b/`) so they apply with a
/// strip level of 1, the way stored patches are applied to the tree.
#[allow(dead_code)]
pub mod diffs {
    /// Rewrites the second line of core.c.
    pub const CORE_MSVC: &str = "\
--- a/core.c
+++ b/core.c
@@ -1,3 +1,3 @@
 alpha
-beta
+beta_msvc
 gamma
";

    /// Rewrites the second line of util.c.
    pub const UTIL_EXPORTS: &str = "\
--- a/util.c
+++ b/util.c
@@ -1,3 +1,3 @@
 one
-two
+two_exports
 three
";

    /// Context that matches nothing in the fixture tree, so application
    /// fails with a hunk mismatch.
    pub const MISMATCH: &str = "\
--- a/core.c
+++ b/core.c
@@ -1,3 +1,3 @@
 delta
-epsilon
+zeta
 gamma
";
}

/// A scratch vendored tree (a real git repository) plus a patch store.
#[allow(dead_code)]
pub struct TestFixture {
    temp: TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a committed vendored tree with known contents and an empty
    /// patch store next to it.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();

        let tree = temp.child("vendor");
        tree.child("core.c").write_str("alpha\nbeta\ngamma\n").unwrap();
        tree.child("util.c").write_str("one\ntwo\nthree\n").unwrap();

        git(tree.path(), &["init", "--quiet"]);
        git(tree.path(), &["add", "--all"]);
        git(tree.path(), &["commit", "--quiet", "-m", "vendor drop"]);

        temp.child("patches").create_dir_all().unwrap();

        Self { temp }
    }

    pub fn tree(&self) -> PathBuf {
        self.temp.path().join("vendor")
    }

    pub fn store(&self) -> PathBuf {
        self.temp.path().join("patches")
    }

    /// Write a diff artifact into the store under `<name>.patch`.
    pub fn write_patch(&self, name: &str, diff: &str) {
        fs::write(self.store().join(format!("{name}.patch")), diff).unwrap();
    }

    /// Read a file from the vendored tree.
    pub fn tree_file(&self, name: &str) -> String {
        fs::read_to_string(self.tree().join(name)).unwrap()
    }

    /// Overwrite a file in the vendored tree (an unstaged manual edit).
    pub fn edit_tree_file(&self, name: &str, content: &str) {
        fs::write(self.tree().join(name), content).unwrap();
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a git subcommand in `dir`, panicking on failure.
///
/// Identity is passed per-invocation so commits work without relying on the
/// host's global git configuration.
#[allow(dead_code)]
fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .expect("git must be installed for integration tests");
    assert!(status.success(), "git {:?} failed in {:?}", args, dir);
}
