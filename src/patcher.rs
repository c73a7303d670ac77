//! # Patch Application
//!
//! This module applies a single named patch to the vendored tree by invoking
//! the external `patch` tool. The diff content itself is opaque to us: it is
//! handed to the tool verbatim, and the tool's diagnostics are surfaced
//! verbatim on failure.
//!
//! The `PatchApplier` trait is the capability seam that lets the apply
//! session be exercised against a fake implementation in tests, without
//! external tools or a real vendored tree.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::defaults::PATCH_EXTENSION;
use crate::error::{Error, Result};

/// Applies one named diff artifact to the vendored tree.
pub trait PatchApplier {
    /// Apply the patch with the given identifier.
    ///
    /// Mutates files under the vendored tree in place. A failed application
    /// is never safe to retry blindly: partial hunks may already be applied.
    fn apply(&self, patch: &str) -> Result<()>;
}

/// Production applier shelling out to the system `patch` tool.
///
/// Uses the system binary so the exact hunk-matching behavior stays identical
/// to what a maintainer gets when applying a diff by hand.
pub struct ToolPatchApplier {
    tree: PathBuf,
    store: PathBuf,
}

impl ToolPatchApplier {
    pub fn new(tree: impl Into<PathBuf>, store: impl Into<PathBuf>) -> Self {
        Self {
            tree: tree.into(),
            store: store.into(),
        }
    }

    /// Path of the stored diff artifact for a patch identifier.
    pub fn patch_path(&self, patch: &str) -> PathBuf {
        self.store.join(format!("{patch}.{PATCH_EXTENSION}"))
    }

    pub fn tree(&self) -> &Path {
        &self.tree
    }
}

impl PatchApplier for ToolPatchApplier {
    fn apply(&self, patch: &str) -> Result<()> {
        let diff = self.patch_path(patch);
        if !diff.exists() {
            return Err(Error::PatchMissing {
                patch: patch.to_string(),
                path: diff,
            });
        }

        // Diffs are generated one directory above the vendored tree, so a
        // single leading path component is stripped on application.
        let output = Command::new("patch")
            .args(["-p1", "--forward", "--batch"])
            .arg("--directory")
            .arg(&self.tree)
            .arg("--input")
            .arg(&diff)
            .output()
            .map_err(|e| Error::Tool {
                tool: "patch".to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            // `patch` reports hunk failures on stdout and everything else on
            // stderr; combine both for the diagnostic.
            let mut diagnostic = String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string();
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                if !diagnostic.is_empty() {
                    diagnostic.push('\n');
                }
                diagnostic.push_str(stderr.trim_end());
            }
            return Err(Error::PatchApply {
                patch: patch.to_string(),
                output: diagnostic,
            });
        }

        debug!("applied patch '{}' from {}", patch, diff.display());
        Ok(())
    }
}
