//! # Vendored Tree Lifecycle
//!
//! This module wraps the version-control operations used to manage the
//! vendored tree's working state: staging, diffing, capturing a diff as a
//! named patch artifact, and hard-resetting.
//!
//! All state inspection is delegated to the system `git` command, which keeps
//! the tool agnostic to how the vendored tree was committed and inherits the
//! user's git configuration. This system never inspects the tree's internal
//! state beyond pass/fail of each operation.
//!
//! The intended update workflow: apply the current patch set, `stage`
//! everything so it becomes the known-good baseline, hand-edit the tree, then
//! `diff` to review and `capture` to persist the edit as a patch. `reset`
//! discards a failed or exploratory session.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::defaults::PATCH_EXTENSION;
use crate::error::{Error, Result};

/// Working-state operations on the vendored tree.
///
/// A capability trait so commands can be exercised against a fake tree in
/// tests, without a git checkout.
pub trait TreeLifecycle {
    /// Mark all current working-tree changes as the known-good baseline for
    /// the next capture.
    fn stage(&self) -> Result<()>;

    /// The unstaged diff relative to the baseline, ignoring whitespace-only
    /// differences.
    fn diff(&self) -> Result<String>;

    /// Persist the current unstaged diff as the named patch artifact,
    /// overwriting any prior content. Returns the written path.
    fn capture(&self, name: &str) -> Result<PathBuf>;

    /// Discard all working-tree changes, restoring the tree to its last
    /// committed state exactly.
    fn reset(&self) -> Result<()>;
}

/// Production lifecycle implementation shelling out to the system `git`.
pub struct GitTree {
    tree: PathBuf,
    store: PathBuf,
}

impl GitTree {
    pub fn new(tree: impl Into<PathBuf>, store: impl Into<PathBuf>) -> Self {
        Self {
            tree: tree.into(),
            store: store.into(),
        }
    }

    /// Path of the patch artifact a capture of `name` writes.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.store.join(format!("{name}.{PATCH_EXTENSION}"))
    }

    pub fn tree(&self) -> &Path {
        &self.tree
    }

    /// Run a git subcommand against the vendored tree, failing on nonzero
    /// exit with the command's stderr surfaced verbatim.
    fn run_git(&self, args: &[&str]) -> Result<std::process::Output> {
        debug!("running: git -C {} {}", self.tree.display(), args.join(" "));

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.tree)
            .args(args)
            .output()
            .map_err(|e| Error::Tool {
                tool: "git".to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitCommand {
                command: args.join(" "),
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(output)
    }
}

impl TreeLifecycle for GitTree {
    fn stage(&self) -> Result<()> {
        self.run_git(&["add", "--all"])?;
        Ok(())
    }

    fn diff(&self) -> Result<String> {
        let output = self.run_git(&["diff", "--ignore-all-space"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn capture(&self, name: &str) -> Result<PathBuf> {
        let diff = self.diff()?;

        // The store may not exist yet on first capture.
        fs::create_dir_all(&self.store)?;

        let path = self.artifact_path(name);
        fs::write(&path, diff)?;
        debug!("captured diff for '{}' to {}", name, path.display());
        Ok(path)
    }

    fn reset(&self) -> Result<()> {
        self.run_git(&["reset", "--hard"])?;
        Ok(())
    }
}
