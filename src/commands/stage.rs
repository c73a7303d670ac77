//! # Stage Command Implementation
//!
//! This module implements the `stage` subcommand, which marks all current
//! working-tree changes in the vendored tree as the known-good baseline for
//! the next capture.
//!
//! Staging after a successful apply session means a later `diff` or `update`
//! shows only the manual edits made since, not the applied patches
//! themselves.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vendor_patch::defaults;
use vendor_patch::suggestions;
use vendor_patch::tree::{GitTree, TreeLifecycle};

/// Stage all working-tree changes in the vendored tree
#[derive(Args, Debug)]
pub struct StageArgs {
    /// The vendored tree directory.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_TREE")]
    pub tree: Option<PathBuf>,
}

/// Execute the `stage` command.
pub fn execute(args: StageArgs) -> Result<()> {
    let tree_dir = args.tree.unwrap_or_else(defaults::default_tree_dir);
    if !tree_dir.exists() {
        return Err(suggestions::tree_not_found(&tree_dir));
    }

    let tree = GitTree::new(&tree_dir, defaults::default_store_dir());
    tree.stage()?;

    println!("Staged all changes in {}", tree_dir.display());
    Ok(())
}
