//! # Diff Command Implementation
//!
//! This module implements the `diff` subcommand, which prints the vendored
//! tree's unstaged changes relative to the last staged baseline, ignoring
//! whitespace-only differences.
//!
//! This is exactly the content a subsequent `update <identifier>` would
//! capture, so `diff` is the review step before persisting a patch. It is a
//! safe, read-only operation.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vendor_patch::defaults;
use vendor_patch::suggestions;
use vendor_patch::tree::{GitTree, TreeLifecycle};

/// Show the unstaged, whitespace-insensitive diff of the vendored tree
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// The vendored tree directory.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_TREE")]
    pub tree: Option<PathBuf>,
}

/// Execute the `diff` command.
pub fn execute(args: DiffArgs) -> Result<()> {
    let tree_dir = args.tree.unwrap_or_else(defaults::default_tree_dir);
    if !tree_dir.exists() {
        return Err(suggestions::tree_not_found(&tree_dir));
    }

    let tree = GitTree::new(&tree_dir, defaults::default_store_dir());
    let diff = tree.diff()?;

    if diff.is_empty() {
        println!("No changes detected.");
    } else {
        print!("{diff}");
    }
    Ok(())
}
