//! # Reset Command Implementation
//!
//! This module implements the `reset` subcommand, which discards all
//! working-tree changes in the vendored tree, restoring it to its last
//! committed state exactly.
//!
//! This is the documented recovery path after a failed or exploratory apply
//! session: no automatic rollback happens mid-session, the operator resets
//! and re-applies. Because the operation destroys uncommitted work, it asks
//! for confirmation unless `--yes` is given.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vendor_patch::defaults;
use vendor_patch::suggestions;
use vendor_patch::tree::{GitTree, TreeLifecycle};

/// Discard all working-tree changes in the vendored tree
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// The vendored tree directory.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_TREE")]
    pub tree: Option<PathBuf>,

    /// Do not ask for confirmation before discarding changes
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the `reset` command.
pub fn execute(args: ResetArgs) -> Result<()> {
    let tree_dir = args.tree.unwrap_or_else(defaults::default_tree_dir);
    if !tree_dir.exists() {
        return Err(suggestions::tree_not_found(&tree_dir));
    }

    if !args.yes {
        println!(
            "Discard ALL uncommitted changes in {}? (y/N): ",
            tree_dir.display()
        );
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    let tree = GitTree::new(&tree_dir, defaults::default_store_dir());
    tree.reset()?;

    println!("Restored {} to its last committed state", tree_dir.display());
    Ok(())
}
