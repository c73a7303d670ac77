//! # Update Command Implementation
//!
//! This module implements the `update` subcommand, which captures the
//! vendored tree's current unstaged, whitespace-insensitive diff into a
//! named patch file in the store, overwriting any prior content at that
//! name. This is how an existing patch is updated after manual edits to the
//! vendored tree.
//!
//! ## Functionality
//!
//! - **Identifier Validation**: The identifier is checked against the
//!   declared patch groups; a near-miss gets a "did you mean" hint. Capturing
//!   an undeclared name (a brand-new patch, to be declared afterwards)
//!   requires `--force`.
//! - **Capture**: Delegates to the tree lifecycle, which runs the same
//!   whitespace-insensitive diff that `vendor-patch diff` shows.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vendor_patch::defaults;
use vendor_patch::registry::Registry;
use vendor_patch::suggestions;
use vendor_patch::tree::{GitTree, TreeLifecycle};

/// Capture the current diff into a named patch file
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// The patch identifier to write (becomes `<identifier>.patch` in the store).
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// The vendored tree directory.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_TREE")]
    pub tree: Option<PathBuf>,

    /// The patch store directory.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_STORE")]
    pub store: Option<PathBuf>,

    /// Capture even if no patch group declares the identifier
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `update` command.
pub fn execute(args: UpdateArgs) -> Result<()> {
    let registry = Registry::builtin();
    if !registry.declares_patch(&args.identifier) && !args.force {
        let declared: Vec<&str> = registry
            .groups()
            .iter()
            .flat_map(|g| g.patches.iter().map(String::as_str))
            .collect();
        return Err(suggestions::unknown_patch(&args.identifier, &declared));
    }

    let tree_dir = args.tree.unwrap_or_else(defaults::default_tree_dir);
    if !tree_dir.exists() {
        return Err(suggestions::tree_not_found(&tree_dir));
    }
    let store = args.store.unwrap_or_else(defaults::default_store_dir);

    let tree = GitTree::new(&tree_dir, store);
    let path = tree.capture(&args.identifier)?;

    println!("Captured diff to {}", path.display());
    Ok(())
}
