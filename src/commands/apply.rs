//! # Apply Command Implementation
//!
//! This module implements the `apply` subcommand, which resolves the
//! configured patch-set tokens into an ordered selection and applies each
//! selected patch to the vendored tree, in order, stopping at the first
//! failure.
//!
//! ## Functionality
//!
//! - **Selection Resolution**: Tokens come from `--patches`, the
//!   `VENDOR_PATCH_SET` environment variable, or the configuration file;
//!   missing input falls back to the `all` wildcard.
//! - **Progress Markers**: One `[k/N] applying <id>` line per patch, emitted
//!   before the attempt, so a failed run shows exactly how far it got.
//! - **Fail-Fast**: The first patch failure aborts the run with the failing
//!   identifier and the patch tool's diagnostics; later patches are never
//!   attempted and no rollback is performed (`vendor-patch reset` is the
//!   recovery path).
//! - **Dry Run**: `--dry-run` prints the resolved selection without touching
//!   the tree.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use vendor_patch::config;
use vendor_patch::defaults::{self, DEFAULT_CONFIG_FILENAME};
use vendor_patch::output::{emoji, OutputConfig};
use vendor_patch::patcher::ToolPatchApplier;
use vendor_patch::registry::Registry;
use vendor_patch::selection;
use vendor_patch::session::ApplySession;
use vendor_patch::suggestions;

/// Apply the configured patch set to the vendored tree
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Patch groups to apply, as whitespace-separated tokens (e.g. "hotfix msvc").
    ///
    /// Overrides the configuration file. `all` activates every group.
    #[arg(short, long, value_name = "TOKENS", env = "VENDOR_PATCH_SET")]
    pub patches: Option<String>,

    /// Path to the selection configuration file.
    #[arg(short, long, value_name = "FILE", env = "VENDOR_PATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// The vendored tree directory patches are applied to.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_TREE")]
    pub tree: Option<PathBuf>,

    /// The patch store directory holding one `<identifier>.patch` per patch.
    #[arg(long, value_name = "DIR", env = "VENDOR_PATCH_STORE")]
    pub store: Option<PathBuf>,

    /// Show what would be applied without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the apply command
pub fn execute(args: ApplyArgs, color: &str) -> Result<()> {
    let start_time = Instant::now();
    let out = OutputConfig::from_env_and_flag(color);

    // Determine the requested token string: flag/env first, then config file.
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    let requested = match args.patches.clone() {
        Some(tokens) => Some(tokens),
        None => config::from_file(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config {}: {}", config_path.display(), e)
        })?,
    };

    let registry = Registry::builtin();
    let picked = selection::resolve_or_default(&registry, requested.as_deref());

    if !args.quiet && args.verbose {
        println!(
            "Requested tokens: {}",
            requested.as_deref().unwrap_or(defaults::DEFAULT_SELECTION)
        );
        println!("Resolved selection: {}", picked.join(" "));
    }

    if picked.is_empty() {
        // Unrecognized tokens resolve to nothing, so an empty selection is a
        // successful no-op, not an error.
        if !args.quiet {
            println!("No patch groups matched; nothing to apply.");
        }
        return Ok(());
    }

    if args.dry_run {
        if !args.quiet {
            println!("DRY RUN - no patches will be applied");
            for (index, patch) in picked.iter().enumerate() {
                println!("[{}/{}] would apply {}", index + 1, picked.len(), patch);
            }
        }
        return Ok(());
    }

    let tree = args.tree.clone().unwrap_or_else(defaults::default_tree_dir);
    let store = args
        .store
        .clone()
        .unwrap_or_else(defaults::default_store_dir);

    if !tree.exists() {
        return Err(suggestions::tree_not_found(&tree));
    }
    if !store.exists() {
        return Err(suggestions::store_not_found(&store));
    }

    let applier = ToolPatchApplier::new(tree, store);
    let session = ApplySession::new(&applier);

    let result = session.run(&picked, |index, total, patch| {
        if !args.quiet {
            println!("[{}/{}] applying {}", index + 1, total, patch);
        }
    });

    match result {
        Ok(applied) => {
            if !args.quiet {
                let duration = start_time.elapsed();
                println!(
                    "{} Applied {} patch(es) in {:.2}s",
                    emoji(&out, "✅", "[OK]"),
                    applied,
                    duration.as_secs_f64()
                );
            }
            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Apply failed", emoji(&out, "❌", "[FAIL]"));
            }
            Err(e.into())
        }
    }
}
