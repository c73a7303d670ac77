//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the declared patch
//! groups and the patches each contributes, in the fixed order an apply
//! session would use.
//!
//! With a selection (from `--patches` or the configuration file) the listing
//! marks which patches the selection resolves to. Since unrecognized
//! selection tokens are silently ignored rather than rejected, this command
//! is the operator's way to see what a given token string actually selects.
//!
//! This command is a safe, read-only operation that does not touch the
//! vendored tree.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vendor_patch::config;
use vendor_patch::defaults::DEFAULT_CONFIG_FILENAME;
use vendor_patch::registry::Registry;
use vendor_patch::selection;

/// List patch groups and the patches they contribute
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Patch-set tokens to preview (defaults to the configured selection).
    #[arg(short, long, value_name = "TOKENS", env = "VENDOR_PATCH_SET")]
    pub patches: Option<String>,

    /// Path to the selection configuration file.
    #[arg(short, long, value_name = "FILE", env = "VENDOR_PATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show only the resolved selection, one patch per line.
    #[arg(long)]
    pub resolved: bool,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    let requested = match args.patches {
        Some(tokens) => Some(tokens),
        None => config::from_file(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config {}: {}", config_path.display(), e)
        })?,
    };

    let registry = Registry::builtin();
    let picked = selection::resolve_or_default(&registry, requested.as_deref());

    if args.resolved {
        for patch in &picked {
            println!("{patch}");
        }
        return Ok(());
    }

    for group in registry.groups() {
        println!("{}:", group.name);
        for patch in &group.patches {
            let marker = if picked.iter().any(|p| p == patch) {
                "*"
            } else {
                " "
            };
            println!("  {marker} {patch}");
        }
    }
    println!();
    println!(
        "{} of {} patch(es) selected (* = in current selection)",
        picked.len(),
        registry
            .groups()
            .iter()
            .map(|g| g.patches.len())
            .sum::<usize>()
    );

    Ok(())
}
