//! # Vendor Patch Library
//!
//! This library provides the core functionality for maintaining a named set
//! of source-code patches applied on top of a vendored third-party source
//! tree. It is designed to be used by the `vendor-patch` command-line tool
//! but can also be integrated into build tooling that needs to drive the
//! same patch lifecycle.
//!
//! ## Quick Example
//!
//! ```
//! use vendor_patch::registry::Registry;
//! use vendor_patch::selection;
//!
//! let registry = Registry::builtin();
//!
//! // Resolve a requested patch set into an ordered, deduplicated selection.
//! let picked = selection::resolve(&registry, "msvc exports");
//! assert_eq!(picked, vec!["basic_msvc_compat", "read_module_exports"]);
//!
//! // The wildcard activates every group; trailing comments are stripped.
//! let everything = selection::resolve(&registry, "all # full set");
//! assert_eq!(everything.len(), 6);
//! ```
//!
//! ## Core Concepts
//!
//! - **Registry (`registry`)**: the fixed, ordered declaration of patch
//!   groups and the identifiers each group contributes.
//! - **Selection (`selection`)**: resolution of a raw token string into the
//!   ordered, deduplicated list of patch identifiers to apply. `all` is a
//!   wildcard that activates every group.
//! - **Patch application (`patcher`, `session`)**: the `PatchApplier`
//!   capability applies one diff via the external patch tool; `ApplySession`
//!   drives it over a whole selection, sequentially and fail-fast.
//! - **Tree lifecycle (`tree`)**: staging, diffing, capturing, and resetting
//!   the vendored tree, delegated to the system `git`.
//! - **Configuration (`config`, `defaults`)**: the requested patch set as a
//!   plain token string with inline comments.
//!
//! ## Execution Flow
//!
//! A typical apply run: load the configured token string, resolve it against
//! the registry, then apply each selected patch to the vendored tree in
//! declaration order, stopping at the first failure. The tree lifecycle
//! operations are independent of apply sessions and may be invoked at any
//! time; recovery from a failed session is an explicit `reset`.

pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod patcher;
pub mod registry;
pub mod selection;
pub mod session;
pub mod suggestions;
pub mod tree;

#[cfg(test)]
mod selection_proptest;
