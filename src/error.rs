//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `vendor-patch` application. It uses the `thiserror` library to create an
//! `Error` enum covering all anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum representing all errors that can occur within
//!   the application: patch application failures, missing patch artifacts,
//!   version-control command failures, unavailable external tools, and I/O.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! A failed patch application is never retried: partial hunks may already be
//! applied, so every failure here is terminal for the current invocation.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for vendor-patch operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external patch tool exited nonzero while applying a named patch.
    ///
    /// Carries the failing patch identifier and the tool's combined
    /// stdout/stderr diagnostics. The vendored tree is left in whatever
    /// partially-patched state the failing attempt produced.
    #[error("Failed to apply patch '{patch}':\n{output}")]
    PatchApply { patch: String, output: String },

    /// A resolved patch identifier has no diff file in the patch store.
    #[error("Patch file not found for '{patch}': {}", path.display())]
    PatchMissing { patch: String, path: PathBuf },

    /// A version-control command exited nonzero.
    #[error("Git command failed: git {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// An external tool could not be invoked at all (missing binary,
    /// permission denied).
    #[error("External tool '{tool}' could not be run: {message}")]
    Tool { tool: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
