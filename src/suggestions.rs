//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Vendored tree not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::tree_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when the vendored tree directory is missing.
///
/// Includes hints about:
/// - The expected location of the tree
/// - Using the --tree flag
/// - Using the VENDOR_PATCH_TREE environment variable
pub fn tree_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Vendored tree not found: {path}\n\n\
         hint: Check out the vendored sources next to this tool\n\
         hint: Use --tree to point at a different directory\n\
         hint: Set VENDOR_PATCH_TREE environment variable",
        path = path.display()
    )
}

/// Generate an error for when the patch store directory is missing.
///
/// Includes hints about the --store flag and how the store is populated.
pub fn store_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Patch store not found: {path}\n\n\
         hint: Use --store to point at the directory holding *.patch files\n\
         hint: Run 'vendor-patch update <name>' to capture a first patch\n\
         hint: Set VENDOR_PATCH_STORE environment variable",
        path = path.display()
    )
}

/// Generate an error for a patch identifier that no registry group declares.
///
/// Suggests a close match when the name looks like a typo.
pub fn unknown_patch(name: &str, declared: &[&str]) -> anyhow::Error {
    let suggestion = find_similar(name, declared);
    let did_you_mean = suggestion
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Unknown patch identifier: {name}{did_you_mean}\n\n\
         Declared patches are: {patches}\n\
         hint: Run 'vendor-patch ls' to see every group and patch\n\
         hint: Use --force to capture a patch that is not declared yet",
        patches = declared.join(", ")
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
