//! Similarity scoring and diff rendering between two text bodies.
//!
//! The numeric score and the rendered diff are independent artifacts:
//! `similarity` runs over raw characters, `render_diff` over lines, and
//! a caller needing only one never pays for the other.

use serde::Serialize;

pub mod matcher;
pub mod render;

pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};
pub use render::{diff_lines, render_diff, DiffLine, DiffTag};

/// Similarity score and rendered diff for one comparison.
///
/// Transient; computed per request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Normalized similarity in `[0, 100]`
    pub similarity_percent: f64,

    /// Line-oriented human-readable diff
    pub diff: String,
}

/// Similarity between two texts in `[0, 100]`, over raw characters.
///
/// Both texts empty is defined as 100 (vacuously identical); exactly
/// one empty is 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a_chars, &b_chars).ratio() * 100.0
}

/// Compute both the similarity score and the rendered diff.
pub fn compare(a: &str, b: &str) -> ComparisonResult {
    ComparisonResult {
        similarity_percent: similarity(a, b),
        diff: render_diff(a, b),
    }
}
