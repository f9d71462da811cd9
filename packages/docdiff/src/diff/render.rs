//! Line-oriented diff rendering.
//!
//! A presentation artifact independent of the similarity score: the
//! two texts are split on newlines, aligned with the block matcher,
//! and rendered with side-by-side line numbers and change markers.

use serde::Serialize;

use crate::diff::matcher::{OpTag, SequenceMatcher};

/// Classification of one diff row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Unchanged,
    Deleted,
    Inserted,
}

/// One row of the aligned diff.
#[derive(Debug, Clone, Serialize)]
pub struct DiffLine {
    pub tag: DiffTag,
    /// 1-based line number in the left text, if the row exists there
    pub left: Option<usize>,
    /// 1-based line number in the right text, if the row exists there
    pub right: Option<usize>,
    pub text: String,
}

/// Align two texts line by line.
///
/// Replaced regions are emitted as the deleted lines followed by the
/// inserted lines.
pub fn diff_lines(a: &str, b: &str) -> Vec<DiffLine> {
    let a_lines: Vec<&str> = a.lines().collect();
    let b_lines: Vec<&str> = b.lines().collect();
    let matcher = SequenceMatcher::new(&a_lines, &b_lines);

    let mut rows = Vec::new();
    for op in matcher.opcodes() {
        match op.tag {
            OpTag::Equal => {
                for offset in 0..(op.a_end - op.a_start) {
                    rows.push(DiffLine {
                        tag: DiffTag::Unchanged,
                        left: Some(op.a_start + offset + 1),
                        right: Some(op.b_start + offset + 1),
                        text: a_lines[op.a_start + offset].to_owned(),
                    });
                }
            }
            OpTag::Delete => push_deleted(&mut rows, &a_lines, op.a_start, op.a_end),
            OpTag::Insert => push_inserted(&mut rows, &b_lines, op.b_start, op.b_end),
            OpTag::Replace => {
                push_deleted(&mut rows, &a_lines, op.a_start, op.a_end);
                push_inserted(&mut rows, &b_lines, op.b_start, op.b_end);
            }
        }
    }
    rows
}

fn push_deleted(rows: &mut Vec<DiffLine>, lines: &[&str], start: usize, end: usize) {
    for index in start..end {
        rows.push(DiffLine {
            tag: DiffTag::Deleted,
            left: Some(index + 1),
            right: None,
            text: lines[index].to_owned(),
        });
    }
}

fn push_inserted(rows: &mut Vec<DiffLine>, lines: &[&str], start: usize, end: usize) {
    for index in start..end {
        rows.push(DiffLine {
            tag: DiffTag::Inserted,
            left: None,
            right: Some(index + 1),
            text: lines[index].to_owned(),
        });
    }
}

/// Render the aligned diff as human-readable text.
///
/// Format: left line number, right line number, marker, line text.
/// A blank number column means the line does not exist on that side.
pub fn render_diff(a: &str, b: &str) -> String {
    let mut out = String::new();
    for line in diff_lines(a, b) {
        let left = line.left.map(|n| n.to_string()).unwrap_or_default();
        let right = line.right.map(|n| n.to_string()).unwrap_or_default();
        let marker = match line.tag {
            DiffTag::Unchanged => ' ',
            DiffTag::Deleted => '-',
            DiffTag::Inserted => '+',
        };
        out.push_str(&format!("{left:>5} {right:>5} {marker} {}\n", line.text));
    }
    out
}
