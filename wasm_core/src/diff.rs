//! Line comparison tools. The primary `diff_lines` is a deliberately naive
//! index-aligned comparison (no insertion/deletion alignment); the unified
//! diff view for copy/paste uses a real text diff.

use serde::Serialize;
use similar::TextDiff;
use wasm_bindgen::prelude::*;

use crate::to_js_value;

/// One row of the side-by-side view. `index` is 1-based.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub index: usize,
    pub same: bool,
    pub left: String,
    pub right: String,
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Splits both inputs on line boundaries, pads the shorter side with empty
/// lines, and compares index-for-index. Once line counts diverge because of
/// insertions this will misreport the tail; that is a known simplification.
pub fn diff_lines(a: &str, b: &str) -> Vec<DiffEntry> {
    let left_lines = split_lines(a);
    let right_lines = split_lines(b);
    let max = left_lines.len().max(right_lines.len());
    let mut entries = Vec::with_capacity(max);
    for idx in 0..max {
        let left = left_lines.get(idx).copied().unwrap_or("");
        let right = right_lines.get(idx).copied().unwrap_or("");
        entries.push(DiffEntry {
            index: idx + 1,
            same: left == right,
            left: left.to_string(),
            right: right.to_string(),
        });
    }
    entries
}

/// Git-style unified diff with three lines of context, for the
/// copy-to-clipboard output of the diff tool.
pub fn unified_diff(old_text: &str, new_text: &str, old_name: &str, new_name: &str) -> String {
    let diff = TextDiff::from_lines(old_text, new_text);
    diff.unified_diff()
        .context_radius(3)
        .header(old_name, new_name)
        .to_string()
}

#[wasm_bindgen]
pub fn diff_text_lines(a: &str, b: &str) -> Result<JsValue, JsValue> {
    to_js_value(&diff_lines(a, b))
}

#[wasm_bindgen]
pub fn diff_text_unified(
    old_text: &str,
    new_text: &str,
    old_name: &str,
    new_name: &str,
) -> String {
    unified_diff(old_text, new_text, old_name, new_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_aligned_comparison() {
        let entries = diff_lines("a\nb", "a\nc");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 1);
        assert!(entries[0].same);
        assert_eq!(entries[1].index, 2);
        assert!(!entries[1].same);
        assert_eq!(entries[1].left, "b");
        assert_eq!(entries[1].right, "c");
    }

    #[test]
    fn shorter_side_is_padded_with_empty_lines() {
        let entries = diff_lines("a", "a\nb\nc");
        assert_eq!(entries.len(), 3);
        assert!(entries[0].same);
        assert_eq!(entries[2].left, "");
        assert_eq!(entries[2].right, "c");
        assert!(!entries[2].same);
    }

    #[test]
    fn crlf_endings_are_normalized() {
        let entries = diff_lines("a\r\nb", "a\nb");
        assert!(entries.iter().all(|entry| entry.same));
    }

    #[test]
    fn identical_inputs_have_no_differences() {
        let entries = diff_lines("x\ny", "x\ny");
        assert!(entries.iter().all(|entry| entry.same));
    }

    #[test]
    fn unified_diff_mentions_changed_lines() {
        let out = unified_diff("line 1\nline 2\nline 3\n", "line 1\nline 2\nline 4\n", "a/file", "b/file");
        assert!(out.contains("--- a/file"));
        assert!(out.contains("+++ b/file"));
        assert!(out.contains("-line 3"));
        assert!(out.contains("+line 4"));
        assert!(out.contains("@@"));
    }
}
