// SPDX-License-Identifier: MIT
//! Path-tree text codec.
//!
//! Converts between the indentation-based text form users edit and the flat
//! slash-joined path lists templates store. Everything here is pure, and
//! parsing never fails: malformed indentation degrades through the stack
//! unwind rather than raising an error.

use std::collections::BTreeSet;

/// Convert indented text to full paths, one per non-blank line, in input
/// order.
///
/// A line's depth is its count of leading whitespace characters; its parent
/// is the nearest preceding line with strictly smaller indent. Lines at
/// equal indent are siblings. Duplicate lines produce duplicate paths;
/// deduplication is the renderers' job.
///
/// Examples:
///   "src\n    components" → ["src", "src/components"]
pub fn parse_indented_lines(text: &str) -> Vec<String> {
    let mut paths = Vec::new();
    // Ancestor chain of the current line: (indent, segment name) per level.
    let mut stack: Vec<(usize, &str)> = Vec::new();

    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();

        // Unwind siblings and anything at least as deep as this line.
        while stack.last().is_some_and(|&(depth, _)| depth >= indent) {
            stack.pop();
        }
        stack.push((indent, name));

        let segments: Vec<&str> = stack.iter().map(|&(_, segment)| segment).collect();
        paths.push(segments.join("/"));
    }

    paths
}

/// The set of all ancestor prefixes implied by a set of leaf paths.
///
/// `["a/b/c"]` closes to `{"a", "a/b", "a/b/c"}`. Iteration order is plain
/// lexicographic on the full slash-joined string.
pub fn path_closure(paths: &[String]) -> BTreeSet<String> {
    let mut closed = BTreeSet::new();
    for path in paths {
        let segments: Vec<&str> = path.split('/').collect();
        for end in 1..=segments.len() {
            closed.insert(segments[..end].join("/"));
        }
    }
    closed
}

/// Render full paths as a tree-glyph preview.
///
/// The closure of the input is sorted lexicographically and printed one
/// entry per line: roots carry a folder marker, deeper entries an indent of
/// four spaces per depth plus a connector. Connectors are cosmetic; every
/// entry renders as a last child regardless of its actual sibling position.
pub fn format_paths_to_tree(paths: &[String]) -> String {
    if paths.is_empty() {
        return "  No folders to preview".to_string();
    }

    let mut lines = Vec::new();
    for path in path_closure(paths) {
        let segments: Vec<&str> = path.split('/').collect();
        let depth = segments.len() - 1;
        let name = segments[depth];
        if depth == 0 {
            lines.push(format!("📁  {name}"));
        } else {
            lines.push(format!("{}└── {name}", "    ".repeat(depth)));
        }
    }
    lines.join("\n")
}

/// Render full paths as round-trip-editable indented text.
///
/// Inverse of [`parse_indented_lines`] up to ordering: feeding the output
/// back reconstructs the same path *set*, in closure order.
pub fn format_paths_to_indented(paths: &[String]) -> String {
    if paths.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    for path in path_closure(paths) {
        let segments: Vec<&str> = path.split('/').collect();
        let depth = segments.len() - 1;
        lines.push(format!("{}{}", "    ".repeat(depth), segments[depth]));
    }
    lines.join("\n")
}
