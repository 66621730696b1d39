//! Translator comment association.
//!
//! A translator comment starts with the configured marker right after the
//! comment opener (`//; note`, `/*; note */`, `{/*; note */}`). A call gets:
//!
//! 1. translator comments from the block of comment-only lines directly above
//!    it, and
//! 2. translator comments on its own line directly before the call, with
//!    nothing but whitespace, JSX braces or other comments in between.
//!
//! ```tsx
//! //; Shown on the checkout button
//! //; Keep it short
//! const label = _t("Pay now");
//!
//! <div>
//!   {/*; Page heading */}
//!   {_t("Welcome")}
//! </div>
//! ```
//!
//! Blank lines and code lines end the block, and so does a comment that
//! starts after code on an earlier line. Ordinary comments inside the block
//! are skipped without ending it.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use swc_common::{BytePos, SourceFile, SourceMap};

use crate::core::parsers::jsx::ExtractedComments;

/// Maximum number of source lines to walk upwards from a call.
pub const MAX_COMMENT_CHAIN_LINES: usize = 10;

#[derive(Debug, Clone)]
struct IndexedComment {
    /// First line of the comment (1-indexed).
    start_line: usize,
    lo: BytePos,
    /// End position (exclusive).
    hi: BytePos,
    /// Stripped translator text, `None` for ordinary comments.
    text: Option<String>,
}

/// Per-file index of comments, built once before the walk.
#[derive(Debug, Default)]
pub struct TranslatorComments {
    /// Comments keyed by the line they end on (1-indexed), in source order.
    by_end_line: BTreeMap<usize, Vec<IndexedComment>>,
    /// Lines holding nothing but comments, whitespace and JSX braces.
    comment_only_lines: HashSet<usize>,
    source_file: Option<Arc<SourceFile>>,
}

impl TranslatorComments {
    pub fn collect(comments: &ExtractedComments, source_map: &SourceMap, marker: &str) -> Self {
        let mut by_end_line: BTreeMap<usize, Vec<IndexedComment>> = BTreeMap::new();
        // Character ranges covered by comments, per line.
        let mut covered: BTreeMap<usize, Vec<(usize, usize)>> = BTreeMap::new();
        let mut source_file = None;

        for cmt in comments.all_sorted() {
            let lo = source_map.lookup_char_pos(cmt.span.lo);
            let hi = source_map.lookup_char_pos(cmt.span.hi);

            for line in lo.line..=hi.line {
                let start = if line == lo.line { lo.col.0 } else { 0 };
                let end = if line == hi.line { hi.col.0 } else { usize::MAX };
                covered.entry(line).or_default().push((start, end));
            }

            by_end_line.entry(hi.line).or_default().push(IndexedComment {
                start_line: lo.line,
                lo: cmt.span.lo,
                hi: cmt.span.hi,
                text: translator_text(&cmt.text, marker),
            });
            source_file.get_or_insert(lo.file);
        }

        let mut comment_only_lines = HashSet::new();
        if let Some(file) = &source_file {
            for (line, ranges) in &covered {
                let Some(text) = file.get_line(line - 1) else {
                    continue;
                };
                let only_comments = text.chars().enumerate().all(|(idx, c)| {
                    c.is_whitespace()
                        || matches!(c, '{' | '}')
                        || ranges.iter().any(|&(start, end)| idx >= start && idx < end)
                });
                if only_comments {
                    comment_only_lines.insert(*line);
                }
            }
        }

        Self {
            by_end_line,
            comment_only_lines,
            source_file,
        }
    }

    /// Translator comments for a call starting at `pos` on `line` (1-indexed).
    pub fn comments_for(&self, line: usize, pos: BytePos) -> Vec<String> {
        let mut result = self.comments_above(line);
        result.extend(self.comments_before(line, pos));
        result
    }

    /// The comment-only block ending on the line above `line`.
    fn comments_above(&self, line: usize) -> Vec<String> {
        let mut blocks: Vec<Vec<String>> = Vec::new();
        let mut current = line.saturating_sub(1);
        let mut walked = 0;

        while current > 0 && self.comment_only_lines.contains(&current) {
            let Some(entries) = self.by_end_line.get(&current) else {
                break;
            };
            // A comment opened after code belongs to that code.
            let owned = entries
                .iter()
                .rposition(|c| !self.comment_only_lines.contains(&c.start_line));
            let accepted = match owned {
                Some(idx) => &entries[idx + 1..],
                None => entries.as_slice(),
            };
            let top = accepted
                .iter()
                .map(|c| c.start_line)
                .min()
                .unwrap_or(current);

            walked += current - top + 1;
            if walked > MAX_COMMENT_CHAIN_LINES {
                break;
            }
            blocks.push(accepted.iter().filter_map(|c| c.text.clone()).collect());
            if owned.is_some() {
                break;
            }
            current = top.saturating_sub(1);
        }

        blocks.into_iter().rev().flatten().collect()
    }

    /// The run of comments on `line` that sits directly before `pos`.
    fn comments_before(&self, line: usize, pos: BytePos) -> Vec<String> {
        let (Some(entries), Some(file)) = (self.by_end_line.get(&line), &self.source_file) else {
            return Vec::new();
        };

        let mut run = Vec::new();
        let mut boundary = pos;
        for c in entries.iter().rev().filter(|c| c.hi <= pos) {
            let gap = source_between(file, c.hi, boundary);
            if !gap.chars().all(|ch| ch.is_whitespace() || matches!(ch, '{' | '}')) {
                break;
            }
            if c.start_line != line && !self.comment_only_lines.contains(&c.start_line) {
                break;
            }
            run.push(c);
            boundary = c.lo;
        }

        run.into_iter().rev().filter_map(|c| c.text.clone()).collect()
    }
}

fn source_between(file: &SourceFile, lo: BytePos, hi: BytePos) -> &str {
    let start = (lo.0 - file.start_pos.0) as usize;
    let end = (hi.0 - file.start_pos.0) as usize;
    file.src.get(start..end).unwrap_or_default()
}

/// Strip the marker from a raw comment text, if it is a translator comment.
pub fn translator_text(raw: &str, marker: &str) -> Option<String> {
    let rest = raw.strip_prefix(marker)?.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_owned())
    }
}
