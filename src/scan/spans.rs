//! Documentation-comment span extraction and content splicing.
//!
//! Matching is a regex heuristic over raw text, not a C# parse. A span is a
//! `/// <summary>` block with its closing tag and any number of `///`
//! continuation lines, and must be followed by optional whitespace and a
//! newline. Matching is first-match-wins in textual order; overlapping or
//! nested blocks are undefined, and consecutive blocks separated only by
//! whitespace merge into one span because the continuation rule accepts any
//! `///` line.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `\s*\n` tail is consumed (the `regex` crate has no lookahead) and the
/// span itself is capture group 1; splicing works on group-1 ranges so the
/// consumed tail stays part of the surrounding gap text.
#[expect(clippy::expect_used, reason = "the pattern is a compile-time constant")]
static DOC_COMMENT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(/// <summary>\s*///.*?\s*/// </summary>(?:\s*///.*?)*)\s*\n")
        .expect("doc-comment pattern must compile")
});

/// A documentation-comment block located in file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSpan {
    start: usize,
    end: usize,
}

impl CommentSpan {
    /// Byte offset of the first character of the block.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Byte offset one past the last character of the block.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The block's text within `content`.
    ///
    /// Spans are only meaningful against the content they were extracted
    /// from; any other input yields an empty block.
    #[must_use]
    pub fn text(self, content: &str) -> &str {
        content.get(self.start..self.end).unwrap_or("")
    }
}

/// Extracts the ordered, non-overlapping documentation-comment spans from
/// `content`.
#[must_use]
pub fn extract_comment_spans(content: &str) -> Vec<CommentSpan> {
    DOC_COMMENT_BLOCK
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|span| CommentSpan {
            start: span.start(),
            end: span.end(),
        })
        .collect()
}

/// Reassembles file content from the untouched gaps around `spans`
/// interleaved with `replacements`, in original left-to-right order.
///
/// Spans and replacements are paired positionally; surplus entries on
/// either side are ignored.
#[must_use]
pub fn splice_replacements(
    content: &str,
    spans: &[CommentSpan],
    replacements: &[String],
) -> String {
    let mut updated = String::with_capacity(content.len());
    let mut cursor = 0usize;

    for (span, replacement) in spans.iter().zip(replacements) {
        updated.push_str(content.get(cursor..span.start()).unwrap_or(""));
        updated.push_str(replacement);
        cursor = span.end();
    }

    updated.push_str(content.get(cursor..).unwrap_or(""));
    updated
}
