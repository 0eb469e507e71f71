//! Filesystem scanning: eligible-file enumeration and comment-span
//! extraction.

pub mod spans;
pub mod walker;

pub use spans::{CommentSpan, extract_comment_spans, splice_replacements};
pub use walker::collect_eligible_files;
