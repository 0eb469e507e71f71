//! Gloss rewrites C# XML documentation comments with an OpenAI-compatible
//! model.
//!
//! The crate scans a directory tree for eligible source files, extracts
//! `/// <summary>` documentation blocks with a regex heuristic, sends each
//! block to a chat-completions endpoint, and splices the rewritten text
//! back into the file, leaving every byte outside the matched spans
//! untouched. Files are processed concurrently by a fixed-size worker pool;
//! blocks within a file are rewritten sequentially in document order.

pub mod ai;
pub mod config;
pub mod error;
pub mod run;
pub mod scan;

pub use config::{GlossConfig, IncludeSubdirectories};
pub use error::GlossError;
