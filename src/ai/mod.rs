//! AI integration for documentation-comment rewriting.

pub mod rewrite;

pub use rewrite::{
    OpenAiRewriteConfig, OpenAiRewriteService, RewriteMode, RewriteModeParseError, RewriteRequest,
    RewriteService,
};
