//! Remote rewrite service: one request per documentation-comment block.

mod model;
mod openai;
mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use model::{RewriteMode, RewriteModeParseError, RewriteRequest};
pub use openai::{OpenAiRewriteConfig, OpenAiRewriteService};
pub use service::RewriteService;
