//! Shared `rstest` fixture for rewrite request tests.

use rstest::fixture;

use crate::ai::rewrite::{RewriteMode, RewriteRequest};

#[fixture]
pub(crate) fn rewrite_request() -> RewriteRequest {
    RewriteRequest::new(
        RewriteMode::Improve,
        "/// <summary>\n/// Gets a value.\n/// </summary>",
    )
}
