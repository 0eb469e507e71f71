//! Test-support stubs for the rewrite service seam.

use crate::error::GlossError;

use super::{RewriteRequest, RewriteService};

/// Deterministic rewrite-service stub used by unit and integration tests.
#[derive(Debug, Clone)]
pub struct StubRewriteService {
    response: Result<String, GlossError>,
}

impl StubRewriteService {
    /// Creates a stub that always returns the provided replacement text.
    #[must_use]
    pub fn success(replacement: impl Into<String>) -> Self {
        Self {
            response: Ok(replacement.into()),
        }
    }

    /// Creates a stub that always returns the provided error.
    #[must_use]
    pub const fn failure(error: GlossError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl RewriteService for StubRewriteService {
    fn rewrite_text(&self, _request: &RewriteRequest) -> Result<String, GlossError> {
        self.response.clone()
    }
}

/// Stub that uppercases each block, giving a distinct deterministic
/// replacement per span so splice ordering is observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercasingRewriteService;

impl RewriteService for UppercasingRewriteService {
    fn rewrite_text(&self, request: &RewriteRequest) -> Result<String, GlossError> {
        Ok(request.span_text().to_uppercase())
    }
}

/// Stub that fails for blocks containing a marker and uppercases the rest,
/// used to prove per-file failures do not leak into sibling files.
#[derive(Debug, Clone)]
pub struct MarkerFailingRewriteService {
    marker: String,
}

impl MarkerFailingRewriteService {
    /// Creates a stub failing every block whose text contains `marker`.
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl RewriteService for MarkerFailingRewriteService {
    fn rewrite_text(&self, request: &RewriteRequest) -> Result<String, GlossError> {
        if request.span_text().contains(self.marker.as_str()) {
            return Err(GlossError::Network {
                message: "simulated transport failure".to_owned(),
            });
        }

        Ok(request.span_text().to_uppercase())
    }
}
