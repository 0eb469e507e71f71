//! Service abstraction for the remote rewrite dependency.

use crate::error::GlossError;

use super::model::RewriteRequest;

/// Narrow contract for the remote rewrite dependency: submit one comment
/// block, receive its replacement text.
///
/// The per-file processor calls this once per span, sequentially in
/// document order, so implementations never see concurrent requests for
/// the same file. Implementations must be shareable across worker threads.
pub trait RewriteService: Send + Sync + std::fmt::Debug {
    /// Generates replacement text for a comment block.
    ///
    /// # Errors
    ///
    /// Returns [`GlossError`] when the provider call fails; the caller
    /// abandons the whole file without writing anything.
    fn rewrite_text(&self, request: &RewriteRequest) -> Result<String, GlossError>;
}
