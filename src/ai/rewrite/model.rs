//! Shared domain models for documentation-comment rewriting.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Instruction profile applied to every comment block in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Correct and improve the comments for clarity and precision.
    Improve,
    /// Fix only grammar, leaving fixed-prefix summary lines and
    /// constructor-introduction lines untouched.
    Grammar,
}

impl RewriteMode {
    /// Human-readable label used on the command line and in output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improve => "improve",
            Self::Grammar => "grammar",
        }
    }
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Parse error for [`RewriteMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported rewrite mode '{value}': valid options are 'improve' or 'grammar'")]
pub struct RewriteModeParseError {
    value: String,
}

impl FromStr for RewriteMode {
    type Err = RewriteModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "improve" => Ok(Self::Improve),
            "grammar" => Ok(Self::Grammar),
            _ => Err(RewriteModeParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Input payload for one rewrite call: a single comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    mode: RewriteMode,
    span_text: String,
}

impl RewriteRequest {
    /// Constructs a request from the mode and the block's exact text.
    #[must_use]
    pub fn new(mode: RewriteMode, span_text: impl Into<String>) -> Self {
        Self {
            mode,
            span_text: span_text.into(),
        }
    }

    /// Requested rewrite mode.
    #[must_use]
    pub const fn mode(&self) -> RewriteMode {
        self.mode
    }

    /// The comment block exactly as it appears in the source file.
    #[must_use]
    pub const fn span_text(&self) -> &str {
        self.span_text.as_str()
    }
}
