//! Application configuration parsed from the command line and environment.
//!
//! The invocation is a required base directory followed by two optional
//! positional values,
//!
//! ```text
//! gloss <BASE_DIRECTORY> [MAX_WORKERS=1] [INCLUDE_SUBDIRECTORIES=true]
//! ```
//!
//! plus long flags for the rewrite mode, the source extension, the
//! OpenAI-compatible endpoint settings, and the optional post-format hook.
//! The API credential is resolved from `--api-key` with a fallback to the
//! `OPENAI_API_KEY` environment variable; its absence is fatal before any
//! filesystem access.

use std::convert::Infallible;
use std::env;
use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;

use crate::ai::rewrite::RewriteMode;
use crate::error::GlossError;

/// Recursion toggle parsed from a positional token.
///
/// Only the literal token `true` (compared case-insensitively) enables
/// recursion; any other value, including typos, disables it. Parsing
/// therefore never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludeSubdirectories(bool);

impl IncludeSubdirectories {
    /// Constructs the toggle from an explicit boolean.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// Whether subdirectories should be scanned.
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.0
    }
}

impl FromStr for IncludeSubdirectories {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self(raw.trim().eq_ignore_ascii_case("true")))
    }
}

impl fmt::Display for IncludeSubdirectories {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(if self.0 { "true" } else { "false" })
    }
}

/// Command-line configuration for a rewrite run.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gloss",
    about = "Rewrites C# XML documentation comments with an OpenAI-compatible model",
    version
)]
pub struct GlossConfig {
    /// Root directory scanned for eligible source files.
    pub base_directory: Utf8PathBuf,

    /// Number of concurrent file workers.
    #[arg(default_value_t = 1)]
    pub max_workers: usize,

    /// Whether subdirectories are scanned; only the literal token "true"
    /// (case-insensitive) enables recursion.
    #[arg(default_value_t = IncludeSubdirectories::new(true))]
    pub include_subdirectories: IncludeSubdirectories,

    /// Rewrite instruction profile applied to every comment block.
    #[arg(long, default_value_t = RewriteMode::Improve)]
    pub mode: RewriteMode,

    /// Source-file extension that makes a file eligible.
    #[arg(long, default_value = "cs")]
    pub extension: String,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub ai_base_url: String,

    /// Model identifier sent in chat-completions requests.
    #[arg(long, default_value = "gpt-4o")]
    pub ai_model: String,

    /// HTTP timeout for rewrite requests, in seconds.
    #[arg(long, default_value_t = 120)]
    pub ai_timeout_seconds: u64,

    /// API key for the rewrite service; falls back to `OPENAI_API_KEY`.
    #[arg(long)]
    pub api_key: Option<String>,

    /// External formatter program run on each modified file as
    /// `<program> --folder --include <file_path>`.
    #[arg(long)]
    pub format_command: Option<String>,
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            base_directory: Utf8PathBuf::from("."),
            max_workers: 1,
            include_subdirectories: IncludeSubdirectories::new(true),
            mode: RewriteMode::Improve,
            extension: "cs".to_owned(),
            ai_base_url: "https://api.openai.com/v1".to_owned(),
            ai_model: "gpt-4o".to_owned(),
            ai_timeout_seconds: 120,
            api_key: None,
            format_command: None,
        }
    }
}

impl GlossConfig {
    /// Resolves the API key from configuration or the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GlossError::MissingApiKey`] when no source provides a
    /// value.
    pub fn resolve_api_key(&self) -> Result<String, GlossError> {
        self.api_key
            .clone()
            .or_else(|| env::var("OPENAI_API_KEY").ok())
            .ok_or(GlossError::MissingApiKey)
    }

    /// The configured extension without any leading dot.
    ///
    /// Accepts both `cs` and `.cs` spellings on the command line.
    #[must_use]
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
