//! Optional external-formatter hook run after a successful rewrite.

use std::process::Command;

use camino::Utf8Path;

/// External code formatter invoked per modified file as
/// `<program> --folder --include <file_path>`.
///
/// Output is captured; a non-zero exit or spawn failure is logged and never
/// rolls back the rewrite or blocks other files.
#[derive(Debug, Clone)]
pub struct FormatHook {
    program: String,
}

impl FormatHook {
    /// Creates a hook invoking `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Formats one file, logging any failure.
    pub fn run(&self, path: &Utf8Path) {
        let result = Command::new(&self.program)
            .args(["--folder", "--include", path.as_str()])
            .output();

        match result {
            Ok(output) if output.status.success() => {
                tracing::debug!("formatter finished for {path}");
            }
            Ok(output) => {
                tracing::warn!(
                    "formatter exited with {} for {path}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr)
                );
            }
            Err(error) => {
                tracing::warn!("failed to launch formatter '{}' for {path}: {error}", self.program);
            }
        }
    }
}
