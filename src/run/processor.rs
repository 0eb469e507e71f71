//! Per-file processing: extract spans, rewrite them sequentially, splice,
//! and write the file back once.

use std::fs;

use camino::Utf8Path;

use crate::ai::rewrite::{RewriteMode, RewriteRequest, RewriteService};
use crate::error::GlossError;
use crate::scan::{extract_comment_spans, splice_replacements};

use super::formatter::FormatHook;
use super::totals::RunTotals;

/// Everything a file task needs besides its path, shared across workers.
#[derive(Debug, Clone, Copy)]
pub struct FileTaskContext<'a> {
    /// Remote rewrite dependency.
    pub service: &'a dyn RewriteService,
    /// Instruction profile for every block in the run.
    pub mode: RewriteMode,
    /// Optional post-format hook.
    pub format_hook: Option<&'a FormatHook>,
    /// Shared counter pair.
    pub totals: &'a RunTotals,
}

/// Result of rewriting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No matching comment blocks; the file was left byte-identical.
    Unchanged,
    /// At least one block was rewritten and the file was written back.
    Modified,
}

/// Processes one file end-to-end, updating the shared counters.
///
/// Any failure is caught here: it is logged with the file path and the file
/// is skipped without incrementing either counter, leaving sibling files
/// unaffected.
pub fn process_file(path: &Utf8Path, context: &FileTaskContext<'_>) {
    match rewrite_file(path, context.service, context.mode) {
        Ok(FileOutcome::Unchanged) => {
            context.totals.record_processed();
        }
        Ok(FileOutcome::Modified) => {
            context.totals.record_processed();
            context.totals.record_modified();
            tracing::info!("modified {path}");
            if let Some(hook) = context.format_hook {
                hook.run(path);
            }
        }
        Err(error) => {
            tracing::warn!("failed to process {path}: {error}");
        }
    }
}

/// Rewrites one file's comment blocks, writing the file at most once.
///
/// Blocks are rewritten sequentially in document order; the first failure
/// aborts the whole file before any write happens.
///
/// # Errors
///
/// Returns [`GlossError`] for read, rewrite, or write failures.
pub fn rewrite_file(
    path: &Utf8Path,
    service: &dyn RewriteService,
    mode: RewriteMode,
) -> Result<FileOutcome, GlossError> {
    let content = fs::read_to_string(path).map_err(|error| GlossError::Io {
        message: format!("failed to read {path}: {error}"),
    })?;

    let spans = extract_comment_spans(&content);
    tracing::debug!("{path}: {} matching comment blocks", spans.len());
    if spans.is_empty() {
        return Ok(FileOutcome::Unchanged);
    }

    let mut replacements = Vec::with_capacity(spans.len());
    for span in &spans {
        let request = RewriteRequest::new(mode, span.text(&content));
        let replacement = service.rewrite_text(&request)?;
        tracing::debug!("{path}: rewrote block as: {replacement}");
        replacements.push(replacement);
    }

    let updated = splice_replacements(&content, &spans, &replacements);
    fs::write(path, updated).map_err(|error| GlossError::Io {
        message: format!("failed to write {path}: {error}"),
    })?;

    Ok(FileOutcome::Modified)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    use crate::ai::rewrite::RewriteMode;
    use crate::ai::rewrite::test_support::{StubRewriteService, UppercasingRewriteService};
    use crate::error::GlossError;
    use crate::run::totals::RunTotals;

    use super::{FileTaskContext, process_file};

    const ONE_BLOCK: &str =
        "/// <summary>\n/// gets the value.\n/// </summary>\npublic int GetValue();\n";
    const TWO_BLOCKS: &str = "/// <summary>\n/// first block.\n/// </summary>\nint A();\n/// <summary>\n/// second block.\n/// </summary>\nint B();\n";
    const NO_BLOCKS: &str = "// ordinary comment\npublic int GetValue();\n";

    fn temp_file(content: &str) -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("temporary directory should be created");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("Example.cs"))
            .expect("temporary path should be UTF-8");
        fs::write(&path, content).expect("fixture write");
        (temp, path)
    }

    #[rstest]
    fn rewrites_and_counts_a_file_with_one_block() {
        let (_temp, path) = temp_file(ONE_BLOCK);
        let service = StubRewriteService::success("/// polished");
        let totals = RunTotals::default();
        let context = FileTaskContext {
            service: &service,
            mode: RewriteMode::Improve,
            format_hook: None,
            totals: &totals,
        };

        process_file(&path, &context);

        let updated = fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(updated, "/// polished\npublic int GetValue();\n");
        assert_eq!(totals.processed(), 1);
        assert_eq!(totals.modified(), 1);
    }

    #[rstest]
    fn splices_multiple_blocks_in_document_order() {
        let (_temp, path) = temp_file(TWO_BLOCKS);
        let service = UppercasingRewriteService;
        let totals = RunTotals::default();
        let context = FileTaskContext {
            service: &service,
            mode: RewriteMode::Improve,
            format_hook: None,
            totals: &totals,
        };

        process_file(&path, &context);

        let updated = fs::read_to_string(&path).expect("file should be readable");
        assert!(updated.contains("/// FIRST BLOCK."));
        assert!(updated.contains("/// SECOND BLOCK."));
        assert!(updated.contains("int A();"));
        assert!(updated.contains("int B();"));
        assert_eq!(totals.modified(), 1, "one write counts once");
    }

    #[rstest]
    fn file_without_blocks_counts_processed_only() {
        let (_temp, path) = temp_file(NO_BLOCKS);
        let service = StubRewriteService::success("never used");
        let totals = RunTotals::default();
        let context = FileTaskContext {
            service: &service,
            mode: RewriteMode::Improve,
            format_hook: None,
            totals: &totals,
        };

        process_file(&path, &context);

        let updated = fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(updated, NO_BLOCKS, "content must stay byte-identical");
        assert_eq!(totals.processed(), 1);
        assert_eq!(totals.modified(), 0);
    }

    #[rstest]
    fn service_failure_leaves_file_untouched_and_uncounted() {
        let (_temp, path) = temp_file(ONE_BLOCK);
        let service = StubRewriteService::failure(GlossError::Network {
            message: "timeout".to_owned(),
        });
        let totals = RunTotals::default();
        let context = FileTaskContext {
            service: &service,
            mode: RewriteMode::Improve,
            format_hook: None,
            totals: &totals,
        };

        process_file(&path, &context);

        let updated = fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(updated, ONE_BLOCK);
        assert_eq!(totals.processed(), 0);
        assert_eq!(totals.modified(), 0);
    }
}
