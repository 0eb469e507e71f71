//! Fixed-size worker pool driving one task per eligible file.

use std::io::Write;
use std::time::Instant;

use rayon::prelude::*;

use crate::ai::rewrite::RewriteService;
use crate::config::GlossConfig;
use crate::error::{GlossError, io_error};
use crate::scan::collect_eligible_files;

use super::formatter::FormatHook;
use super::processor::{FileTaskContext, process_file};
use super::report::RunReport;
use super::totals::RunTotals;

/// Runs one rewrite pass over the configured directory.
///
/// A missing root is reported on `writer` and yields `Ok(None)` without any
/// processing, matching the tool's non-fatal contract for that case. Files
/// are processed by a pool sized to the configured worker count (at least
/// one); the call returns only after every task has finished.
///
/// # Errors
///
/// Returns [`GlossError`] when the report cannot be written or the worker
/// pool cannot be built.
pub fn execute_run<W: Write>(
    writer: &mut W,
    config: &GlossConfig,
    service: &dyn RewriteService,
) -> Result<Option<RunReport>, GlossError> {
    if !config.base_directory.is_dir() {
        writeln!(writer, "The directory {} does not exist.", config.base_directory)
            .map_err(|error| io_error(&error))?;
        return Ok(None);
    }

    let started = Instant::now();
    let files = collect_eligible_files(
        &config.base_directory,
        config.include_subdirectories.enabled(),
        config.normalized_extension(),
    );
    tracing::debug!(
        "{} eligible files under {}",
        files.len(),
        config.base_directory
    );

    let totals = RunTotals::default();
    let format_hook = config.format_command.as_deref().map(FormatHook::new);
    let context = FileTaskContext {
        service,
        mode: config.mode,
        format_hook: format_hook.as_ref(),
        totals: &totals,
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_workers.max(1))
        .build()
        .map_err(|error| GlossError::Configuration {
            message: format!("failed to build worker pool: {error}"),
        })?;
    pool.install(|| {
        files.par_iter().for_each(|path| process_file(path, &context));
    });

    Ok(Some(RunReport::from_totals(&totals, started.elapsed())))
}
