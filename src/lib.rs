//! qcheck: CRC32 checksums for files, and SFV checklist verification, on a fixed worker pool

pub mod check;
pub mod checklist;
pub mod engine;
pub mod hash;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::io::Write;

use crate::engine::report::Reporter;

/// Result alias used by public qcheck API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

impl JobList {
    /// Resolve the job source once: raw paths, or every checklist parsed up front.
    ///
    /// Fails if any checklist cannot be read.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        if settings.check {
            let entries = checklist::load_checklists(&settings.inputs)?;
            debug!(
                "{} entries from {} checklist(s)",
                entries.len(),
                settings.inputs.len()
            );
            Ok(JobList::Checklist(entries))
        } else {
            Ok(JobList::RawPaths(settings.inputs.clone()))
        }
    }
}

/// Run every job on `threads` workers, reporting each result through `reporter`.
pub fn run_jobs<W: Write + Send>(
    jobs: &JobList,
    threads: usize,
    reporter: &Reporter<W>,
) -> Result<RunSummary> {
    match jobs {
        JobList::RawPaths(paths) => hash::hash_files(paths, threads, reporter),
        JobList::Checklist(entries) => check::verify_entries(entries, threads, reporter),
    }
}

/// Single entry point: build the job list from `settings` and run it.
///
/// Individual unreadable or mismatching files are reported, not returned as errors.
pub fn run<W: Write + Send>(settings: &Settings, reporter: &Reporter<W>) -> Result<RunSummary> {
    let jobs = JobList::from_settings(settings)?;
    run_jobs(&jobs, settings.threads, reporter)
}
