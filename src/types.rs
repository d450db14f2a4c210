//! Public and internal types for the qcheck API and run.

use std::path::PathBuf;

use crate::utils::config::DEFAULT_THREADS;

/// One checklist line: where the file is and the CRC32 it should have.
///
/// `path` is already resolved against the checklist's directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub path: PathBuf,
    pub expected: u32,
}

/// Outcome of checking one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Computed checksum equals the expected one.
    Ok(u32),
    /// File was read but the checksum differs.
    Fail(u32),
    /// File could not be read.
    Error,
}

impl Verdict {
    /// Classify a computed checksum (`None` = unreadable) against `expected`.
    pub fn from_result(expected: u32, computed: Option<u32>) -> Self {
        match computed {
            Some(crc) if crc == expected => Verdict::Ok(crc),
            Some(crc) => Verdict::Fail(crc),
            None => Verdict::Error,
        }
    }

    pub fn computed(&self) -> Option<u32> {
        match *self {
            Verdict::Ok(crc) | Verdict::Fail(crc) => Some(crc),
            Verdict::Error => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Ok(_) => "OK",
            Verdict::Fail(_) => "FAIL",
            Verdict::Error => "ERROR",
        }
    }
}

/// Counts for one run. In direct-hash mode only `ok` (hashed) and `error` are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ok: usize,
    pub fail: usize,
    pub error: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.ok + self.fail + self.error
    }
}

/// Jobs for one run, fixed before dispatch starts.
#[derive(Clone, Debug)]
pub enum JobList {
    /// Files to hash and print.
    RawPaths(Vec<PathBuf>),
    /// Parsed checklist entries to hash and compare.
    Checklist(Vec<ChecklistEntry>),
}

impl JobList {
    pub fn len(&self) -> usize {
        match self {
            JobList::RawPaths(paths) => paths.len(),
            JobList::Checklist(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run configuration. Built once at startup (defaults, then `.qcheck.toml`, then CLI), read-only after.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Worker thread count. Must be at least 1.
    pub threads: usize,
    /// Treat `inputs` as checklist files instead of files to hash.
    pub check: bool,
    /// Debug-level logging.
    pub verbose: bool,
    /// Files to hash, or checklists to verify.
    pub inputs: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            check: false,
            verbose: false,
            inputs: Vec::new(),
        }
    }
}
