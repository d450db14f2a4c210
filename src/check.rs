//! Checklist verification: hash every entry and compare against its expected CRC32.

use anyhow::Result;
use log::info;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::hashing::checksum_file;
use crate::engine::parallel::dispatch;
use crate::engine::report::Reporter;
use crate::{ChecklistEntry, RunSummary, Verdict};

/// Hash one entry's file and classify the result.
pub fn verify_entry(entry: &ChecklistEntry) -> Verdict {
    Verdict::from_result(entry.expected, checksum_file(&entry.path))
}

#[derive(Default)]
struct Tally {
    ok: AtomicUsize,
    fail: AtomicUsize,
    error: AtomicUsize,
}

impl Tally {
    fn record(&self, verdict: &Verdict) {
        let counter = match verdict {
            Verdict::Ok(_) => &self.ok,
            Verdict::Fail(_) => &self.fail,
            Verdict::Error => &self.error,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            ok: self.ok.load(Ordering::Relaxed),
            fail: self.fail.load(Ordering::Relaxed),
            error: self.error.load(Ordering::Relaxed),
        }
    }
}

/// Verify `entries` on `threads` workers, reporting one line per entry.
pub fn verify_entries<W: Write + Send>(
    entries: &[ChecklistEntry],
    threads: usize,
    reporter: &Reporter<W>,
) -> Result<RunSummary> {
    let tally = Tally::default();
    dispatch(entries, threads, |_, entry| {
        let verdict = verify_entry(entry);
        tally.record(&verdict);
        reporter.report_check(entry, &verdict);
    })?;
    let summary = tally.summary();
    info!(
        "{} OK, {} FAIL, {} ERROR",
        summary.ok, summary.fail, summary.error
    );
    Ok(summary)
}
