//! Fixed worker pool over one shared job cursor.
//!
//! Each worker loops: claim the next index with a single atomic increment, stop once the index
//! is past the end, otherwise run the job. No queue, no lock, no retry window, so every index in
//! `[0, len)` is handed out exactly once.

use anyhow::{Context, Result, bail};
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::utils::config::PackagePaths;

/// Shared claim counter. Successive claims across all workers return 0, 1, 2, ... with no gaps.
#[derive(Debug, Default)]
pub struct Cursor(AtomicUsize);

impl Cursor {
    pub fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    /// Claim the next index.
    pub fn claim(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

fn worker_loop<J, F>(jobs: &[J], cursor: &Cursor, action: &F)
where
    F: Fn(usize, &J),
{
    loop {
        let index = cursor.claim();
        let Some(job) = jobs.get(index) else {
            return;
        };
        action(index, job);
    }
}

/// Run `action(index, &jobs[index])` for every job on `threads` workers. Returns after all workers exit.
///
/// Jobs complete in whatever order their I/O allows. `threads == 0` is an error and runs nothing.
pub fn dispatch<J, F>(jobs: &[J], threads: usize, action: F) -> Result<()>
where
    J: Sync,
    F: Fn(usize, &J) + Sync,
{
    if threads == 0 {
        bail!("worker thread count must be at least 1");
    }
    debug!("Dispatching {} jobs on {} workers", jobs.len(), threads);

    let cursor = Cursor::new();
    let cursor = &cursor;
    let action = &action;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        let mut spawn_error = None;
        for worker in 0..threads {
            let spawned = thread::Builder::new()
                .name(PackagePaths::get().worker_thread_name(worker))
                .spawn_scoped(scope, move || worker_loop(jobs, cursor, action));
            match spawned {
                Ok(h) => handles.push(h),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        let running = handles.len();
        let mut panicked = false;
        for h in handles {
            panicked |= h.join().is_err();
        }
        if let Some(e) = spawn_error {
            // Any worker that did start drains the whole list on its own.
            if running == 0 {
                return Err(e).context("spawn worker thread");
            }
            log::warn!("Started {} of {} workers: {}", running, threads, e);
        }
        if panicked {
            bail!("worker thread panicked");
        }
        Ok(())
    })
}
