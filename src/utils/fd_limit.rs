//! File descriptor limit detection for capping the worker count (Unix).

/// Descriptors a hashing worker may hold at once (file handle plus mapping slack).
pub const FDS_PER_WORKER: usize = 2;

/// Soft limit on open file descriptors, or `None` when unlimited or unknown (e.g. Windows).
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)] // rlim_t width differs between platforms
pub fn max_open_fds() -> Option<u64> {
    let mut rlim = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: getrlimit only writes into the struct passed to it.
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut rlim) } != 0 {
        return None;
    }
    if rlim.rlim_cur == libc::RLIM_INFINITY {
        return None;
    }
    Some(rlim.rlim_cur as u64)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Workers that fit in 80% of the FD soft limit (at least 1), or `None` without a limit.
pub fn max_workers_by_fd_limit() -> Option<usize> {
    let usable = max_open_fds()?.saturating_mul(4) / 5;
    let workers = usize::try_from(usable).unwrap_or(usize::MAX) / FDS_PER_WORKER;
    Some(workers.max(1))
}

/// `requested` capped by [`max_workers_by_fd_limit`].
pub fn cap_workers(requested: usize) -> usize {
    match max_workers_by_fd_limit() {
        Some(fd_cap) if fd_cap < requested => {
            log::debug!("Capping threads {} -> {} (FD limit ~80%)", requested, fd_cap);
            fd_cap
        }
        _ => requested,
    }
}
