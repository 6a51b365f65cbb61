//! File descriptor limit detection for the worker count (Unix).

use log::warn;

/// File descriptors a worker holds at once: the directory it is scanning.
pub const FDS_PER_WORKER: usize = 1;

/// Fraction of the process FD limit the workers may use (stdio and friends need the rest).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Worker count that stays under ~80% of the FD limit. `None` if no limit is available.
pub fn max_workers_by_fd_limit() -> Option<usize> {
    let limit = max_open_fds()?;
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    Some((usable / FDS_PER_WORKER).max(1))
}

/// Warn when `num_threads` workers could run out of descriptors. The count is left as is.
pub fn warn_if_over_fd_budget(num_threads: usize) -> bool {
    match max_workers_by_fd_limit() {
        Some(cap) if num_threads > cap => {
            warn!(
                "{} workers may exceed the open file limit (~{} usable); directory opens can fail",
                num_threads, cap
            );
            true
        }
        _ => false,
    }
}
