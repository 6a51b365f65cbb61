//! Worker loop: take a directory, scan it, queue its subdirectories, report matching files,
//! park when there is nothing to do.

use log::{debug, error};
use std::fs;
use std::path::Path;
use std::thread;

use crate::engine::tools::{is_dot_entry, name_matches};
use crate::error::SearchError;

use super::context::SearchContext;
use super::queue::DirTask;

/// How a directory scan ended without error.
#[derive(Debug, PartialEq, Eq)]
enum ScanEnd {
    Finished,
    /// Shutdown seen between entries.
    Stopped,
}

/// Records the worker's exit in the shared state when dropped, so the coordinator also hears
/// about workers that unwind.
struct ExitRecord<'a> {
    ctx: &'a SearchContext,
    failed: bool,
}

impl Drop for ExitRecord<'_> {
    fn drop(&mut self) {
        let mut state = self.ctx.lock_state();
        state.exited_count += 1;
        if self.failed || thread::panicking() {
            state.error_count += 1;
        }
        drop(state);
        self.ctx.notify_coordinator();
    }
}

/// Block until a task is available or shutdown is requested. `None` means shut down.
fn next_task(ctx: &SearchContext) -> Option<DirTask> {
    let mut state = ctx.lock_state();
    state.idle_count += 1;
    while !ctx.is_shutdown() && state.queue.is_empty() {
        // Let the coordinator re-check now that one more worker is parked.
        ctx.notify_coordinator();
        state = ctx.wait_for_work(state);
    }
    state.idle_count -= 1;
    if ctx.is_shutdown() {
        return None;
    }
    state.queue.dequeue()
}

/// Scan one directory. Subdirectories go back to the queue; matching files go to `on_match`
/// and the local tally.
fn scan_dir<F>(
    ctx: &SearchContext,
    dir: &Path,
    on_match: &F,
    local_matches: &mut usize,
) -> Result<ScanEnd, SearchError>
where
    F: Fn(&Path) + Sync,
{
    let entries = fs::read_dir(dir).map_err(|source| SearchError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        if ctx.is_shutdown() {
            return Ok(ScanEnd::Stopped);
        }
        let entry = entry.map_err(|source| SearchError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if is_dot_entry(&name) {
            continue;
        }
        let path = dir.join(&name);
        // Follows symlinks: a link to a directory is searched like the directory itself.
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(source) => return Err(SearchError::Stat { path, source }),
        };
        if meta.is_dir() {
            ctx.push_task(DirTask::new(path));
        } else if name_matches(&name, &ctx.term) {
            on_match(&path);
            *local_matches += 1;
        }
    }
    Ok(ScanEnd::Finished)
}

/// Run one worker until shutdown or a local failure.
pub fn worker_loop<F>(ctx: &SearchContext, on_match: &F) -> Result<(), SearchError>
where
    F: Fn(&Path) + Sync,
{
    let mut exit = ExitRecord { ctx, failed: false };
    let mut local_matches = 0_usize;
    let mut dirs_scanned = 0_usize;

    let result = loop {
        let Some(task) = next_task(ctx) else {
            break Ok(());
        };
        let scanned = scan_dir(ctx, task.path(), on_match, &mut local_matches);
        drop(task);
        dirs_scanned += 1;
        ctx.post_matches(&mut local_matches);
        match scanned {
            Ok(ScanEnd::Finished) => {}
            Ok(ScanEnd::Stopped) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    match &result {
        Ok(()) => debug!("worker done after {} directories", dirs_scanned),
        Err(e) => {
            error!("{}", e);
            exit.failed = true;
        }
    }
    result
}
