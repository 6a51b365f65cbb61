//! Coordinator: spawn the workers, wait for a termination condition, shut everyone down,
//! join, and aggregate.

use anyhow::Result;
use log::debug;
use std::path::Path;
use std::thread::{self, Scope, ScopedJoinHandle};
use std::time::Instant;

use crate::error::SearchError;
use crate::types::{SearchReport, Termination};

use super::context::SearchContext;
use super::error_handler::collect_worker_outcomes;
use super::worker::worker_loop;

pub type WorkerHandle<'scope> = ScopedJoinHandle<'scope, Result<(), SearchError>>;

/// Spawn `ctx.num_threads` workers in `scope`. On a spawn failure the workers already running
/// are shut down and joined before the error is returned.
pub fn spawn_workers<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    ctx: &'env SearchContext,
    on_match: &'env F,
) -> Result<Vec<WorkerHandle<'scope>>, SearchError>
where
    F: Fn(&Path) + Sync,
{
    let mut handles = Vec::with_capacity(ctx.num_threads);
    for id in 0..ctx.num_threads {
        let spawned = thread::Builder::new()
            .name(format!("pfind-worker-{id}"))
            .spawn_scoped(scope, move || worker_loop(ctx, on_match));
        match spawned {
            Ok(h) => handles.push(h),
            Err(source) => {
                shutdown_now(ctx);
                collect_worker_outcomes(handles);
                return Err(SearchError::Spawn { source });
            }
        }
    }
    debug!("{} workers spawned", handles.len());
    Ok(handles)
}

fn shutdown_now(ctx: &SearchContext) {
    let state = ctx.lock_state();
    ctx.request_shutdown(&state);
}

/// Block until an interrupt arrived, the tree is exhausted, or every worker failed; then
/// request shutdown and wake every parked worker.
pub fn wait_for_termination(ctx: &SearchContext) -> Termination {
    let n = ctx.num_threads;
    let mut state = ctx.lock_state();
    let termination = loop {
        if ctx.is_shutdown() {
            break Termination::Interrupted;
        }
        if state.all_failed(n) {
            break Termination::AllWorkersFailed;
        }
        // A worker between dequeue and enqueue is not idle, so this cannot fire early.
        if state.is_exhausted(n) {
            break Termination::Exhausted;
        }
        state = ctx.wait_for_coordinator(state);
    };
    debug!(
        "terminating: {:?} (idle {}, exited {}, failed {}, queued {})",
        termination,
        state.idle_count,
        state.exited_count,
        state.error_count,
        state.queue.len()
    );
    ctx.request_shutdown(&state);
    termination
}

/// Run the whole search over an already-seeded context.
pub fn run_search<F>(ctx: &SearchContext, on_match: &F) -> Result<SearchReport>
where
    F: Fn(&Path) + Sync,
{
    if ctx.num_threads == 0 {
        anyhow::bail!("worker thread count must be at least 1");
    }
    let start = Instant::now();
    let (termination, failed_workers) = thread::scope(|scope| -> Result<_> {
        let handles = spawn_workers(scope, ctx, on_match)?;
        let termination = wait_for_termination(ctx);
        let failed_workers = collect_worker_outcomes(handles);
        Ok((termination, failed_workers))
    })?;

    Ok(SearchReport {
        matches: ctx.total_matches(),
        interrupted: ctx.was_interrupted(),
        termination,
        failed_workers,
        num_threads: ctx.num_threads,
        elapsed: start.elapsed(),
    })
}
