//! Search context: the one block of state shared by the coordinator, every worker and the
//! cancel handle. Built once per search and never reused.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::SearchOpts;

use super::queue::{DirTask, WorkQueue};

/// Everything the termination decision reads. Guarded by a single mutex so the coordinator
/// sees queue emptiness and the worker counters as one consistent snapshot.
#[derive(Debug, Default)]
pub struct SharedState {
    pub queue: WorkQueue,
    /// Workers parked waiting for work.
    pub idle_count: usize,
    /// Workers that exited after a local failure.
    pub error_count: usize,
    /// Workers that exited for any reason (includes `error_count`).
    pub exited_count: usize,
}

impl SharedState {
    /// Queue empty and every worker that is still alive is parked.
    pub fn is_exhausted(&self, num_threads: usize) -> bool {
        self.queue.is_empty() && self.idle_count + self.exited_count == num_threads
    }

    pub fn all_failed(&self, num_threads: usize) -> bool {
        self.error_count == num_threads
    }
}

pub struct SearchContext {
    pub term: String,
    pub num_threads: usize,
    state: Mutex<SharedState>,
    /// Workers wait here for tasks or shutdown.
    work_available: Condvar,
    /// The coordinator waits here for a termination condition.
    coordinator_wake: Condvar,
    /// Monotonic false -> true. Written under the state lock, or followed by a lock
    /// round-trip before notifying, so waiters never miss it.
    shutdown: AtomicBool,
    interrupted: AtomicBool,
    match_count: Mutex<usize>,
}

impl SearchContext {
    /// Build the context with the root directory already queued.
    pub fn new(opts: &SearchOpts) -> Self {
        let mut state = SharedState::default();
        state.queue.enqueue(DirTask::new(opts.root.clone()));
        Self {
            term: opts.term.clone(),
            num_threads: opts.num_threads,
            state: Mutex::new(state),
            work_available: Condvar::new(),
            coordinator_wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            interrupted: AtomicBool::new(false),
            match_count: Mutex::new(0),
        }
    }

    pub fn lock_state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn was_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Park a worker until work or shutdown is signalled. Releases the lock while blocked.
    pub fn wait_for_work<'a>(
        &self,
        guard: MutexGuard<'a, SharedState>,
    ) -> MutexGuard<'a, SharedState> {
        self.work_available
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Park the coordinator until a worker or an interrupt wakes it.
    pub fn wait_for_coordinator<'a>(
        &self,
        guard: MutexGuard<'a, SharedState>,
    ) -> MutexGuard<'a, SharedState> {
        self.coordinator_wake
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a discovered directory and wake at most one sleeper for it.
    pub fn push_task(&self, task: DirTask) {
        self.lock_state().queue.enqueue(task);
        self.work_available.notify_one();
    }

    pub fn notify_coordinator(&self) {
        self.coordinator_wake.notify_one();
    }

    /// Coordinator-side shutdown. The caller holds the state lock, passed in to prove it.
    pub fn request_shutdown(&self, _guard: &MutexGuard<'_, SharedState>) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.work_available.notify_all();
    }

    /// Interrupt-side shutdown. Idempotent; only the first call before any other shutdown
    /// marks the search as interrupted.
    ///
    /// Takes the state mutex, so it must run on an ordinary thread (as `ctrlc` handlers do),
    /// never inside a raw signal handler.
    pub fn interrupt(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.interrupted.store(true, Ordering::SeqCst);
        }
        // A waiter that checked the flag before the swap is either still holding the lock
        // or already blocked; taking the lock here orders us after it.
        drop(self.lock_state());
        self.coordinator_wake.notify_one();
        self.work_available.notify_all();
    }

    /// Add a worker's local tally to the aggregate count.
    pub fn post_matches(&self, local: &mut usize) {
        if *local == 0 {
            return;
        }
        let mut total = self.match_count.lock().unwrap_or_else(PoisonError::into_inner);
        *total += *local;
        *local = 0;
    }

    pub fn total_matches(&self) -> usize {
        *self.match_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cloneable handle that requests shutdown from outside the search, e.g. a Ctrl+C handler.
#[derive(Clone)]
pub struct CancelHandle {
    ctx: Arc<SearchContext>,
}

impl CancelHandle {
    pub(crate) fn new(ctx: Arc<SearchContext>) -> Self {
        Self { ctx }
    }

    /// Request shutdown. Safe to call any number of times from any thread.
    ///
    /// Not async-signal-safe: it locks a mutex. Call it from a `ctrlc` handler or another
    /// thread, not from a handler installed with `sigaction`.
    pub fn interrupt(&self) {
        self.ctx.interrupt();
    }

    pub fn is_interrupted(&self) -> bool {
        self.ctx.was_interrupted()
    }
}
