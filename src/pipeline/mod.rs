//! Pipeline components: work queue, shared context, workers, coordinator.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod queue;
pub mod worker;

pub use context::{CancelHandle, SearchContext, SharedState};
pub use error_handler::collect_worker_outcomes;
pub use orchestrator::{run_search, spawn_workers, wait_for_termination};
pub use queue::{DirTask, WorkQueue};
pub use worker::worker_loop;
