//! pfind: parallel filename search over a directory tree

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::SearchError;
pub use pipeline::CancelHandle;
pub use types::*;

use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::pipeline::{SearchContext, run_search};

/// Result alias used by public pfind API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// One search over one tree. Hand out [`cancel_handle`](Searcher::cancel_handle)s before
/// calling [`run`](Searcher::run).
///
/// ```ignore
/// let searcher = pfind::Searcher::new(pfind::SearchOpts::new("/var/log", "error", 4));
/// let handle = searcher.cancel_handle();
/// ctrlc::set_handler(move || handle.interrupt())?;
/// let report = searcher.run(|p| println!("{}", p.display()))?;
/// ```
pub struct Searcher {
    ctx: Arc<SearchContext>,
}

impl Searcher {
    pub fn new(opts: SearchOpts) -> Self {
        debug!(
            "{} CONFIG:{:#?}",
            env!("CARGO_PKG_NAME").to_string().to_uppercase(),
            opts
        );
        Self {
            ctx: Arc::new(SearchContext::new(&opts)),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle::new(Arc::clone(&self.ctx))
    }

    /// Run to completion. `on_match` is called from the worker that found each match, so
    /// calls from different workers may interleave.
    pub fn run<F>(self, on_match: F) -> Result<SearchReport>
    where
        F: Fn(&Path) + Sync,
    {
        run_search(&self.ctx, &on_match)
    }
}

/// Single entry point when no external cancellation is needed.
pub fn search<F>(opts: SearchOpts, on_match: F) -> Result<SearchReport>
where
    F: Fn(&Path) + Sync,
{
    Searcher::new(opts).run(on_match)
}
