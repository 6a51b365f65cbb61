//! Public and internal types for the pfind API and pipeline.

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::tools::strip_trailing_separator;

/// Lib options for [`search`](crate::search) and [`Searcher`](crate::Searcher).
#[derive(Clone, Debug)]
pub struct SearchOpts {
    /// Directory the search starts from. Trailing separators are stripped on construction.
    pub root: PathBuf,
    /// Substring tested against each file's bare name.
    pub term: String,
    /// Number of worker threads.
    pub num_threads: usize,
}

impl SearchOpts {
    pub fn new(root: impl Into<PathBuf>, term: impl Into<String>, num_threads: usize) -> Self {
        Self {
            root: strip_trailing_separator(&root.into()),
            term: term.into(),
            num_threads,
        }
    }
}

impl From<&Opts> for SearchOpts {
    fn from(o: &Opts) -> Self {
        SearchOpts::new(o.root.clone(), o.term.clone(), o.num_threads)
    }
}

/// Full options (CLI). Use [`SearchOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    pub root: PathBuf,
    pub term: String,
    pub num_threads: usize,
    /// Debug-level logging for this crate.
    pub verbose: bool,
}

/// Which termination condition ended the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Shutdown was requested by an interrupt before the tree was exhausted.
    Interrupted,
    /// Queue empty and every live worker idle: no more work can appear.
    Exhausted,
    /// Every worker exited with a local failure.
    AllWorkersFailed,
}

/// Outcome of one completed search. Read after all workers have joined.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Total matches reported by all workers.
    pub matches: usize,
    /// An interrupt arrived before the search finished on its own.
    pub interrupted: bool,
    pub termination: Termination,
    /// Workers that ended with a local failure or panicked.
    pub failed_workers: usize,
    pub num_threads: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    /// True when no worker failed.
    pub fn is_success(&self) -> bool {
        self.failed_workers == 0
    }
}
