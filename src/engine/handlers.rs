//! CLI command handler: resolve options, wire Ctrl+C, stream matches to stdout, print summary.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::arg_parser::Cli;
use crate::engine::report::summary_line;
use crate::utils::{default_threads, layered_settings, setup_logging, warn_if_over_fd_budget};
use crate::{CancelHandle, Opts, SearchOpts, SearchReport, Searcher};

fn setup_opts(cli: &Cli) -> Opts {
    let (settings, problems) = layered_settings(Path::new("."));
    let verbose = cli.verbose.or(settings.verbose).unwrap_or(false);
    setup_logging(verbose);
    for p in problems {
        warn!("{}", p);
    }
    Opts {
        root: cli.root.clone(),
        term: cli.term.clone(),
        num_threads: cli
            .threads
            .or(settings.threads)
            .unwrap_or_else(default_threads),
        verbose,
    }
}

/// One match line, path bytes as the OS gave them.
fn write_match(out: &mut impl Write, path: &Path) -> io::Result<()> {
    out.write_all(path.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")
}

/// Writes match lines to stdout. Once stdout is gone the search is cancelled and
/// later matches are dropped.
struct MatchSink {
    cancel: CancelHandle,
    closed: AtomicBool,
}

impl MatchSink {
    fn emit(&self, path: &Path) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let mut out = io::stdout().lock();
        if let Err(e) = write_match(&mut out, path) {
            if !self.closed.swap(true, Ordering::SeqCst) {
                debug!("stdout closed ({}); stopping search", e);
            }
            self.cancel.interrupt();
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Run the search described by `cli`. Match lines and the summary go to stdout.
/// Returns the report so the caller can pick the exit status.
pub fn handle_run(cli: &Cli) -> Result<SearchReport> {
    let opts = setup_opts(cli);
    warn_if_over_fd_budget(opts.num_threads);

    let searcher = Searcher::new(SearchOpts::from(&opts));
    let handle = searcher.cancel_handle();
    ctrlc::set_handler(move || handle.interrupt()).context("set Ctrl+C handler")?;

    let sink = MatchSink {
        cancel: searcher.cancel_handle(),
        closed: AtomicBool::new(false),
    };
    let report = searcher.run(|path| sink.emit(path))?;

    debug!(
        "{:?} with {} workers in {:?}; {} failed",
        report.termination, report.num_threads, report.elapsed, report.failed_workers
    );
    if sink.is_closed() {
        return Ok(report);
    }
    let mut out = io::stdout().lock();
    match writeln!(out, "{}", summary_line(&report)).and_then(|()| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("stdout closed before summary");
        }
        res => res.context("write summary")?,
    }
    Ok(report)
}
