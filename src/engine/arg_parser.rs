use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;

/// Parallel filename search.
#[derive(Clone, Debug, Parser)]
#[command(name = "pfind")]
#[command(about = "Print every file under ROOT whose name contains TERM, using THREADS workers.")]
pub struct Cli {
    /// Directory to search from.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Substring to look for in file names (case-sensitive, not anchored).
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Worker threads. Default: `threads` from .pfind.toml or PFIND_THREADS, else available cores.
    #[arg(value_name = "THREADS", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: Option<usize>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
