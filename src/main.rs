//! pfind CLI: print files under ROOT whose names contain TERM.

use clap::Parser;
use pfind::engine::arg_parser::Cli;
use pfind::engine::handle_run;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match handle_run(&cli) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
