//! Engine module: CLI surface, command handler, path helpers, summary

pub mod arg_parser;
pub mod handlers;
pub mod report;
pub mod tools;

pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use report::summary_line;
pub use tools::{is_dot_entry, name_matches, strip_trailing_separator};
