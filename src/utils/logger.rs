use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Logs go to stderr; stdout is reserved for match lines and the summary.
pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let installed = Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        _ => "ERROR".red(),
                    };
                    format!("[{} {}] {}", name.cyan(), level_str, record.args())
                }
                Level::Debug | Level::Trace => {
                    let thread = std::thread::current();
                    let who = thread.name().unwrap_or("main").dimmed();
                    format!("[{} {}] {}", name.cyan(), who, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .target(env_logger::Target::Stderr)
        .try_init();
    // A second call (tests, embedding) keeps the first logger.
    if let Err(e) = installed {
        log::debug!("logger already set up, keeping it: {}", e);
    }
}
