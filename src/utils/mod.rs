pub mod config;
pub mod env_config;
pub mod fd_limit;
pub mod logger;
pub mod pfind_toml;

pub use config::*;
pub use fd_limit::warn_if_over_fd_budget;
pub use logger::setup_logging;
