//! Application configuration constants and layered settings.
//! Defaults < `.pfind.toml` < environment (and `.env`) < CLI.

use std::path::Path;
use std::sync::OnceLock;

use crate::utils::env_config::load_env_settings;
use crate::utils::pfind_toml::load_pfind_toml;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    env_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
                env_prefix: pkg.to_uppercase(),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// `.pfind.toml`
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// `PFIND_THREADS`
    pub fn threads_env(&self) -> String {
        format!("{}_THREADS", self.env_prefix)
    }

    /// `PFIND_VERBOSE`
    pub fn verbose_env(&self) -> String {
        format!("{}_VERBOSE", self.env_prefix)
    }
}

// ---- Worker threads ----

/// Worker count when nothing else sets it.
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(WorkerThreadLimits::FALLBACK_THREADS)
}

pub struct WorkerThreadLimits;

impl WorkerThreadLimits {
    /// Used when available parallelism cannot be determined.
    pub const FALLBACK_THREADS: usize = 4;
}

// ---- Layered settings ----

/// Settings that may come from a file or the environment. `None` = not set at this layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub threads: Option<usize>,
    pub verbose: Option<bool>,
}

impl Settings {
    /// Fields set in `over` replace ours.
    pub fn overlay(self, over: Settings) -> Settings {
        Settings {
            threads: over.threads.or(self.threads),
            verbose: over.verbose.or(self.verbose),
        }
    }
}

/// File then environment settings from `dir`. Problems are returned as messages so the caller
/// can log them once logging is set up.
pub fn layered_settings(dir: &Path) -> (Settings, Vec<String>) {
    let mut problems = Vec::new();
    let file = match load_pfind_toml(dir) {
        Ok(Some(f)) => f.into_settings(),
        Ok(None) => Settings::default(),
        Err(msg) => {
            problems.push(msg);
            Settings::default()
        }
    };
    let env = load_env_settings(dir, &mut problems);
    (file.overlay(env), problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_names() {
        let p = PackagePaths::get();
        assert_eq!(p.pkg_name(), "pfind");
        assert_eq!(p.config_filename(), ".pfind.toml");
        assert_eq!(p.threads_env(), "PFIND_THREADS");
        assert_eq!(p.verbose_env(), "PFIND_VERBOSE");
    }

    #[test]
    fn test_overlay_prefers_upper_layer() {
        let file = Settings {
            threads: Some(2),
            verbose: Some(true),
        };
        let env = Settings {
            threads: Some(8),
            verbose: None,
        };
        assert_eq!(
            file.overlay(env),
            Settings {
                threads: Some(8),
                verbose: Some(true),
            }
        );
    }

    #[test]
    fn test_default_threads_positive() {
        assert!(default_threads() >= 1);
    }
}
