//! Load `.pfind.toml` from a directory (CLI only). The lib takes everything through SearchOpts.

use serde::Deserialize;
use std::path::Path;

use crate::utils::config::{PackagePaths, Settings};

#[derive(Debug, Deserialize)]
pub(crate) struct PfindToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    threads: Option<usize>,
    verbose: Option<bool>,
}

impl PfindToml {
    pub(crate) fn into_settings(self) -> Settings {
        Settings {
            // 0 workers would never scan anything
            threads: self.settings.threads.filter(|&n| n > 0),
            verbose: self.settings.verbose,
        }
    }
}

/// Load the config file from `dir`. `Ok(None)` when absent or unreadable; `Err` with a message
/// when present but malformed.
pub(crate) fn load_pfind_toml(dir: &Path) -> Result<Option<PfindToml>, String> {
    let path = dir.join(PackagePaths::get().config_filename());
    let Ok(s) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    toml::from_str(&s)
        .map(Some)
        .map_err(|e| format!("{}: {}", path.display(), e))
}
