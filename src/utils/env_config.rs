//! Settings from the environment: process env first, then `.env` in the given directory.

use std::path::Path;

use crate::utils::config::{PackagePaths, Settings};

/// Value of `key` in `dir/.env`, without touching the process environment.
fn dotenv_lookup(dir: &Path, key: &str) -> Option<String> {
    let env_path = dir.join(".env");
    if !env_path.is_file() {
        return None;
    }
    dotenvy::from_path_iter(&env_path)
        .ok()?
        .filter_map(|item| item.ok())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn read_var(dir: &Path, key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| dotenv_lookup(dir, key))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn settings_from_lookup<L>(lookup: L, problems: &mut Vec<String>) -> Settings
where
    L: Fn(&str) -> Option<String>,
{
    let paths = PackagePaths::get();
    let threads_key = paths.threads_env();
    let verbose_key = paths.verbose_env();

    let threads = lookup(threads_key.as_str()).and_then(|v| match v.parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            problems.push(format!("{threads_key}={v} is not a positive integer; ignored"));
            None
        }
    });
    let verbose = lookup(verbose_key.as_str()).and_then(|v| {
        let parsed = parse_bool(&v);
        if parsed.is_none() {
            problems.push(format!("{verbose_key}={v} is not a boolean; ignored"));
        }
        parsed
    });
    Settings { threads, verbose }
}

pub(crate) fn load_env_settings(dir: &Path, problems: &mut Vec<String>) -> Settings {
    settings_from_lookup(|key| read_var(dir, key), problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_reads_threads_and_verbose() {
        let mut problems = Vec::new();
        let s = settings_from_lookup(
            lookup_in(&[("PFIND_THREADS", "3"), ("PFIND_VERBOSE", "yes")]),
            &mut problems,
        );
        assert_eq!(s.threads, Some(3));
        assert_eq!(s.verbose, Some(true));
        assert!(problems.is_empty());
    }

    #[test]
    fn test_bad_values_reported_and_ignored() {
        let mut problems = Vec::new();
        let s = settings_from_lookup(
            lookup_in(&[("PFIND_THREADS", "0"), ("PFIND_VERBOSE", "maybe")]),
            &mut problems,
        );
        assert_eq!(s, Settings::default());
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_dotenv_file_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "PFIND_TEST_ONLY_KEY=12\nOTHER=x\n").unwrap();
        assert_eq!(
            dotenv_lookup(dir.path(), "PFIND_TEST_ONLY_KEY"),
            Some("12".to_string())
        );
        assert_eq!(dotenv_lookup(dir.path(), "MISSING"), None);
    }

    #[test]
    fn test_no_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(dotenv_lookup(dir.path(), "PFIND_TEST_ONLY_KEY"), None);
    }
}
