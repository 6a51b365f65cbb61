use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    // Per-worker
    #[error("open directory {}: {source}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read entry of directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("check file type of {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Setup
    #[error("spawn worker thread: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("join worker thread: worker panicked")]
    Join,
}

impl SearchError {
    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::OpenDir { path, .. } | Self::ReadDir { path, .. } | Self::Stat { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// True for failures that end a single worker but not the search.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::OpenDir { .. } | Self::ReadDir { .. } | Self::Stat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_names_operation_and_path() {
        let err = SearchError::OpenDir {
            path: PathBuf::from("/no/such"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("open directory /no/such"), "{msg}");
        assert!(err.is_local());
        assert_eq!(err.path(), Some(&PathBuf::from("/no/such")));
    }

    #[test]
    fn test_setup_errors_are_not_local() {
        let err = SearchError::Spawn {
            source: io::Error::other("no threads"),
        };
        assert!(!err.is_local());
        assert!(err.path().is_none());
        assert!(!SearchError::Join.is_local());
    }
}
