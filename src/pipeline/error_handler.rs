use log::{debug, error};

use crate::error::SearchError;

use super::orchestrator::WorkerHandle;

/// Join every worker and return how many failed. Local failures were already logged by the
/// worker itself; panics are logged here. One failure never stops the rest from being joined.
pub fn collect_worker_outcomes(handles: Vec<WorkerHandle<'_>>) -> usize {
    let mut failed = 0;
    for h in handles {
        match h.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                match e.path() {
                    Some(path) if e.is_local() => {
                        debug!("worker gave up at {}", path.display())
                    }
                    _ => error!("{}", e),
                }
                failed += 1;
            }
            Err(_) => {
                error!("{}", SearchError::Join);
                failed += 1;
            }
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use std::thread;

    #[test]
    fn test_counts_errors_and_panics_without_stopping() {
        let failed = thread::scope(|s| {
            let handles: Vec<WorkerHandle<'_>> = vec![
                s.spawn(|| Ok(())),
                s.spawn(|| {
                    Err(SearchError::OpenDir {
                        path: PathBuf::from("gone"),
                        source: io::Error::from(io::ErrorKind::NotFound),
                    })
                }),
                s.spawn(|| -> Result<(), SearchError> { panic!("worker blew up") }),
                s.spawn(|| Ok(())),
            ];
            collect_worker_outcomes(handles)
        });
        assert_eq!(failed, 2);
    }

    #[test]
    fn test_all_clean_is_zero() {
        let failed = thread::scope(|s| {
            let handles: Vec<WorkerHandle<'_>> = (0..3).map(|_| s.spawn(|| Ok(()))).collect();
            collect_worker_outcomes(handles)
        });
        assert_eq!(failed, 0);
    }
}
