//! Pending directory tasks. Not synchronized: only touched through the guard of
//! [`SharedState`](super::context::SharedState).

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// One directory waiting to be scanned. Owned by the queue until dequeued, then by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTask {
    pub path: PathBuf,
}

impl DirTask {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Unbounded FIFO of [`DirTask`]s.
#[derive(Debug, Default)]
pub struct WorkQueue {
    tasks: VecDeque<DirTask>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail.
    pub fn enqueue(&mut self, task: DirTask) {
        self.tasks.push_back(task);
    }

    /// Take the head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<DirTask> {
        self.tasks.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = WorkQueue::new();
        q.enqueue(DirTask::new("a"));
        q.enqueue(DirTask::new("b"));
        q.enqueue(DirTask::new("c"));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(DirTask::new("a")));
        assert_eq!(q.dequeue(), Some(DirTask::new("b")));
        q.enqueue(DirTask::new("d"));
        assert_eq!(q.dequeue(), Some(DirTask::new("c")));
        assert_eq!(q.dequeue(), Some(DirTask::new("d")));
    }

    #[test]
    fn test_empty_queue() {
        let mut q = WorkQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        q.enqueue(DirTask::new("root"));
        assert!(!q.is_empty());
        let task = q.dequeue().unwrap();
        assert_eq!(task.path(), Path::new("root"));
        assert!(q.is_empty());
    }
}
