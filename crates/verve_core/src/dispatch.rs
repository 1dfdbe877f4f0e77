//! UI-context dispatch queue
//!
//! Gesture recognizers run on whatever thread the host input runtime owns.
//! Work that must observe a total order with UI-thread state (completion
//! callbacks, state mutations read during render) is posted here and runs
//! when the UI context drains the queue, once per frame.
//!
//! Tasks posted while a drain is in progress run on the next drain.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A unit of work handed off to the UI context
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// A cloneable FIFO queue of tasks bound for the UI context
///
/// Producers may sit on any thread. The UI context is the only caller of
/// [`UiDispatchQueue::drain`].
#[derive(Clone, Default)]
pub struct UiDispatchQueue {
    inner: Arc<Mutex<VecDeque<UiTask>>>,
}

impl UiDispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a task to run on the next drain
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        self.inner.lock().unwrap().push_back(Box::new(task));
    }

    /// Run all tasks that were queued before this call, in FIFO order
    ///
    /// Returns the number of tasks run. The queue is swapped out up front so
    /// tasks posted during the drain wait for the next one.
    pub fn drain(&self) -> usize {
        let tasks: VecDeque<UiTask> = std::mem::take(&mut *self.inner.lock().unwrap());
        let count = tasks.len();
        for task in tasks {
            task();
        }
        if count > 0 {
            tracing::trace!(count, "drained ui dispatch queue");
        }
        count
    }

    /// Number of tasks currently waiting
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_post_then_drain_runs_fifo() {
        let queue = UiDispatchQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            queue.post(move || order.lock().unwrap().push(i));
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain(), 3);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empty_is_noop() {
        let queue = UiDispatchQueue::new();
        assert_eq!(queue.drain(), 0);
    }

    #[test]
    fn test_tasks_posted_during_drain_wait() {
        let queue = UiDispatchQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let inner_queue = queue.clone();
        let inner_ran = ran.clone();
        queue.post(move || {
            let ran = inner_ran.clone();
            inner_queue.post(move || {
                ran.fetch_add(1, Ordering::SeqCst);
            });
        });

        // First drain runs only the outer task
        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 0);

        // The task it posted runs on the next drain
        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_post_from_other_thread() {
        let queue = UiDispatchQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let producer = queue.clone();
        let counter = ran.clone();
        std::thread::spawn(move || {
            producer.post(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        })
        .join()
        .unwrap();

        assert_eq!(queue.drain(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
