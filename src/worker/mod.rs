//! Bounded deferred-work queue.
//!
//! Asynchronous actions are submitted as closures into a fixed-capacity
//! queue and executed by a single worker loop. Submission never blocks: a
//! full queue is an explicit error the caller handles, mirroring the
//! backpressure behavior of the flight firmware's worker system.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};

/// Default queue capacity.
pub const WORKER_QUEUE_LENGTH: usize = 5;

/// A deferred action.
pub type Work = Box<dyn FnOnce() + Send>;

/// Submission side of the queue. Cloneable; dropping every handle ends the
/// worker loop.
#[derive(Clone)]
pub struct WorkQueue {
    tx: SyncSender<Work>,
}

/// Consumption side: runs submitted work on the owning thread.
pub struct WorkerLoop {
    rx: Receiver<Work>,
}

/// Creates a queue/loop pair with the default capacity.
pub fn work_queue() -> (WorkQueue, WorkerLoop) {
    work_queue_with_capacity(WORKER_QUEUE_LENGTH)
}

/// Creates a queue/loop pair with an explicit capacity.
pub fn work_queue_with_capacity(capacity: usize) -> (WorkQueue, WorkerLoop) {
    let (tx, rx) = sync_channel(capacity);
    (WorkQueue { tx }, WorkerLoop { rx })
}

impl WorkQueue {
    /// Schedules a deferred action.
    ///
    /// Returns an error instead of blocking when the queue is full or the
    /// worker loop is gone.
    pub fn schedule(&self, work: impl FnOnce() + Send + 'static) -> Result<(), String> {
        match self.tx.try_send(Box::new(work)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err("work queue full".into()),
            Err(TrySendError::Disconnected(_)) => Err("worker loop stopped".into()),
        }
    }
}

impl WorkerLoop {
    /// Executes queued work until every [`WorkQueue`] handle is dropped.
    pub fn run(self) {
        while let Ok(work) = self.rx.recv() {
            work();
        }
    }

    /// Executes whatever is queued right now without waiting for more.
    pub fn drain(&self) {
        while let Ok(work) = self.rx.try_recv() {
            work();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_scheduled_work_executes_in_order() {
        let (queue, worker) = work_queue();
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        for i in 0..3 {
            let log = Arc::clone(&log);
            queue.schedule(move || log.lock().unwrap().push(i)).unwrap();
        }
        worker.drain();
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_full_queue_rejects_without_blocking() {
        let (queue, worker) = work_queue_with_capacity(2);
        let counter = Arc::new(AtomicUsize::new(0));
        let submit = |queue: &WorkQueue| {
            let counter = Arc::clone(&counter);
            queue.schedule(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            })
        };

        assert!(submit(&queue).is_ok());
        assert!(submit(&queue).is_ok());
        let err = submit(&queue).unwrap_err();
        assert!(err.contains("full"), "{err}");

        worker.drain();
        assert_eq!(counter.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_loop_ends_when_producers_drop() {
        let (queue, worker) = work_queue();
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let counter = Arc::clone(&counter);
            queue.schedule(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }).unwrap();
        }
        drop(queue);

        let handle = std::thread::spawn(move || worker.run());
        handle.join().unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_schedule_after_worker_drop_errors() {
        let (queue, worker) = work_queue();
        drop(worker);
        let err = queue.schedule(|| {}).unwrap_err();
        assert!(err.contains("stopped"), "{err}");
    }
}
