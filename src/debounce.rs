//! Cancellable debounce timer.
//!
//! A [`Debouncer`] owns a worker thread. Every [`push`](Debouncer::push)
//! replaces the pending value and restarts the quiet period; the value is
//! emitted only once the period elapses with no further pushes. Dropping the
//! debouncer cancels whatever is still pending.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

enum Message<T> {
    Value(T),
    Cancel,
}

/// Coalesces rapid updates into one emission per quiet period.
pub struct Debouncer<T: Send + 'static> {
    tx: Option<Sender<Message<T>>>,
    worker: Option<JoinHandle<()>>,
    delay: Duration,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Start a debouncer that calls `emit` on its worker thread.
    pub fn new<F>(delay: Duration, mut emit: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Message<T>>();

        let worker = thread::spawn(move || {
            let mut pending: Option<T> = None;
            loop {
                let message = if pending.is_some() {
                    match rx.recv_timeout(delay) {
                        Ok(message) => message,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                emit(value);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(message) => message,
                        Err(_) => break,
                    }
                };

                pending = match message {
                    Message::Value(value) => Some(value),
                    Message::Cancel => None,
                };
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
            delay,
        }
    }

    /// Replace the pending value and restart the quiet period.
    pub fn push(&self, value: T) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(Message::Value(value));
        }
    }

    /// Drop the pending value without emitting it.
    pub fn cancel(&self) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(Message::Cancel);
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Disconnecting the channel stops the worker without emitting.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collector<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(T) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[test]
    fn burst_emits_once_with_final_value() {
        let (seen, emit) = collector();
        let debouncer = Debouncer::new(Duration::from_millis(150), emit);

        for i in 1..=5 {
            debouncer.push(i);
            thread::sleep(Duration::from_millis(10));
        }
        thread::sleep(Duration::from_millis(400));

        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn separate_bursts_emit_separately() {
        let (seen, emit) = collector();
        let debouncer = Debouncer::new(Duration::from_millis(50), emit);

        debouncer.push("a");
        thread::sleep(Duration::from_millis(250));
        debouncer.push("b");
        thread::sleep(Duration::from_millis(250));

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn drop_cancels_pending_value() {
        let (seen, emit) = collector();
        let debouncer = Debouncer::new(Duration::from_millis(100), emit);
        debouncer.push(1);
        drop(debouncer);

        thread::sleep(Duration::from_millis(200));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn cancel_discards_pending_value() {
        let (seen, emit) = collector();
        let debouncer = Debouncer::new(Duration::from_millis(100), emit);
        debouncer.push(1);
        debouncer.cancel();

        thread::sleep(Duration::from_millis(250));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(debouncer.delay(), Duration::from_millis(100));
    }
}
