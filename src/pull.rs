//! Pulling values out of a push sequence one at a time.
//!
//! [`Pull`] turns a [`Seq`] into an imperative handle with
//! [`next`](Iterator::next) and [`Pull::stop`], for algorithms that must
//! advance two sequences independently (see [`merge_by`](crate::merge::merge_by)).
//!
//! The wrapped sequence runs on a dedicated worker thread. Producer and
//! consumer hand values over through zero-capacity channels, so at most one
//! value is in flight and the producer is parked between values.
//!
//! # Examples
//!
//! ```rust
//! use seqs::prelude::*;
//!
//! let mut handle = pull(from_iter(1..=3));
//! assert_eq!(handle.next(), Some(1));
//! assert_eq!(handle.next(), Some(2));
//! handle.stop();
//! assert_eq!(handle.next(), None);
//! ```

use std::{
    iter::FusedIterator,
    panic,
    thread::{self, JoinHandle},
};

use crossbeam::channel::{self, Receiver, Sender};

use crate::{Error, Result, Seq};

const DEFAULT_WORKER_NAME: &str = "seqs-pull";

/// Worker settings for [`pull_with`].
#[derive(Clone, Debug)]
pub struct PullOptions {
    name: String,
    stack_size: Option<usize>,
}

impl Default for PullOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_WORKER_NAME.to_string(),
            stack_size: None,
        }
    }
}

impl PullOptions {
    /// Name of the worker thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stack size of the worker thread, in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    fn builder(&self) -> thread::Builder {
        let builder = thread::Builder::new().name(self.name.clone());
        match self.stack_size {
            Some(size) => builder.stack_size(size),
            None => builder,
        }
    }
}

/// A one-value-at-a-time handle over a sequence.
///
/// Created via [`pull`] or [`pull_with`]. Nothing is produced until the
/// first call to [`next`](Iterator::next). Once it returns `None`, every later
/// call does too. Dropping the handle stops the worker.
///
/// `Pull` is also an [`Iterator`].
pub struct Pull<T> {
    state: PullState<T>,
}

enum PullState<T> {
    Running {
        requests: Sender<()>,
        values: Receiver<T>,
        worker: JoinHandle<()>,
    },
    Finished,
}

impl<T> PullState<T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, PullState::Finished)
    }
}

/// Create a [`Pull`] handle with the default worker settings.
///
/// # Panics
///
/// Panics if the worker thread cannot be spawned, like
/// [`std::thread::spawn`].
pub fn pull<S>(seq: S) -> Pull<S::Item>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    match pull_with(seq, &PullOptions::default()) {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

/// Create a [`Pull`] handle whose worker is configured by `options`.
///
/// ```rust
/// use seqs::prelude::*;
/// use seqs::pull::PullOptions;
///
/// let options = PullOptions::default().name("numbers").stack_size(64 * 1024);
/// let handle = pull_with(from_iter(0..3), &options).unwrap();
/// assert_eq!(handle.collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn pull_with<S>(mut seq: S, options: &PullOptions) -> Result<Pull<S::Item>>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    let (requests, request_rx) = channel::bounded::<()>(0);
    let (value_tx, values) = channel::bounded(0);

    let worker = options
        .builder()
        .spawn(move || {
            // Production starts with the first request; a handle stopped
            // before that never runs the sequence.
            if request_rx.recv().is_err() {
                log::trace!("pull worker stopped before start");
                return;
            }
            log::trace!("pull worker started");
            let finished = seq.run(&mut |value| {
                value_tx.send(value).is_ok() && request_rx.recv().is_ok()
            });
            log::trace!("pull worker finished, exhausted: {finished}");
        })
        .map_err(Error::Spawn)?;
    log::trace!("spawned pull worker {:?}", options.name);

    Ok(Pull {
        state: PullState::Running {
            requests,
            values,
            worker,
        },
    })
}

impl<T> Pull<T> {
    /// Stop production and release the worker.
    ///
    /// Safe to call any number of times. The worker observes the stop at its
    /// next hand-over, drops the wrapped sequence and exits; this call waits
    /// for that to happen.
    pub fn stop(&mut self) {
        let PullState::Running {
            requests,
            values,
            worker,
        } = self.state.take()
        else {
            return;
        };

        // Disconnecting both channels makes the producer's sink return false.
        drop(requests);
        drop(values);

        if let Err(payload) = worker.join() {
            if thread::panicking() {
                log::warn!("pull worker panicked while unwinding");
            } else {
                panic::resume_unwind(payload);
            }
        }
        log::trace!("pull worker stopped");
    }

    /// Whether the handle is exhausted or stopped.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, PullState::Finished)
    }
}

/// `next` fetches the next value, or `None` once the sequence is exhausted
/// or the handle was stopped. A panic raised by the sequence is resumed on
/// the calling thread.
impl<T> Iterator for Pull<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let PullState::Running {
            requests, values, ..
        } = &self.state
        else {
            return None;
        };

        if requests.send(()).is_ok() {
            if let Ok(value) = values.recv() {
                return Some(value);
            }
        }
        self.stop();
        None
    }
}

impl<T> FusedIterator for Pull<T> {}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Sink,
        build::{empty, from_fn, from_iter},
    };
    use pretty_assertions::assert_eq;
    use std::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Sets a flag when dropped, to observe the worker releasing the sequence.
    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_pull_drains_in_order() {
        init_logger();
        let mut handle = pull(from_iter(vec![1, 2, 3]));
        assert_eq!(handle.next(), Some(1));
        assert_eq!(handle.next(), Some(2));
        assert_eq!(handle.next(), Some(3));
        assert_eq!(handle.next(), None);
        assert!(handle.is_finished());
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_pull_is_lazy() {
        init_logger();
        let started = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&started);
        let mut handle = pull(from_fn(move |sink: &mut Sink<'_, i32>| {
            counter.fetch_add(1, Ordering::SeqCst);
            sink(1)
        }));

        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(started.load(Ordering::SeqCst), 0);
        assert_eq!(handle.next(), Some(1));
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_before_start_never_runs() {
        init_logger();
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let mut handle = pull(from_fn(move |sink: &mut Sink<'_, i32>| {
            flag.store(true, Ordering::SeqCst);
            sink(1)
        }));

        handle.stop();
        handle.stop();
        assert!(!started.load(Ordering::SeqCst));
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_stop_releases_sequence() {
        init_logger();
        let released = Arc::new(AtomicBool::new(false));
        let guard = DropFlag(Arc::clone(&released));
        let produced = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&produced);

        let mut handle = pull(from_fn(move |sink: &mut Sink<'_, u64>| {
            let _guard = &guard;
            let mut n = 0;
            loop {
                count.fetch_add(1, Ordering::SeqCst);
                if !sink(n) {
                    return false;
                }
                n += 1;
            }
        }));

        assert_eq!(handle.next(), Some(0));
        assert_eq!(handle.next(), Some(1));
        handle.stop();

        assert!(released.load(Ordering::SeqCst));
        assert_eq!(produced.load(Ordering::SeqCst), 2);
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_drop_stops_infinite_sequence() {
        init_logger();
        let released = Arc::new(AtomicBool::new(false));
        let guard = DropFlag(Arc::clone(&released));
        let mut handle = pull(from_fn(move |sink: &mut Sink<'_, u8>| {
            let _guard = &guard;
            while sink(7) {}
            false
        }));

        assert_eq!(handle.next(), Some(7));
        drop(handle);
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_pull_empty() {
        let mut handle = pull(empty::<i32>());
        assert_eq!(handle.next(), None);
        assert!(handle.is_finished());
    }

    #[test]
    fn test_pull_as_iterator() {
        let handle = pull(from_iter(1..=4));
        assert_eq!(handle.map(|x| x * x).collect::<Vec<_>>(), vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_worker_name() {
        let options = PullOptions::default().name("named-worker");
        let mut handle = pull_with(
            from_fn(|sink: &mut Sink<'_, String>| {
                sink(thread::current().name().unwrap_or_default().to_string())
            }),
            &options,
        )
        .unwrap();
        assert_eq!(handle.next().as_deref(), Some("named-worker"));
    }

    #[test]
    #[should_panic(expected = "producer failed")]
    fn test_producer_panic_is_resumed() {
        let mut handle = pull(from_fn(|sink: &mut Sink<'_, i32>| {
            if !sink(1) {
                return false;
            }
            panic!("producer failed");
        }));
        assert_eq!(handle.next(), Some(1));
        handle.next();
    }
}
