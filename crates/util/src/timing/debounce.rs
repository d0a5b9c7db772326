use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::TimingOptions;
use crate::error::{Error, Result};

type Callback<A> = Arc<dyn Fn(A) + Send + Sync + 'static>;

/// One scheduled invocation.
struct Scheduled {
    deadline: Instant,
    /// Set under the pending lock; the task re-checks it under the same lock.
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl Scheduled {
    fn cancel(self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}

/// The outstanding invocation of a debounced wrapper, if any.
#[derive(Default)]
struct Pending {
    current: Option<Scheduled>,
}

/// A debounced wrapper around a callback.
///
/// Every [`call`](Debounce::call) cancels the invocation scheduled by the
/// previous one, unless it is already due, and schedules a new one `delay`
/// later with the new argument.
/// The callback therefore runs once per burst, with the last argument, after
/// the calls have stopped for `delay`. Even a zero delay defers to the
/// runtime instead of running synchronously.
///
/// The deadline is taken when `call` runs. A previous invocation whose
/// deadline has already been reached is never superseded, so calls spaced at
/// least `delay` apart each fire.
///
/// Use a tuple for `A` when the callback takes several arguments. Clones share
/// the same pending state. Dropping the wrapper does not cancel an
/// invocation that is already scheduled.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use utilkit::timing::Debounce;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let save = Debounce::new(move |text: &'static str| sink.lock().unwrap().push(text), Duration::from_millis(100))
///     .unwrap();
///
/// save.call("a");
/// save.call("b");
/// save.call("c");
/// tokio::time::sleep(Duration::from_millis(150)).await;
///
/// assert_eq!(*seen.lock().unwrap(), vec!["c"]);
/// # }
/// ```
pub struct Debounce<A> {
    callback: Callback<A>,
    delay: Duration,
    runtime: Handle,
    pending: Arc<Mutex<Pending>>,
}

impl<A: Send + 'static> Debounce<A> {
    /// Wrap `callback`, scheduling on the current tokio runtime.
    ///
    /// Fails with [`Error::NoRuntime`] when called outside a runtime.
    pub fn new<F>(callback: F, delay: Duration) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::with_handle(runtime, callback, delay))
    }

    /// Wrap `callback`, scheduling on the given runtime.
    pub fn with_handle<F>(runtime: Handle, callback: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            delay,
            runtime,
            pending: Arc::new(Mutex::new(Pending::default())),
        }
    }

    pub fn from_options<F>(callback: F, options: &TimingOptions) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(callback, options.delay())
    }

    /// Record `args` and (re)start the quiet-period timer.
    pub fn call(&self, args: A) {
        let now = Instant::now();
        let deadline = now + self.delay;
        let mut pending = self.pending.lock();

        if let Some(previous) = pending.current.take() {
            if now < previous.deadline {
                previous.cancel();
                tracing::trace!(delay = ?self.delay, "debounce: superseded pending call");
            } else {
                // Already due but not yet polled: let it fire on its own.
                tracing::trace!(delay = ?self.delay, "debounce: previous call already due");
            }
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let shared = Arc::clone(&self.pending);
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;

        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            {
                let mut pending = shared.lock();
                // Cancellation may land after the timer elapsed but before
                // this task took the lock.
                if flag.load(Ordering::SeqCst) {
                    tracing::trace!("debounce: cancelled timer skipped");
                    return;
                }
                let is_current = pending
                    .current
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(&current.cancelled, &flag));
                if is_current {
                    pending.current = None;
                }
            }
            tracing::trace!(delay = ?delay, "debounce: firing");
            callback(args);
        });

        pending.current = Some(Scheduled {
            deadline,
            cancelled,
            task,
        });
    }
}

impl<A> Debounce<A> {
    /// Drop the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().current.take() {
            Some(scheduled) => {
                scheduled.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.lock().current.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Clone for Debounce<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            delay: self.delay,
            runtime: self.runtime.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<A> fmt::Debug for Debounce<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Shorthand for [`Debounce::new`].
pub fn debounce<A, F>(callback: F, delay: Duration) -> Result<Debounce<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounce::new(callback, delay)
}
