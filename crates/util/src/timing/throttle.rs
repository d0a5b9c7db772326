use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::clock::{Clock, TokioClock};
use super::TimingOptions;

/// A throttled wrapper around a callback.
///
/// The first call runs immediately and opens a window of length `delay`.
/// Calls inside the window are dropped, never queued or replayed. The first
/// call at or after the end of the window runs and opens the next one.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use utilkit::timing::{ManualClock, Throttle};
///
/// let clock = ManualClock::new();
/// let scroll = Throttle::with_clock(|_: u32| {}, Duration::from_millis(100), clock.clone());
///
/// assert!(scroll.call(1));
/// clock.advance(Duration::from_millis(50));
/// assert!(!scroll.call(2));
/// clock.advance(Duration::from_millis(50));
/// assert!(scroll.call(3));
/// ```
pub struct Throttle<A, C = TokioClock> {
    callback: Arc<dyn Fn(A) + Send + Sync + 'static>,
    delay: Duration,
    clock: C,
    last_accepted: Arc<Mutex<Option<Instant>>>,
}

impl<A> Throttle<A, TokioClock> {
    pub fn new<F>(callback: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_clock(callback, delay, TokioClock)
    }

    pub fn from_options<F>(callback: F, options: &TimingOptions) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(callback, options.delay())
    }
}

impl<A, C: Clock> Throttle<A, C> {
    pub fn with_clock<F>(callback: F, delay: Duration, clock: C) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            delay,
            clock,
            last_accepted: Arc::new(Mutex::new(None)),
        }
    }

    /// Run the callback with `args` unless the current window is still open.
    ///
    /// Returns `true` when the call was accepted.
    pub fn call(&self, args: A) -> bool {
        let now = self.clock.now();
        {
            let mut last = self.last_accepted.lock();
            if let Some(previous) = *last {
                let elapsed = now.saturating_duration_since(previous);
                if elapsed < self.delay {
                    tracing::trace!(elapsed = ?elapsed, "throttle: call dropped");
                    return false;
                }
            }
            *last = Some(now);
        }
        tracing::trace!("throttle: call accepted");
        (self.callback)(args);
        true
    }

    /// Forget the last accepted call so the next one runs immediately.
    pub fn reset(&self) {
        *self.last_accepted.lock() = None;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, C: Clone> Clone for Throttle<A, C> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            delay: self.delay,
            clock: self.clock.clone(),
            last_accepted: Arc::clone(&self.last_accepted),
        }
    }
}

impl<A, C> fmt::Debug for Throttle<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("delay", &self.delay)
            .field("last_accepted", &*self.last_accepted.lock())
            .finish()
    }
}

/// Shorthand for [`Throttle::new`].
pub fn throttle<A, F>(callback: F, delay: Duration) -> Throttle<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Throttle::new(callback, delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recorder<A: Send + 'static>() -> (Arc<Mutex<Vec<A>>>, impl Fn(A) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |args: A| sink.lock().push(args))
    }

    #[test]
    fn test_window_scenario() {
        let clock = ManualClock::new();
        let (calls, callback) = recorder::<&'static str>();
        let throttled = Throttle::with_clock(callback, ms(100), clock.clone());

        assert!(throttled.call("a"));
        clock.advance(ms(50));
        assert!(!throttled.call("b"));
        clock.advance(ms(50));
        assert!(throttled.call("c"));

        assert_eq!(*calls.lock(), vec!["a", "c"]);
    }

    #[test]
    fn test_first_call_always_runs() {
        let (calls, callback) = recorder::<i32>();
        let throttled = throttle(callback, Duration::from_secs(3600));
        assert!(throttled.call(1));
        assert!(!throttled.call(2));
        assert_eq!(*calls.lock(), vec![1]);
    }

    #[test]
    fn test_callback_runs_synchronously() {
        let (calls, callback) = recorder::<i32>();
        let throttled = throttle(callback, ms(10));
        throttled.call(5);
        assert_eq!(*calls.lock(), vec![5]);
    }

    #[test]
    fn test_zero_delay_accepts_everything() {
        let (calls, callback) = recorder::<i32>();
        let throttled = Throttle::with_clock(callback, Duration::ZERO, ManualClock::new());
        for i in 0..5 {
            assert!(throttled.call(i));
        }
        assert_eq!(calls.lock().len(), 5);
    }

    #[test]
    fn test_dropped_calls_are_not_replayed() {
        let clock = ManualClock::new();
        let (calls, callback) = recorder::<i32>();
        let throttled = Throttle::with_clock(callback, ms(100), clock.clone());

        throttled.call(1);
        for i in 2..10 {
            clock.advance(ms(10));
            throttled.call(i);
        }
        clock.advance(ms(500));
        assert_eq!(*calls.lock(), vec![1]);
    }

    #[test]
    fn test_window_restarts_from_accepted_call() {
        let clock = ManualClock::new();
        let (calls, callback) = recorder::<i32>();
        let throttled = Throttle::with_clock(callback, ms(100), clock.clone());

        throttled.call(1); // t = 0
        clock.advance(ms(150));
        throttled.call(2); // t = 150, opens window until 250
        clock.advance(ms(90));
        throttled.call(3); // t = 240, dropped
        clock.advance(ms(10));
        throttled.call(4); // t = 250

        assert_eq!(*calls.lock(), vec![1, 2, 4]);
    }

    #[test]
    fn test_reset() {
        let (calls, callback) = recorder::<i32>();
        let throttled = Throttle::with_clock(callback, ms(100), ManualClock::new());
        throttled.call(1);
        throttled.reset();
        assert!(throttled.call(2));
        assert_eq!(*calls.lock(), vec![1, 2]);
    }

    #[test]
    fn test_reentrant_callback() {
        let clock = ManualClock::new();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let slot: Arc<Mutex<Option<Throttle<i32, ManualClock>>>> = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&calls);
        let inner = Arc::clone(&slot);
        let throttled = Throttle::with_clock(
            move |n: i32| {
                sink.lock().push(n);
                if let Some(me) = inner.lock().as_ref() {
                    // Same window: must be rejected, not deadlock.
                    assert!(!me.call(n + 1));
                }
            },
            ms(100),
            clock,
        );
        *slot.lock() = Some(throttled.clone());

        assert!(throttled.call(1));
        assert_eq!(*calls.lock(), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_follows_paused_time() {
        let (calls, callback) = recorder::<char>();
        let throttled = Throttle::from_options(callback, &TimingOptions { delay_ms: 100 });

        throttled.call('a');
        tokio::time::sleep(ms(50)).await;
        throttled.call('b');
        tokio::time::sleep(ms(50)).await;
        throttled.call('c');

        assert_eq!(*calls.lock(), vec!['a', 'c']);
    }
}
