//! Timing-control primitives.
//!
//! - [`Debounce`] collapses bursts of calls into one trailing invocation that
//!   receives the last call's argument.
//! - [`Throttle`] runs at most once per window and drops calls inside it.
//! - [`sleep`] is a plain deferred completion.
//!
//! Debounce schedules on tokio; throttle only reads a [`Clock`].

mod clock;
mod debounce;
mod throttle;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use clock::{Clock, ManualClock, TokioClock};
pub use debounce::{debounce, Debounce};
pub use throttle::{throttle, Throttle};

/// Delay settings shared by [`Debounce`] and [`Throttle`].
///
/// Deserializable so a host application can embed it in its own config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingOptions {
    /// Quiet period (debounce) or window length (throttle), in milliseconds.
    pub delay_ms: u64,
}

impl TimingOptions {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Complete after `duration` has elapsed.
///
/// There is no cancel handle: drop the future to cancel.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        assert_eq!(TimingOptions::default().delay(), Duration::ZERO);
    }

    #[test]
    fn test_options_from_json() {
        let opts: TimingOptions = serde_json::from_str(r#"{"delay_ms": 250}"#).unwrap();
        assert_eq!(opts.delay(), Duration::from_millis(250));

        let opts: TimingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, TimingOptions::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_millis(200)).await;
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_cancelled_by_drop() {
        let result = tokio::time::timeout(Duration::from_millis(50), sleep(Duration::from_secs(10))).await;
        assert!(result.is_err());
    }
}
