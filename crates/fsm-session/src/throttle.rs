use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimum-interval throttle.
///
/// The first call passes; later calls pass only once the configured
/// interval has elapsed since the last pass.
#[derive(Debug)]
pub struct MinIntervalGate {
    interval: Duration,
    last_pass: Mutex<Option<Instant>>,
}

impl MinIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: Mutex::new(None),
        }
    }

    /// Attempt to pass the gate, recording the pass time on success.
    pub fn try_pass(&self) -> bool {
        let mut last = self
            .last_pass
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match *last {
            Some(at) if at.elapsed() < self.interval => false,
            _ => {
                *last = Some(Instant::now());
                true
            }
        }
    }

    /// Forget the last pass so the next call goes through immediately.
    pub fn reset(&self) {
        let mut last = self
            .last_pass
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *last = None;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
