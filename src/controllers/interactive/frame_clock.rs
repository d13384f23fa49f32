use std::num::NonZeroU32;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePoll {
    /// A frame should be rendered now. `dropped` counts whole intervals that
    /// passed without one.
    Due { dropped: u32 },
    /// Nothing to do before the deadline.
    Wait { until: Instant },
}

/// Fixed-rate frame pacing.
///
/// The first poll is always due. After that a frame is due once per interval;
/// when the caller falls more than one interval behind, the clock re-anchors
/// on the current time instead of reporting a burst of overdue frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    interval: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_deadline: now,
        }
    }

    #[must_use]
    pub fn from_rate(rate_hz: NonZeroU32, now: Instant) -> Self {
        Self::new(Duration::from_secs(1) / rate_hz.get(), now)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn poll(&mut self, now: Instant) -> FramePoll {
        if now < self.next_deadline {
            return FramePoll::Wait {
                until: self.next_deadline,
            };
        }

        let behind = now.duration_since(self.next_deadline);
        let dropped = if self.interval.is_zero() {
            0
        } else {
            u32::try_from(behind.as_nanos() / self.interval.as_nanos()).unwrap_or(u32::MAX)
        };

        self.next_deadline = if dropped > 0 {
            now + self.interval
        } else {
            self.next_deadline + self.interval
        };

        FramePoll::Due { dropped }
    }
}
