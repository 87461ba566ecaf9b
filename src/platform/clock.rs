//! Time sources and frame pacing

use std::time::{Duration, Instant};

use crate::game::Clock;

/// Milliseconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Caps the frame rate: a frame may start once a full period has passed
/// since the previous frame started. Late frames run immediately and do
/// not try to catch up.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            last_frame: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Earliest instant the next frame may start
    pub fn deadline(&self) -> Option<Instant> {
        self.last_frame.map(|last| last + self.period)
    }

    /// True if a frame may start at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_none_or(|deadline| now >= deadline)
    }

    /// Record that a frame started at `now`
    pub fn begin_frame(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let limiter = FrameLimiter::new(60);
        assert!(limiter.is_due(Instant::now()));
        assert!(limiter.deadline().is_none());
    }

    #[test]
    fn test_waits_one_period() {
        let mut limiter = FrameLimiter::new(60);
        let start = Instant::now();
        limiter.begin_frame(start);

        assert_eq!(limiter.period(), Duration::from_nanos(16_666_666));
        assert!(!limiter.is_due(start + Duration::from_millis(10)));
        assert!(limiter.is_due(start + limiter.period()));
        assert_eq!(limiter.deadline(), Some(start + limiter.period()));
    }

    #[test]
    fn test_late_frame_does_not_catch_up() {
        let mut limiter = FrameLimiter::new(60);
        let start = Instant::now();
        limiter.begin_frame(start);

        let late = start + Duration::from_millis(100);
        assert!(limiter.is_due(late));
        limiter.begin_frame(late);
        assert_eq!(limiter.deadline(), Some(late + limiter.period()));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
