//! Game loop timing
//!
//! The scheduler (the terminal loop, a test, a bench) supplies timestamps or
//! deltas; nothing in here reads the wall clock.

/// Accumulates elapsed time towards the next automatic drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    accumulated_ms: u32,
    interval_ms: u32,
}

impl DropTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            accumulated_ms: 0,
            interval_ms,
        }
    }

    /// Add `elapsed_ms`; true once the total has reached the interval
    ///
    /// The timer keeps reporting true until [`DropTimer::reset`] is called, so a
    /// huge delta still yields a single drop step.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms >= self.interval_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

/// Turns monotonically increasing frame timestamps into deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous timestamp (the first call measures from 0)
    ///
    /// A timestamp older than the previous one yields 0.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = self.last_ms.max(now_ms);
        delta.min(u32::MAX as u64) as u32
    }

    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_timer_threshold() {
        let mut timer = DropTimer::new(1000);
        assert!(!timer.advance(400));
        assert!(!timer.advance(599));
        assert!(timer.advance(1));
        assert_eq!(timer.accumulated_ms(), 1000);

        timer.reset();
        assert_eq!(timer.accumulated_ms(), 0);
        assert!(!timer.advance(16));
    }

    #[test]
    fn test_drop_timer_saturates() {
        let mut timer = DropTimer::new(1000);
        assert!(timer.advance(u32::MAX));
        assert!(timer.advance(u32::MAX));
        assert_eq!(timer.accumulated_ms(), u32::MAX);
    }

    #[test]
    fn test_frame_clock_deltas() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(16), 16);
        assert_eq!(clock.advance(33), 17);
        assert_eq!(clock.advance(33), 0);
        assert_eq!(clock.last_ms(), 33);
    }

    #[test]
    fn test_frame_clock_ignores_time_going_backwards() {
        let mut clock = FrameClock::new();
        clock.advance(100);
        assert_eq!(clock.advance(50), 0);
        assert_eq!(clock.advance(120), 20);
    }
}
