//! Step-rate meter for the debug panel.
//!
//! The run loop records a timestamp per simulation step; the panel shows the
//! measured rate next to the rate implied by the configured tick interval.

/// Sliding-window meter over the most recent step timestamps.
#[derive(Debug, Clone)]
pub struct TickRateMeter {
    stamps: [u64; TickRateMeter::WINDOW],
    len: usize,
    head: usize,
}

impl Default for TickRateMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickRateMeter {
    pub const WINDOW: usize = 60;

    pub fn new() -> Self {
        Self {
            stamps: [0; Self::WINDOW],
            len: 0,
            head: 0,
        }
    }

    /// Record one step at `now_ms`.
    pub fn record(&mut self, now_ms: u64) {
        self.stamps[self.head] = now_ms;
        self.head = (self.head + 1) % Self::WINDOW;
        self.len = (self.len + 1).min(Self::WINDOW);
    }

    /// Steps per second over the window; `0.0` until two steps are recorded.
    pub fn actual_tps(&self) -> f32 {
        if self.len < 2 {
            return 0.0;
        }
        let oldest = if self.len < Self::WINDOW { 0 } else { self.head };
        let newest = (self.head + Self::WINDOW - 1) % Self::WINDOW;
        let elapsed = self.stamps[newest].saturating_sub(self.stamps[oldest]);
        if elapsed == 0 {
            return 0.0;
        }
        (self.len - 1) as f32 * 1000.0 / elapsed as f32
    }
}

/// Target steps per second for a fixed tick interval.
pub fn target_tps(tick_ms: u64) -> f32 {
    if tick_ms == 0 {
        return 0.0;
    }
    1000.0 / tick_ms as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_samples() {
        let mut m = TickRateMeter::new();
        assert_eq!(m.actual_tps(), 0.0);
        m.record(5);
        assert_eq!(m.actual_tps(), 0.0);
    }

    #[test]
    fn steady_rate_is_reported() {
        let mut m = TickRateMeter::new();
        for i in 0..10 {
            m.record(i * 20);
        }
        assert_eq!(m.actual_tps(), 50.0);
    }

    #[test]
    fn window_forgets_old_samples() {
        let mut m = TickRateMeter::new();
        // A long stall followed by a full window at 10ms spacing.
        m.record(0);
        for i in 0..TickRateMeter::WINDOW as u64 {
            m.record(10_000 + i * 10);
        }
        assert_eq!(m.actual_tps(), 100.0);
    }

    #[test]
    fn target_rate_from_interval() {
        assert_eq!(target_tps(16), 62.5);
        assert_eq!(target_tps(0), 0.0);
    }
}
