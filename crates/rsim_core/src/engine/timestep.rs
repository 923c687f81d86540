//! Simulation clock
//!
//! Every timer in the engine (turning, fall recovery, throw-in, ball stall)
//! reads this clock instead of the host's wall clock, so a match plays out
//! the same whether it is rendered at 60 Hz or run headless.

/// Default tick length (60 Hz)
pub const DEFAULT_TICK_DT: f32 = 1.0 / 60.0;

/// Fixed-step simulation clock.
///
/// Time is derived from the tick counter, so it never accumulates rounding
/// drift over long matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    ticks: u64,
    dt: f32,
}

impl SimClock {
    pub fn new(dt: f32) -> Self {
        Self { ticks: 0, dt }
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Simulated seconds since kick-off
    pub fn now(&self) -> f32 {
        (self.ticks as f64 * self.dt as f64) as f32
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = SimClock::default();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn test_ticks_per_minute() {
        let mut clock = SimClock::default();
        for _ in 0..3600 {
            clock.advance();
        }
        assert!((clock.now() - 60.0).abs() < 1e-3);
    }
}
