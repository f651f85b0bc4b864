/// Fixed-rate tick scheduler driven by frame time.
///
/// Frame deltas accumulate; each whole period fires one tick. When a stall
/// leaves more than `max_catch_up` periods pending, the excess is dropped
/// instead of fast-forwarding.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: f64,
    accumulator: f64,
    max_catch_up: u32,
}

impl TickClock {
    /// Clock firing every `period` seconds. Expects a finite, positive
    /// period and a catch-up limit of at least one.
    pub fn new(period: f64, max_catch_up: u32) -> Self {
        debug_assert!(period.is_finite() && period > 0.0);
        Self {
            period,
            accumulator: 0.0,
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Clock firing `rate` times per second
    pub fn with_rate(rate: f64, max_catch_up: u32) -> Self {
        Self::new(1.0 / rate, max_catch_up)
    }

    pub const fn period(&self) -> f64 {
        self.period
    }

    pub fn rate(&self) -> f64 {
        1.0 / self.period
    }

    /// Add `delta_time` seconds and call `on_tick` once per elapsed period.
    /// Returns how many ticks fired.
    pub fn advance(&mut self, delta_time: f64, mut on_tick: impl FnMut()) -> u32 {
        self.accumulator += delta_time.max(0.0);

        let mut fired = 0;
        while self.accumulator >= self.period && fired < self.max_catch_up {
            on_tick();
            self.accumulator -= self.period;
            fired += 1;
        }

        if self.accumulator >= self.period {
            let dropped = (self.accumulator / self.period) as u64;
            tracing::debug!(dropped, "tick backlog dropped");
            self.accumulator %= self.period;
        }

        fired
    }
}
