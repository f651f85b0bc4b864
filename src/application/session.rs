use crate::application::{Config, TickClock};
use crate::domain::{KaleidoscopeEngine, Tick};
use crate::rendering::GridRenderer;

/// Session drives the engine from the clock and feeds the renderer.
/// All four updates of a tick are applied before the next tick runs.
pub struct Session<R: GridRenderer> {
    engine: KaleidoscopeEngine,
    clock: TickClock,
    renderer: R,
    tick_count: u64,
    jump_count: u64,
}

impl<R: GridRenderer> Session<R> {
    pub fn new(engine: KaleidoscopeEngine, clock: TickClock, renderer: R) -> Self {
        Self {
            engine,
            clock,
            renderer,
            tick_count: 0,
            jump_count: 0,
        }
    }

    /// Session seeded and clocked from a validated config
    pub fn from_config(config: &Config, renderer: R) -> Self {
        let state = config.initial_state();
        tracing::info!(
            x = state.x,
            y = state.y,
            mask = state.mask,
            color = state.color_index(),
            rate = config.rate,
            "starting kaleidoscope"
        );
        Self::new(
            KaleidoscopeEngine::new(state),
            TickClock::with_rate(config.rate, config.max_catch_up),
            renderer,
        )
    }

    pub const fn engine(&self) -> &KaleidoscopeEngine {
        &self.engine
    }

    pub const fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub const fn jump_count(&self) -> u64 {
        self.jump_count
    }

    /// Run one tick immediately and apply its updates
    pub fn step(&mut self) -> Tick {
        let tick = Self::run_tick(&mut self.engine, &mut self.renderer);
        self.record(&tick);
        tick
    }

    /// Advance the clock by one frame, running every tick that came due
    pub fn tick(mut self, delta_time: f64) -> Self {
        let Self {
            engine,
            clock,
            renderer,
            tick_count,
            jump_count,
        } = &mut self;

        clock.advance(delta_time, || {
            let tick = Self::run_tick(&mut *engine, &mut *renderer);
            *tick_count += 1;
            if tick.jump.is_some() {
                *jump_count += 1;
            }
        });

        self
    }

    fn run_tick(engine: &mut KaleidoscopeEngine, renderer: &mut R) -> Tick {
        let tick = engine.tick();
        for update in &tick.updates {
            renderer.apply_update(update.row, update.col, update.color);
        }
        tick
    }

    fn record(&mut self, tick: &Tick) {
        self.tick_count += 1;
        if tick.jump.is_some() {
            self.jump_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EngineState, Rgb, GRID_SIZE};
    use crate::rendering::HeadlessRenderer;

    fn session(state: EngineState, rate: f64) -> Session<HeadlessRenderer> {
        let renderer = HeadlessRenderer::create_grid(GRID_SIZE, GRID_SIZE, 1.0).unwrap();
        Session::new(KaleidoscopeEngine::new(state), TickClock::with_rate(rate, 32), renderer)
    }

    #[test]
    fn test_step_paints_renderer() {
        let mut s = session(EngineState::new(0, 0, 0, 15, 1), 180.0);
        s.step();
        assert_eq!(s.renderer().grid().get(32, 32), Some(Rgb::WHITE));
        assert_eq!(s.renderer().grid().lit_count(), 1);
        assert_eq!(s.renderer().writes(), 4);
        assert_eq!((s.tick_count(), s.jump_count()), (1, 1));
    }

    #[test]
    fn test_frame_runs_due_ticks() {
        let s = session(EngineState::new(9, 9, 9, 9, 9), 4.0).tick(1.0);
        assert_eq!(s.tick_count(), 4);
        assert_eq!(s.renderer().writes(), 16);
    }

    #[test]
    fn test_no_ticks_before_first_period() {
        let s = session(EngineState::new(9, 9, 9, 9, 9), 4.0).tick(0.2);
        assert_eq!(s.tick_count(), 0);
        assert_eq!(s.renderer().writes(), 0);
    }
}
