mod palette;
mod engine;

pub use palette::{Rgb, Palette, PALETTE};
pub use engine::{
    EngineState, KaleidoscopeEngine, Tick, CellUpdate, Jump,
    GRID_SIZE, LOOP_RESET, MAX_COLOR,
};
