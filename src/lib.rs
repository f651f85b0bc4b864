// Domain layer - the kaleidoscope state machine and its palette
pub mod domain;

// Application layer - configuration, clock and session coordination
pub mod application;

// Infrastructure layer - grid rendering
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use domain::{EngineState, KaleidoscopeEngine, Tick, CellUpdate, Rgb, Palette, GRID_SIZE};
pub use application::{Config, Session, TickClock};
pub use rendering::{GridRenderer, HeadlessRenderer, ScreenRenderer};
pub use error::{Result, SpriteoscopeError};
