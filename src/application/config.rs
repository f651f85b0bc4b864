use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::EngineState;
use crate::error::{Result, SpriteoscopeError};

/// Ticks per second used when none is given
pub const DEFAULT_RATE: f64 = 180.0;

/// Runtime settings, read from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "spriteoscope")]
#[command(about = "Dazzler kaleidoscope pattern generator", long_about = None)]
pub struct Config {
    /// Pattern steps per second (the original hardware ran near 80)
    #[arg(long, default_value_t = DEFAULT_RATE)]
    pub rate: f64,

    /// Seed for the initial state; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Most ticks run in a single frame after a stall
    #[arg(long, default_value_t = 32)]
    pub max_catch_up: u32,

    /// Show the status overlay
    #[arg(long)]
    pub hud: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(SpriteoscopeError::InvalidConfig(format!(
                "rate must be a positive number, got {}",
                self.rate
            )));
        }
        if self.width < 64 || self.height < 64 {
            return Err(SpriteoscopeError::InvalidConfig(format!(
                "window must be at least 64x64, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_catch_up == 0 {
            return Err(SpriteoscopeError::InvalidConfig(
                "max-catch-up must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Seconds between ticks
    pub fn period(&self) -> f64 {
        1.0 / self.rate
    }

    /// Starting engine state, reproducible when a seed is set
    pub fn initial_state(&self) -> EngineState {
        match self.seed {
            Some(seed) => EngineState::random(&mut StdRng::seed_from_u64(seed)),
            None => EngineState::random(&mut rand::rng()),
        }
    }
}
