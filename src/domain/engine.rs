//! The Dazzler kaleidoscope state machine.
//!
//! Every tick perturbs an (X, Y) pair of 8-bit phase accumulators through a
//! mask, then paints four mirrored cells around the center of a 64x64 grid.
//! Every 63 ticks the pattern jumps: X and Y are nudged, the color steps
//! down, and once the color wraps the mask advances.

use rand::Rng;

use super::palette::{Palette, Rgb};

/// Side length of the display grid in cells
pub const GRID_SIZE: usize = 64;

/// Center row/column that the four mirrored updates reflect around
const CENTER: usize = GRID_SIZE / 2;

/// Value the loop counter restarts from after a jump
pub const LOOP_RESET: u8 = 63;

/// Highest palette index; colors count down from here
pub const MAX_COLOR: u8 = 15;

/// Complete engine state. Arithmetic on `x`, `y` and `mask` wraps at 256.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct EngineState {
    pub x: u8,
    pub y: u8,
    pub mask: u8,
    color_index: u8,
    loop_counter: u8,
}

impl EngineState {
    /// Build a state from explicit values.
    ///
    /// A color index outside 1..=15 becomes 15 and a loop counter of 0 or
    /// above 63 becomes 63, so the range invariant holds from the first tick.
    pub const fn new(x: u8, y: u8, mask: u8, color_index: u8, loop_counter: u8) -> Self {
        let color_index = match color_index {
            1..=MAX_COLOR => color_index,
            _ => MAX_COLOR,
        };
        let loop_counter = match loop_counter {
            1..=LOOP_RESET => loop_counter,
            _ => LOOP_RESET,
        };
        Self { x, y, mask, color_index, loop_counter }
    }

    /// Random X, Y, mask and color with a full loop counter
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.random(),
            rng.random(),
            rng.random(),
            rng.random_range(1..=MAX_COLOR),
            LOOP_RESET,
        )
    }

    pub const fn color_index(&self) -> u8 {
        self.color_index
    }

    pub const fn loop_counter(&self) -> u8 {
        self.loop_counter
    }

    /// Even loop counters draw black, giving the interlaced flicker
    pub const fn is_blank_phase(&self) -> bool {
        self.loop_counter % 2 == 0
    }
}

/// One cell write produced by a tick
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
}

/// Details of the jump that closed a 63-tick loop
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Jump {
    /// Color index in effect after the jump
    pub color_index: u8,
    /// Mask in effect after the jump
    pub mask: u8,
    /// The color cycle wrapped and the mask moved on
    pub mask_advanced: bool,
}

/// Result of a single tick
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tick {
    /// Lower-right, lower-left, upper-left, upper-right; apply in this order
    pub updates: [CellUpdate; 4],
    /// State after the tick
    pub state: EngineState,
    pub jump: Option<Jump>,
}

impl Tick {
    /// Color shared by all four updates
    pub fn color(&self) -> Rgb {
        self.updates[0].color
    }
}

/// Owns the state and advances it one step at a time.
/// `tick` has no side effects beyond the engine's own state.
#[derive(Clone, Debug)]
pub struct KaleidoscopeEngine {
    state: EngineState,
}

impl KaleidoscopeEngine {
    pub const fn new(state: EngineState) -> Self {
        Self { state }
    }

    /// Engine seeded from the given random source
    pub fn seeded<R: Rng>(rng: &mut R) -> Self {
        Self::new(EngineState::random(rng))
    }

    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Advance the pattern by one step
    pub fn tick(&mut self) -> Tick {
        let s = &mut self.state;

        let new_y = s.y.wrapping_add((s.x >> 2) & s.mask);
        let new_x = s.x.wrapping_sub((new_y >> 2) & s.mask);

        let color = if s.is_blank_phase() {
            Rgb::BLACK
        } else {
            Palette::color(s.color_index)
        };

        let updates = mirrored_updates(new_x, new_y, color);

        s.x = new_x;
        s.y = new_y;

        s.loop_counter -= 1;
        let jump = (s.loop_counter == 0).then(|| {
            s.loop_counter = LOOP_RESET;
            s.x = s.x.wrapping_add(1);
            s.y = s.y.wrapping_add(1);

            s.color_index -= 1;
            let mask_advanced = s.color_index == 0;
            if mask_advanced {
                s.color_index = MAX_COLOR;
                s.mask = s.mask.wrapping_add(1);
                tracing::debug!(mask = s.mask, "color cycle complete, mask advanced");
            }
            tracing::trace!(x = s.x, y = s.y, color = s.color_index, "jump");

            Jump {
                color_index: s.color_index,
                mask: s.mask,
                mask_advanced,
            }
        });

        Tick {
            updates,
            state: self.state,
            jump,
        }
    }
}

/// Scale 0..=255 down to 0..=31 and reflect into all four quadrants
fn mirrored_updates(x: u8, y: u8, color: Rgb) -> [CellUpdate; 4] {
    let gx = usize::from(x / 8);
    let gy = usize::from(y / 8);

    let update = |row, col| CellUpdate { row, col, color };
    [
        update(CENTER + gx, CENTER + gy),
        update(CENTER - gx, CENTER + gy),
        update(CENTER - gx, CENTER - gy),
        update(CENTER + gx, CENTER - gy),
    ]
}
