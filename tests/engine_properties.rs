//! Property tests for the kaleidoscope engine over arbitrary starting states.
//!
//! 1. Range invariant on every field after every tick.
//! 2. Ticking is deterministic.
//! 3. Even pre-tick loop counters draw black.
//! 4. The four updates mirror one point about (32, 32) in one color.
//! 5. Jumps happen on the 1 -> 0 loop transition and advance the mask
//!    exactly once per 15 jumps.

use proptest::prelude::*;
use spriteoscope::{EngineState, KaleidoscopeEngine, Palette, Rgb};

fn state_strategy() -> impl Strategy<Value = EngineState> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 1u8..=15, 1u8..=63)
        .prop_map(|(x, y, mask, color, counter)| EngineState::new(x, y, mask, color, counter))
}

proptest! {
    #[test]
    fn fields_stay_in_range(state in state_strategy(), ticks in 1usize..2000) {
        let mut engine = KaleidoscopeEngine::new(state);
        for _ in 0..ticks {
            let tick = engine.tick();
            prop_assert!((1..=15).contains(&tick.state.color_index()));
            prop_assert!(tick.state.loop_counter() <= 63);
            for u in &tick.updates {
                prop_assert!(u.row < 64 && u.col < 64);
            }
        }
    }

    #[test]
    fn ticking_is_deterministic(state in state_strategy(), ticks in 1usize..500) {
        let mut a = KaleidoscopeEngine::new(state);
        let mut b = KaleidoscopeEngine::new(state);
        for _ in 0..ticks {
            prop_assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn even_counter_draws_black(state in state_strategy()) {
        let mut engine = KaleidoscopeEngine::new(state);
        let tick = engine.tick();
        if state.loop_counter() % 2 == 0 {
            prop_assert_eq!(tick.color(), Rgb::BLACK);
        } else {
            prop_assert_eq!(tick.color(), Palette::color(state.color_index()));
        }
    }

    #[test]
    fn updates_are_four_fold_mirror(state in state_strategy()) {
        let mut engine = KaleidoscopeEngine::new(state);
        let tick = engine.tick();
        let [lr, ll, ul, ur] = tick.updates;

        prop_assert!(lr.row >= 32 && lr.col >= 32);
        let (gx, gy) = (lr.row - 32, lr.col - 32);
        prop_assert_eq!((ll.row, ll.col), (32 - gx, 32 + gy));
        prop_assert_eq!((ul.row, ul.col), (32 - gx, 32 - gy));
        prop_assert_eq!((ur.row, ur.col), (32 + gx, 32 - gy));
        prop_assert!(tick.updates.iter().all(|u| u.color == lr.color));
    }

    #[test]
    fn jump_only_on_last_loop(state in state_strategy()) {
        let mut engine = KaleidoscopeEngine::new(state);
        let before = *engine.state();
        let tick = engine.tick();

        if before.loop_counter() == 1 {
            let jump = tick.jump.expect("loop ended");
            prop_assert_eq!(tick.state.loop_counter(), 63);
            if before.color_index() == 1 {
                prop_assert!(jump.mask_advanced);
                prop_assert_eq!(tick.state.color_index(), 15);
                prop_assert_eq!(tick.state.mask, before.mask.wrapping_add(1));
            } else {
                prop_assert!(!jump.mask_advanced);
                prop_assert_eq!(tick.state.color_index(), before.color_index() - 1);
                prop_assert_eq!(tick.state.mask, before.mask);
            }
        } else {
            prop_assert!(tick.jump.is_none());
            prop_assert_eq!(tick.state.loop_counter(), before.loop_counter() - 1);
            prop_assert_eq!(tick.state.color_index(), before.color_index());
            prop_assert_eq!(tick.state.mask, before.mask);
        }
    }

    #[test]
    fn jump_bumps_position(x in any::<u8>(), y in any::<u8>(), color in 1u8..=15) {
        // mask 0 freezes the step, leaving only the jump's +1
        let mut engine = KaleidoscopeEngine::new(EngineState::new(x, y, 0, color, 1));
        let tick = engine.tick();
        prop_assert_eq!(tick.state.x, x.wrapping_add(1));
        prop_assert_eq!(tick.state.y, y.wrapping_add(1));
    }

    #[test]
    fn mask_advances_once_per_color_cycle(x in any::<u8>(), y in any::<u8>(), mask in any::<u8>()) {
        let mut engine = KaleidoscopeEngine::new(EngineState::new(x, y, mask, 15, 63));
        let mut jumps = 0;
        let mut advances = 0;
        while jumps < 15 {
            if let Some(jump) = engine.tick().jump {
                jumps += 1;
                if jump.mask_advanced {
                    advances += 1;
                    prop_assert_eq!(jumps, 15);
                }
            }
        }
        prop_assert_eq!(advances, 1);
        prop_assert_eq!(engine.state().mask, mask.wrapping_add(1));
        prop_assert_eq!(engine.state().color_index(), 15);
    }
}
