//! Tick throughput and a multi-seed coverage survey

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use spriteoscope::{EngineState, GridRenderer, HeadlessRenderer, KaleidoscopeEngine, GRID_SIZE};

/// Ticks in one full color cycle (15 jumps of 63 ticks)
const CYCLE_TICKS: u64 = 15 * 63;

fn benchmark_ticks(iterations: u64) -> f64 {
    let mut engine = KaleidoscopeEngine::seeded(&mut StdRng::seed_from_u64(1));
    let mut checksum = 0usize;

    let start = Instant::now();
    for _ in 0..iterations {
        let tick = engine.tick();
        checksum = checksum.wrapping_add(tick.updates[0].row);
    }
    let elapsed = start.elapsed().as_secs_f64();

    std::hint::black_box(checksum);
    iterations as f64 / elapsed
}

/// Run one seed for `ticks` and report how many cells end up lit
fn coverage(seed: u64, ticks: u64) -> (EngineState, usize) {
    let initial = EngineState::random(&mut StdRng::seed_from_u64(seed));
    let mut engine = KaleidoscopeEngine::new(initial);
    let mut renderer = HeadlessRenderer::create_grid(GRID_SIZE, GRID_SIZE, 1.0)
        .expect("grid dimensions are non-zero");

    for _ in 0..ticks {
        let tick = engine.tick();
        for u in &tick.updates {
            renderer.apply_update(u.row, u.col, u.color);
        }
    }
    (initial, renderer.grid().lit_count())
}

fn main() {
    println!("=== Kaleidoscope Benchmark ===\n");

    let rate = benchmark_ticks(10_000_000);
    println!("Engine throughput: {:.1}M ticks/sec", rate / 1_000_000.0);
    println!("Headroom at 180 Hz: {:.0}x\n", rate / 180.0);

    let seeds = 1024u64;
    let start = Instant::now();
    let mut results: Vec<(u64, EngineState, usize)> = (0..seeds)
        .into_par_iter()
        .map(|seed| {
            let (state, lit) = coverage(seed, CYCLE_TICKS * 4);
            (seed, state, lit)
        })
        .collect();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    results.sort_by_key(|&(_, _, lit)| std::cmp::Reverse(lit));
    let total: usize = results.iter().map(|&(_, _, lit)| lit).sum();

    println!("Surveyed {} seeds x {} ticks in {:.1} ms", seeds, CYCLE_TICKS * 4, elapsed_ms);
    println!("Mean lit cells: {:.1} / {}", total as f64 / seeds as f64, GRID_SIZE * GRID_SIZE);
    println!("\n{:>6} {:>5} {:>5} {:>6} {:>6} {:>6}", "Seed", "X", "Y", "Mask", "Color", "Lit");
    println!("{:-<40}", "");
    for (seed, state, lit) in results.iter().take(10) {
        println!(
            "{:>6} {:>5} {:>5} {:>#6x} {:>6} {:>6}",
            seed, state.x, state.y, state.mask, state.color_index(), lit
        );
    }
}
