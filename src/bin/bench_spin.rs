#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use reflector_lens::dish::{spin_cycle, Cell, Grid};
use reflector_lens::{find_cycle, project, Projection};
use std::time::Instant;

const SEED: u64 = 0x5EED_1234_ABCD_EF01;
const TARGET: u64 = 1_000_000_000;

fn seed_dish(size: usize, rock_density: f64, fixed_density: f64, seed: u64) -> Grid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let rock_threshold = (u64::MAX as f64 * rock_density) as u64;
    let fixed_threshold = (u64::MAX as f64 * (rock_density + fixed_density)) as u64;
    let rows: Vec<Vec<Cell>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.next_u64() {
                    r if r <= rock_threshold => Cell::Movable,
                    r if r <= fixed_threshold => Cell::Fixed,
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("square dish is rectangular")
}

fn bench(size: usize, mode: Projection) -> (f64, u64, u64, u64) {
    let grid = seed_dish(size, 0.20, 0.08, SEED);
    let cycle = find_cycle(&grid, spin_cycle);

    let start = Instant::now();
    let state = project(&grid, TARGET, spin_cycle, mode);
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, cycle.preperiod, cycle.length, state.north_load())
}

fn main() {
    let sizes: &[usize] = &[10, 50, 100, 200];

    println!(
        "{:<10} {:<15} {:>10} {:>8} {:>12} {:>12}",
        "Dish", "Projection", "Preperiod", "Length", "Load", "Total(ms)"
    );
    println!("{}", "-".repeat(72));

    for &size in sizes {
        for mode in [Projection::Exact, Projection::Representative] {
            let (total_ms, preperiod, length, load) = bench(size, mode);
            println!(
                "{:<10} {:<15} {:>10} {:>8} {:>12} {:>12.3}",
                format!("{}x{}", size, size),
                format!("{mode:?}"),
                preperiod,
                length,
                load,
                total_ms
            );
        }
    }
}
