#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use reflector_lens::cli;
use reflector_lens::dish::{solve_dish, Grid};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = cli::parse_dish_args(&args)?;
    let text = cli::read_input(&args.input)?;
    let grid = text.parse::<Grid>().context("malformed dish")?;
    info!(
        width = grid.width(),
        height = grid.height(),
        rocks = grid.rock_count(),
        "loaded dish"
    );

    let start = Instant::now();
    let report = solve_dish(&grid, &args.config);
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "solved");

    println!("Part 1: {}", report.tilted_load);
    println!("Part 2: {}", report.projected_load);
    Ok(())
}
