#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use reflector_lens::cli;
use reflector_lens::lens::solve_lens;
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = cli::parse_lens_args(&args)?;
    let text = cli::read_input(&args.input)?;

    let start = Instant::now();
    let report = solve_lens(&text).context("malformed initialization sequence")?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "solved");

    println!("Part 1: {}", report.verification_sum);
    println!("Part 2: {}", report.focusing_power);
    Ok(())
}
