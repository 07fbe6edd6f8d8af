//! Shared plumbing for the `dish` and `lens` binaries.
//!
//! Both run bare, reading `input.txt` from the working directory. Flags are
//! optional overrides.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cycle::Projection;
use crate::dish::DishConfig;

pub const DEFAULT_INPUT: &str = "input.txt";

pub const DISH_USAGE: &str =
    "usage: dish [--input PATH] [--cycles N] [--projection exact|representative]";
pub const LENS_USAGE: &str = "usage: lens [--input PATH]";

#[derive(Clone, Debug)]
pub struct DishArgs {
    pub input: PathBuf,
    pub config: DishConfig,
}

#[derive(Clone, Debug)]
pub struct LensArgs {
    pub input: PathBuf,
}

fn next_arg<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

/// Parse `dish` flags. `args` excludes the program name.
pub fn parse_dish_args(args: &[String]) -> Result<DishArgs> {
    let mut input = PathBuf::from(DEFAULT_INPUT);
    let mut config = DishConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input = PathBuf::from(next_arg(args, i, "--input")?);
            }
            "--cycles" => {
                i += 1;
                let n: u64 = next_arg(args, i, "--cycles")?
                    .parse()
                    .context("--cycles requires a non-negative integer")?;
                config = config.target_cycles(n);
            }
            "--projection" => {
                i += 1;
                let mode = match next_arg(args, i, "--projection")?
                    .to_ascii_lowercase()
                    .as_str()
                {
                    "exact" => Projection::Exact,
                    "representative" => Projection::Representative,
                    other => {
                        bail!("unknown projection: {other} (expected exact or representative)")
                    }
                };
                config = config.projection(mode);
            }
            other => bail!("unknown argument: {other}\n{DISH_USAGE}"),
        }
        i += 1;
    }
    Ok(DishArgs { input, config })
}

/// Parse `lens` flags. `args` excludes the program name.
pub fn parse_lens_args(args: &[String]) -> Result<LensArgs> {
    let mut input = PathBuf::from(DEFAULT_INPUT);

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input = PathBuf::from(next_arg(args, i, "--input")?);
            }
            other => bail!("unknown argument: {other}\n{LENS_USAGE}"),
        }
        i += 1;
    }
    Ok(LensArgs { input })
}

pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Log to stderr so stdout carries only the answers. `RUST_LOG` overrides
/// the `info` default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
