//! Lens library: HASH-addressed boxes filled by an initialization sequence.

mod hash;
mod library;
mod step;

pub use hash::{hash, BOX_COUNT};
pub use library::{Lens, LensBox, LensLibrary};
pub use step::{parse_sequence, split_sequence, Step};

use crate::error::Result;

/// Numbers reported for one initialization sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LensReport {
    /// Sum of `hash` over every raw step, suffix included.
    pub verification_sum: u64,
    /// Focusing power after replaying every step.
    pub focusing_power: u64,
}

/// Sum of `hash` over each comma-separated step of `input`.
pub fn verification_sum(input: &str) -> Result<u64> {
    Ok(split_sequence(input)?
        .iter()
        .map(|raw| u64::from(hash(raw)))
        .sum())
}

pub fn solve_lens(input: &str) -> Result<LensReport> {
    let verification_sum = verification_sum(input)?;
    let steps = parse_sequence(input)?;
    let mut library = LensLibrary::new();
    library.replay(&steps);
    Ok(LensReport {
        verification_sum,
        focusing_power: library.focusing_power(),
    })
}
