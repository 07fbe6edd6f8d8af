//! Dish engine: owns a grid, counts spin cycles, and projects far ahead.

use tracing::debug;

use super::grid::{Direction, Grid};
use super::tilt::spin_cycle;
use crate::cycle::{self, Projection};

/// Spin cycles asked for by the support-beam inspection.
pub const DEFAULT_TARGET_CYCLES: u64 = 1_000_000_000;

/// Configuration for a dish run.
///
/// Use `DishConfig::default()` for the standard inspection, or customise
/// individual knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct DishConfig {
    /// Spin cycles to project to.
    /// `None` means `DEFAULT_TARGET_CYCLES`.
    pub target_cycles: Option<u64>,
    /// How the projection reaches the target.
    /// `None` means `Projection::Exact`.
    pub projection: Option<Projection>,
}

impl DishConfig {
    pub fn target_cycles(mut self, n: u64) -> Self {
        self.target_cycles = Some(n);
        self
    }

    pub fn projection(mut self, mode: Projection) -> Self {
        self.projection = Some(mode);
        self
    }

    fn resolved_target(&self) -> u64 {
        self.target_cycles.unwrap_or(DEFAULT_TARGET_CYCLES)
    }

    fn resolved_projection(&self) -> Projection {
        self.projection.unwrap_or_default()
    }
}

pub struct ReflectorDish {
    grid: Grid,
    generation: u64,
    config: DishConfig,
}

impl ReflectorDish {
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, DishConfig::default())
    }

    pub fn with_config(grid: Grid, config: DishConfig) -> Self {
        Self {
            grid,
            generation: 0,
            config,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Spin cycles applied so far. Single tilts do not count.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tilt(&mut self, dir: Direction) {
        self.grid.tilt(dir);
    }

    pub fn step(&mut self) {
        spin_cycle(&mut self.grid);
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn north_load(&self) -> u64 {
        self.grid.north_load()
    }

    /// Jump to the configured target generation through cycle detection.
    /// Counts from the current state, so the generation ends at
    /// `generation() + target`.
    pub fn project(&mut self) {
        let target = self.config.resolved_target();
        let mode = self.config.resolved_projection();
        self.grid = cycle::project(&self.grid, target, spin_cycle, mode);
        self.generation += target;
        debug!(generation = self.generation, ?mode, "projected dish");
    }
}

/// Loads reported for one dish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DishReport {
    /// North load after a single north tilt.
    pub tilted_load: u64,
    /// North load after the configured number of spin cycles.
    pub projected_load: u64,
}

pub fn solve_dish(grid: &Grid, config: &DishConfig) -> DishReport {
    let mut tilted = ReflectorDish::new(grid.clone());
    tilted.tilt(Direction::North);

    let mut spun = ReflectorDish::with_config(grid.clone(), config.clone());
    spun.project();

    DishReport {
        tilted_load: tilted.north_load(),
        projected_load: spun.north_load(),
    }
}
