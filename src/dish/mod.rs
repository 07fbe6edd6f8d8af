//! Parabolic reflector dish: rocks tilted across a grid.

mod engine;
mod grid;
mod tilt;

pub use engine::{solve_dish, DishConfig, DishReport, ReflectorDish, DEFAULT_TARGET_CYCLES};
pub use grid::{Cell, Direction, Grid};
pub use tilt::{spin_cycle, tilt};
