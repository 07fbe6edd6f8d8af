//! Parabolic reflector dish and lens library puzzles.

pub mod cli;
pub mod cycle;
pub mod dish;
pub mod error;
pub mod lens;

pub use cycle::{
    detect_cycle, detect_cycle_by, find_cycle, find_cycle_by, project, Cycle, Projection,
    Representative,
};
pub use dish::{DishConfig, Grid, ReflectorDish};
pub use error::{Error, Result};
pub use lens::LensLibrary;
