//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod world;

pub use grid::{Cell, Grid};
pub use world::World;
