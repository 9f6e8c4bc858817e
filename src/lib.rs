//! Game of Life simulation core
//!
//! This library provides a bounds-checked 2d grid, a double-buffered world
//! advancing it through generations under a bounded or toroidal edge
//! topology, and ascii/binary file codecs for persisting grid state.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod zoo;

pub use config::{Settings, Topology};
pub use error::Error;
pub use game_of_life::{Cell, Grid, World};

use anyhow::{Context, Result};
use tracing::debug;

/// Main entry point for running a Game of Life simulation.
///
/// Loads the initial state when one is configured (an empty world
/// otherwise), advances it by the configured number of steps, saves the
/// final state when an output file is configured, and returns the world for
/// the caller to inspect. Every file or parse failure propagates to the
/// caller unchanged.
pub fn run_simulation(settings: &Settings) -> Result<World> {
    settings.validate()?;

    let initial_state = match &settings.input.initial_state_file {
        Some(path) => zoo::load_ascii(path)
            .with_context(|| format!("Failed to load initial state: {}", path.display()))?,
        None => Grid::default(),
    };

    let mut world = World::from_grid(initial_state);
    debug!(
        width = world.width(),
        height = world.height(),
        steps = settings.simulation.steps,
        topology = ?settings.simulation.topology,
        "advancing world"
    );
    world.advance(settings.simulation.steps, settings.simulation.topology);

    if let Some(path) = &settings.output.final_state_file {
        zoo::save_ascii(path, world.state())
            .with_context(|| format!("Failed to save final state: {}", path.display()))?;
    }

    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_simulation_without_files() {
        let world = run_simulation(&Settings::default()).unwrap();
        assert_eq!(world.total_cells(), 0);
    }

    #[test]
    fn test_run_simulation_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("glider.gol");
        let output = dir.path().join("final.gol");

        let mut grid = Grid::square(6);
        grid.merge(&zoo::glider(), 1, 1, false).unwrap();
        zoo::save_ascii(&input, &grid).unwrap();

        let mut settings = Settings::default();
        settings.simulation.steps = 12;
        settings.input.initial_state_file = Some(input);
        settings.output.final_state_file = Some(output.clone());

        let world = run_simulation(&settings).unwrap();

        // The glider crashed into the corner and settled into a block.
        assert_eq!(world.alive_cells(), 4);
        assert_eq!(world.state().get(4, 4).unwrap(), Cell::Alive);
        assert_eq!(world.state().get(5, 5).unwrap(), Cell::Alive);

        let saved = zoo::load_ascii(&output).unwrap();
        assert_eq!(&saved, world.state());
    }

    #[test]
    fn test_run_simulation_missing_input() {
        let mut settings = Settings::default();
        settings.input.initial_state_file = Some("does/not/exist.gol".into());
        assert!(run_simulation(&settings).is_err());
    }
}
