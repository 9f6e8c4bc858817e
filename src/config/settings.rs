//! Configuration settings for Game of Life simulations

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations to advance the world.
    pub steps: usize,
    /// Print the world every N steps. 0 disables printing; the value is
    /// consumed by driver programs, the library itself never prints.
    pub print_every: usize,
    /// Edge behaviour used when counting neighbours.
    pub topology: Topology,
}

/// Edge topology of the simulated grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Positions outside the grid count as dead.
    #[default]
    Bounded,
    /// Opposite edges are adjacent; coordinates wrap around.
    Toroidal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Ascii `.gol` file holding the initial state. None starts empty.
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Ascii `.gol` file the final state is written to. None skips saving.
    pub final_state_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                steps: 10,
                print_every: 0,
                topology: Topology::Bounded,
            },
            input: InputConfig {
                initial_state_file: None,
            },
            output: OutputConfig {
                final_state_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input.initial_state_file {
            if !path.exists() {
                anyhow::bail!("Initial state file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(steps) = cli_overrides.steps {
            self.simulation.steps = steps;
        }
        if let Some(print_every) = cli_overrides.print_every {
            self.simulation.print_every = print_every;
        }
        if let Some(topology) = cli_overrides.topology {
            self.simulation.topology = topology;
        }
        if let Some(ref input_file) = cli_overrides.input_file {
            self.input.initial_state_file = Some(input_file.clone());
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.final_state_file = Some(output_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub steps: Option<usize>,
    pub print_every: Option<usize>,
    pub topology: Option<Topology>,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.steps, 10);
        assert_eq!(settings.simulation.print_every, 0);
        assert_eq!(settings.simulation.topology, Topology::Bounded);
        assert!(settings.input.initial_state_file.is_none());
        assert!(settings.output.final_state_file.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/settings.yaml");

        let mut settings = Settings::default();
        settings.simulation.steps = 24;
        settings.simulation.topology = Topology::Toroidal;

        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();

        assert_eq!(loaded.simulation.steps, 24);
        assert_eq!(loaded.simulation.topology, Topology::Toroidal);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            steps: Some(100),
            topology: Some(Topology::Toroidal),
            input_file: Some(PathBuf::from("patterns/glider.gol")),
            ..Default::default()
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.simulation.steps, 100);
        assert_eq!(settings.simulation.topology, Topology::Toroidal);
        assert_eq!(
            settings.input.initial_state_file,
            Some(PathBuf::from("patterns/glider.gol"))
        );
        // Untouched fields keep their defaults.
        assert_eq!(settings.simulation.print_every, 0);
        assert!(settings.output.final_state_file.is_none());
    }

    #[test]
    fn test_validate_missing_input() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.input.initial_state_file = Some(PathBuf::from("does/not/exist.gol"));
        assert!(settings.validate().is_err());
    }
}
