//! Configuration management for Game of Life simulations

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, Settings, SimulationConfig, Topology,
};
