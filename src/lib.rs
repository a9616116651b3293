//! Stigmergy Sim - ant colony pheromone-trail simulation kernel
//!
//! Agents explore a bounded field, lay decaying trails on two layers, and
//! follow the other layer's trails. Paths between the anthill and food
//! emerge from local sensing alone.

pub mod core;
pub mod simulation;
pub mod spatial;

pub use crate::core::config::{SimulationConfig, UpdateOrdering};
pub use crate::core::error::{ConfigError, Result, SimError};
pub use crate::simulation::Simulation;
