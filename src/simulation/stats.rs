//! Run statistics

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;
use crate::simulation::world::Simulation;

/// Cumulative event counters maintained by the tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub pickups: u64,
    pub deliveries: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub tick: Tick,
    pub agents: usize,
    pub food_initial: usize,
    pub food_remaining: usize,
    pub pickups: u64,
    pub deliveries: u64,
    /// Agents currently carrying food
    pub carrying: usize,
    pub search_intensity: f64,
    pub return_intensity: f64,
}

impl SimulationStats {
    pub fn collect(sim: &Simulation) -> Self {
        Self {
            tick: sim.tick,
            agents: sim.agents.len(),
            food_initial: sim.food_initial(),
            food_remaining: sim.food.len(),
            pickups: sim.counters.pickups,
            deliveries: sim.counters.deliveries,
            carrying: sim.agents.iter().filter(|a| a.carrying_food()).count(),
            search_intensity: sim.layers.search.total(),
            return_intensity: sim.layers.returning.total(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Tick {}: {} agents, {} carrying\nfood {}/{} left, {} picked up, {} delivered",
            self.tick,
            self.agents,
            self.carrying,
            self.food_remaining,
            self.food_initial,
            self.pickups,
            self.deliveries,
        )
    }
}
