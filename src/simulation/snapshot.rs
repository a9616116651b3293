//! Read-only snapshots handed to renderers and recorders

use serde::Serialize;

use crate::core::types::{Rect, Tick, Vec2};
use crate::simulation::pheromone::PheromoneField;
use crate::simulation::world::Simulation;

/// Byte view of one pheromone layer
///
/// Row-major, clipped to `[0, 255]` and truncated toward zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub width: usize,
    pub height: usize,
    pub intensities: Vec<u8>,
}

impl FieldSnapshot {
    pub fn capture(field: &PheromoneField) -> Self {
        Self {
            width: field.width(),
            height: field.height(),
            intensities: field.to_bytes(),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.intensities[y * self.width + x])
        } else {
            None
        }
    }
}

/// Everything a renderer draws for one tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickSnapshot {
    pub tick: Tick,
    pub agents: Vec<Vec2>,
    pub carrying: Vec<bool>,
    pub food: Vec<Rect>,
    pub anthill: Rect,
    pub search: FieldSnapshot,
    pub returning: FieldSnapshot,
}

impl TickSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        Self {
            tick: sim.tick,
            agents: sim.agents.iter().map(|a| a.position).collect(),
            carrying: sim.agents.iter().map(|a| a.carrying_food()).collect(),
            food: sim.food.iter().map(|f| f.rect).collect(),
            anthill: sim.anthill.rect,
            search: FieldSnapshot::capture(&sim.layers.search),
            returning: FieldSnapshot::capture(&sim.layers.returning),
        }
    }
}
