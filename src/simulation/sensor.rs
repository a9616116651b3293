//! Directional sensing
//!
//! An agent probes a field at three points in front of it: straight ahead
//! and rotated left and right by the sense angle. The readings decide which
//! way it turns.

use crate::core::types::Vec2;
use crate::simulation::pheromone::PheromoneField;

/// Sample `field` at `distance` from `origin`, rotated `angle_offset` from `heading`
///
/// The sample point is truncated to integer cell indices. Points outside the
/// field read as 0.
#[inline]
pub fn sense(
    field: &PheromoneField,
    origin: Vec2,
    heading: f32,
    angle_offset: f32,
    distance: f32,
) -> f32 {
    let point = origin + Vec2::from_angle(heading + angle_offset) * distance;
    let (x, y) = point.truncate();
    field.sample(x, y)
}

/// Which way an agent turns this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Left,
    Right,
    /// No side sensor strictly dominates; turn randomly
    Wander,
}

/// The three samples taken by one agent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    pub left: f32,
    pub center: f32,
    pub right: f32,
}

impl SensorReading {
    /// Take left, center and right samples
    pub fn take(
        field: &PheromoneField,
        origin: Vec2,
        heading: f32,
        sense_angle: f32,
        distance: f32,
    ) -> Self {
        Self {
            left: sense(field, origin, heading, -sense_angle, distance),
            center: sense(field, origin, heading, 0.0, distance),
            right: sense(field, origin, heading, sense_angle, distance),
        }
    }

    /// Steering rule with strict comparisons
    ///
    /// Ties and an empty field are indistinguishable and both fall back to
    /// wandering.
    pub fn steer(&self) -> Steering {
        if self.left > self.center && self.left > self.right {
            Steering::Left
        } else if self.right > self.center && self.right > self.left {
            Steering::Right
        } else {
            Steering::Wander
        }
    }
}
