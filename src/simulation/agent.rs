//! Agents ("ants") and their per-tick movement model
//!
//! An agent is either searching for food or returning home with it. The task
//! state selects which layer the agent follows and which one it marks:
//! searchers follow the return trail and lay search trail, returners do the
//! opposite.

use std::f32::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::AgentConfig;
use crate::core::types::Vec2;
use crate::simulation::pheromone::{Layer, PheromoneField};
use crate::simulation::sensor::{SensorReading, Steering};

/// Behavioral mode of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    Searching,
    Returning,
}

impl TaskState {
    /// Layer this state marks
    pub fn deposit_layer(self) -> Layer {
        match self {
            Self::Searching => Layer::Search,
            Self::Returning => Layer::Return,
        }
    }

    /// Layer this state follows
    pub fn follow_layer(self) -> Layer {
        self.deposit_layer().opposite()
    }
}

/// Movement and sensing parameters, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub speed: f32,
    pub turn_angle: f32,
    pub sense_angle: f32,
    pub sense_distance: f32,
    pub deposit_strength: f32,
}

impl Kinematics {
    pub fn from_config(config: &AgentConfig) -> Self {
        Self {
            speed: config.speed,
            turn_angle: config.turn_angle_deg.to_radians(),
            sense_angle: config.sense_angle_deg.to_radians(),
            sense_distance: config.sense_distance,
            deposit_strength: config.pheromone_strength,
        }
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::from_config(&AgentConfig::default())
    }
}

/// A single ant
///
/// `carrying_food` mirrors `state == Returning`; both only change together
/// through [`Agent::pick_up_food`] and [`Agent::drop_off_food`].
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vec2,
    /// Radians, unbounded
    pub heading: f32,
    state: TaskState,
    carrying_food: bool,
}

impl Agent {
    /// A searching agent
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            state: TaskState::Searching,
            carrying_food: false,
        }
    }

    /// An agent already carrying food home
    pub fn returning(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            state: TaskState::Returning,
            carrying_food: true,
        }
    }

    #[inline]
    pub fn state(&self) -> TaskState {
        self.state
    }

    #[inline]
    pub fn carrying_food(&self) -> bool {
        self.carrying_food
    }

    pub fn pick_up_food(&mut self) {
        self.state = TaskState::Returning;
        self.carrying_food = true;
    }

    pub fn drop_off_food(&mut self) {
        self.state = TaskState::Searching;
        self.carrying_food = false;
    }

    /// Sense `follow`, turn, move, and bounce off the field edges
    ///
    /// `follow` must be the layer matching the agent's state before any
    /// transition this tick. Returns the steering decision taken.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        follow: &PheromoneField,
        kinematics: &Kinematics,
        rng: &mut R,
    ) -> Steering {
        let reading = SensorReading::take(
            follow,
            self.position,
            self.heading,
            kinematics.sense_angle,
            kinematics.sense_distance,
        );
        let steering = reading.steer();
        self.turn(steering, kinematics.turn_angle, rng);

        self.position += Vec2::from_angle(self.heading) * kinematics.speed;
        self.reflect_off_walls(follow.width(), follow.height());
        steering
    }

    fn turn<R: Rng + ?Sized>(&mut self, steering: Steering, turn_angle: f32, rng: &mut R) {
        self.heading += match steering {
            Steering::Left => -turn_angle,
            Steering::Right => turn_angle,
            Steering::Wander => rng.gen_range(-turn_angle..=turn_angle),
        };
    }

    /// Reflect the heading on each axis whose bound was crossed and clamp
    ///
    /// The axes are independent, so a corner flips both components.
    pub fn reflect_off_walls(&mut self, width: usize, height: usize) {
        let max_x = width.saturating_sub(1) as f32;
        let max_y = height.saturating_sub(1) as f32;

        if self.position.x < 0.0 || self.position.x > max_x {
            self.heading = PI - self.heading;
            self.position.x = self.position.x.clamp(0.0, max_x);
        }
        if self.position.y < 0.0 || self.position.y > max_y {
            self.heading = -self.heading;
            self.position.y = self.position.y.clamp(0.0, max_y);
        }
    }
}

/// Spawn `count` searching agents at `home` with uniformly random headings
pub fn spawn_colony<R: Rng + ?Sized>(count: usize, home: Vec2, rng: &mut R) -> Vec<Agent> {
    (0..count)
        .map(|_| Agent::new(home, rng.gen_range(0.0..TAU)))
        .collect()
}
