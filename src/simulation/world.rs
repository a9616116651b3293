//! Simulation aggregate - owns every piece of mutable state

use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::ConfigError;
use crate::core::rng::create_rng;
use crate::core::types::{Tick, Vec2};
use crate::simulation::agent::{spawn_colony, Agent, Kinematics};
use crate::simulation::anthill::Anthill;
use crate::simulation::food::{generate_food_clumps, FoodSite};
use crate::simulation::pheromone::{Layer, PheromoneField, PheromoneLayers};
use crate::simulation::snapshot::TickSnapshot;
use crate::simulation::stats::{Counters, SimulationStats};
use crate::simulation::tick::run_simulation_tick;

/// The simulation: both pheromone layers, the colony, and the food
///
/// State is only observable between ticks. Agents, food and layers are
/// public so drivers and tests can arrange scenarios directly.
pub struct Simulation {
    pub tick: Tick,
    pub agents: Vec<Agent>,
    /// Live food in consumption order
    pub food: Vec<FoodSite>,
    pub anthill: Anthill,
    pub layers: PheromoneLayers,
    pub(crate) config: SimulationConfig,
    pub(crate) kinematics: Kinematics,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) counters: Counters,
    food_initial: usize,
}

impl Simulation {
    /// Validate `config` and lay out food, anthill and agents
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (width, height) = (config.field.width, config.field.height);
        let mut rng = create_rng(config.seed);

        let food = generate_food_clumps(&config.food, width, height, &mut rng);
        let anthill = Anthill::centered(width, height, config.anthill.size);
        let agents = spawn_colony(config.agents.count, anthill.entrance(width, height), &mut rng);
        let layers = PheromoneLayers::new(width, height, config.field.max_intensity);

        tracing::info!(
            width,
            height,
            agents = agents.len(),
            food = food.len(),
            ordering = %config.ordering,
            seed = config.seed,
            "Simulation initialized"
        );

        Ok(Self {
            tick: 0,
            food_initial: food.len(),
            agents,
            food,
            anthill,
            layers,
            kinematics: Kinematics::from_config(&config.agents),
            config,
            rng,
            counters: Counters::default(),
        })
    }

    /// Advance one tick
    pub fn step(&mut self) {
        run_simulation_tick(self);
    }

    /// Advance `ticks` ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.field.width
    }

    pub fn height(&self) -> usize {
        self.config.field.height
    }

    pub fn field(&self, layer: Layer) -> &PheromoneField {
        self.layers.get(layer)
    }

    pub fn agent_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.agents.iter().map(|agent| agent.position)
    }

    pub fn food_initial(&self) -> usize {
        self.food_initial
    }

    /// Read-only view for renderers and recorders
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot::capture(self)
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats::collect(self)
    }
}
