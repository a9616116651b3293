//! Tick system - orchestrates simulation updates
//!
//! Each tick:
//! 1. Decay both pheromone layers
//! 2. For every agent, in list order:
//!    sense the layer it follows -> turn -> move -> bounce off walls
//! 3. Deposit into the layer matching the agent's task state
//! 4. Resolve food pickup (searching) or delivery (returning)
//! 5. Advance the tick counter
//!
//! With [`UpdateOrdering::Sequential`] steps 2-4 run per agent, so later
//! agents sense deposits laid earlier in the same tick. With
//! [`UpdateOrdering::Buffered`] step 2 runs for every agent first (in
//! parallel with rayon above the configured threshold) against the
//! post-decay layers, then steps 3-4 run in agent order.

use rayon::prelude::*;

use crate::core::config::UpdateOrdering;
use crate::core::rng::derive_agent_rng;
use crate::simulation::agent::{Agent, Kinematics, TaskState};
use crate::simulation::anthill::Anthill;
use crate::simulation::food::{find_food_at, FoodSite};
use crate::simulation::pheromone::PheromoneLayers;
use crate::simulation::stats::Counters;
use crate::simulation::world::Simulation;

/// Run a single simulation tick
pub fn run_simulation_tick(sim: &mut Simulation) {
    sim.layers.decay(sim.config.field.decay);

    let before = sim.counters;
    match sim.config.ordering {
        UpdateOrdering::Sequential => advance_sequential(sim),
        UpdateOrdering::Buffered => advance_buffered(sim),
    }

    sim.tick += 1;

    tracing::trace!(
        tick = sim.tick,
        pickups = sim.counters.pickups - before.pickups,
        deliveries = sim.counters.deliveries - before.deliveries,
        food_remaining = sim.food.len(),
        "tick complete"
    );
}

fn advance_sequential(sim: &mut Simulation) {
    let Simulation {
        agents,
        food,
        anthill,
        layers,
        kinematics,
        rng,
        counters,
        ..
    } = sim;

    for agent in agents.iter_mut() {
        agent.advance(layers.get(agent.state().follow_layer()), kinematics, rng);
        deposit(agent, layers, kinematics);
        resolve_collisions(agent, food, anthill, counters);
    }
}

fn advance_buffered(sim: &mut Simulation) {
    let seed = sim.config.seed;
    let tick = sim.tick;
    let parallel = sim.agents.len() >= sim.config.parallel_threshold;

    let Simulation {
        agents,
        food,
        anthill,
        layers,
        kinematics,
        counters,
        ..
    } = sim;

    {
        let sensed: &PheromoneLayers = layers;
        let kinematics: &Kinematics = kinematics;
        let move_agent = |(index, agent): (usize, &mut Agent)| {
            let mut rng = derive_agent_rng(seed, tick, index);
            agent.advance(sensed.get(agent.state().follow_layer()), kinematics, &mut rng);
        };

        if parallel {
            agents.par_iter_mut().enumerate().for_each(&move_agent);
        } else {
            agents.iter_mut().enumerate().for_each(&move_agent);
        }
    }

    for agent in agents.iter_mut() {
        deposit(agent, layers, kinematics);
        resolve_collisions(agent, food, anthill, counters);
    }
}

fn deposit(agent: &Agent, layers: &mut PheromoneLayers, kinematics: &Kinematics) {
    layers.get_mut(agent.state().deposit_layer()).deposit(
        agent.position.x,
        agent.position.y,
        kinematics.deposit_strength,
    );
}

/// Flip task state on food or anthill contact
///
/// A searching agent consumes the first live site containing it; a
/// returning agent drops its food inside the anthill.
fn resolve_collisions(
    agent: &mut Agent,
    food: &mut Vec<FoodSite>,
    anthill: &Anthill,
    counters: &mut Counters,
) {
    match agent.state() {
        TaskState::Searching => {
            if let Some(index) = find_food_at(food, agent.position) {
                let site = food.remove(index);
                agent.pick_up_food();
                counters.pickups += 1;
                tracing::debug!(
                    x = site.rect.x,
                    y = site.rect.y,
                    remaining = food.len(),
                    "Food picked up"
                );
            }
        }
        TaskState::Returning => {
            if anthill.contains(agent.position) {
                agent.drop_off_food();
                counters.deliveries += 1;
                tracing::debug!(total = counters.deliveries, "Food delivered");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::{Rect, Vec2};
    use crate::simulation::pheromone::Layer;

    fn sim_with(config: SimulationConfig, agents: Vec<Agent>) -> Simulation {
        let mut sim = Simulation::new(config).unwrap();
        sim.agents = agents;
        sim.food.clear();
        sim
    }

    #[test]
    fn test_decay_happens_before_agents_move() {
        let mut sim = sim_with(SimulationConfig::default(), Vec::new());
        sim.layers.search.deposit(10.0, 10.0, 100.0);

        sim.step();

        assert!((sim.layers.search.sample(10, 10) - 98.8).abs() < 1e-4);
    }

    #[test]
    fn test_searching_agent_marks_search_layer() {
        let agent = Agent::new(Vec2::new(100.5, 100.5), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);

        sim.step();

        let (x, y) = sim.agents[0].position.truncate();
        assert_eq!(sim.field(Layer::Search).sample(x, y), 100.0);
        assert_eq!(sim.field(Layer::Return).total(), 0.0);
    }

    #[test]
    fn test_returning_agent_marks_return_layer() {
        let agent = Agent::returning(Vec2::new(100.5, 100.5), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);

        sim.step();

        let (x, y) = sim.agents[0].position.truncate();
        assert_eq!(sim.field(Layer::Return).sample(x, y), 100.0);
        assert_eq!(sim.field(Layer::Search).total(), 0.0);
    }

    #[test]
    fn test_pickup_removes_site_and_flips_state() {
        let agent = Agent::new(Vec2::new(50.5, 50.5), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);
        sim.food = vec![
            FoodSite::new(Rect::new(50, 49, 3, 3)),
            FoodSite::new(Rect::new(200, 200, 3, 3)),
        ];

        sim.step();

        let agent = &sim.agents[0];
        assert_eq!(agent.state(), TaskState::Returning);
        assert!(agent.carrying_food());
        assert_eq!(sim.food, vec![FoodSite::new(Rect::new(200, 200, 3, 3))]);
        assert_eq!(sim.counters.pickups, 1);
    }

    #[test]
    fn test_overlapping_sites_consume_first_only() {
        let agent = Agent::new(Vec2::new(50.5, 50.5), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);
        sim.food = vec![
            FoodSite::new(Rect::new(50, 49, 3, 3)),
            FoodSite::new(Rect::new(51, 49, 3, 3)),
        ];

        sim.step();

        assert_eq!(sim.food, vec![FoodSite::new(Rect::new(51, 49, 3, 3))]);
    }

    #[test]
    fn test_returning_agent_ignores_food() {
        let agent = Agent::returning(Vec2::new(50.5, 50.5), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);
        sim.food = vec![FoodSite::new(Rect::new(50, 49, 3, 3))];

        sim.step();

        assert_eq!(sim.food.len(), 1);
        assert_eq!(sim.agents[0].state(), TaskState::Returning);
    }

    #[test]
    fn test_delivery_at_anthill() {
        // Left edge of the default anthill (395, 295, 10, 10), facing inward
        let agent = Agent::returning(Vec2::new(395.0, 300.0), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);

        sim.step();

        let agent = &sim.agents[0];
        assert_eq!(agent.state(), TaskState::Searching);
        assert!(!agent.carrying_food());
        assert_eq!(sim.counters.deliveries, 1);
    }

    #[test]
    fn test_searching_agent_at_anthill_stays_searching() {
        let agent = Agent::new(Vec2::new(400.0, 300.0), 0.0);
        let mut sim = sim_with(SimulationConfig::default(), vec![agent]);

        sim.step();

        assert_eq!(sim.agents[0].state(), TaskState::Searching);
        assert_eq!(sim.counters.deliveries, 0);
    }

    #[test]
    fn test_buffered_small_and_parallel_paths_agree() {
        let mut config = SimulationConfig::default();
        config.ordering = UpdateOrdering::Buffered;
        config.agents.count = 64;

        let mut serial_config = config.clone();
        serial_config.parallel_threshold = usize::MAX;
        let mut parallel_config = config;
        parallel_config.parallel_threshold = 0;

        let mut serial = Simulation::new(serial_config).unwrap();
        let mut parallel = Simulation::new(parallel_config).unwrap();
        serial.run(50);
        parallel.run(50);

        assert_eq!(serial.agents, parallel.agents);
        assert_eq!(serial.food, parallel.food);
        assert_eq!(serial.layers.search.cells(), parallel.layers.search.cells());
    }
}
