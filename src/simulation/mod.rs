pub mod agent;
pub mod anthill;
pub mod food;
pub mod pheromone;
pub mod recorder;
pub mod sensor;
pub mod snapshot;
pub mod stats;
pub mod tick;
pub mod world;

pub use agent::{Agent, Kinematics, TaskState};
pub use anthill::Anthill;
pub use food::FoodSite;
pub use pheromone::{Layer, PheromoneField, PheromoneLayers, MAX_INTENSITY};
pub use recorder::FrameRecorder;
pub use sensor::{sense, SensorReading, Steering};
pub use snapshot::{FieldSnapshot, TickSnapshot};
pub use stats::SimulationStats;
pub use tick::run_simulation_tick;
pub use world::Simulation;
