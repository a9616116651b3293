pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::SimulationConfig;
pub use error::{ConfigError, Result, SimError};
pub use types::{Rect, Tick, Vec2};
