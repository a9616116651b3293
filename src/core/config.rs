//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. Every section can be loaded from
//! TOML; keys that are left out keep their defaults.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// How agents within one tick observe each other's deposits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOrdering {
    /// Each agent senses, moves, deposits and collides before the next one.
    /// Later agents see earlier agents' deposits from the same tick.
    #[default]
    Sequential,
    /// All agents steer and move against the post-decay field first, then
    /// deposits and collisions are applied in agent order.
    Buffered,
}

impl fmt::Display for UpdateOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Buffered => write!(f, "buffered"),
        }
    }
}

impl FromStr for UpdateOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "buffered" => Ok(Self::Buffered),
            other => Err(ConfigError::UnknownOrdering(other.to_string())),
        }
    }
}

/// Pheromone field geometry and dynamics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field width in cells (one cell per world unit)
    pub width: usize,

    /// Field height in cells
    pub height: usize,

    /// Multiplicative decay applied to every cell once per tick
    ///
    /// At 0.988 a trail loses half its strength in roughly 57 ticks,
    /// about one second at 60 ticks/sec.
    pub decay: f32,

    /// Ceiling for a single cell's intensity
    pub max_intensity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            decay: 0.988,
            max_intensity: 255.0,
        }
    }
}

/// Agent kinematics and sensing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Number of agents, fixed for the lifetime of a run
    pub count: usize,

    /// Distance moved per tick (field units)
    pub speed: f32,

    /// Heading change per tick when steering, and the bound of the random
    /// wander turn (degrees)
    pub turn_angle_deg: f32,

    /// Angular offset of the left and right sensors from the heading (degrees)
    pub sense_angle_deg: f32,

    /// Distance from the agent to each sample point (field units)
    pub sense_distance: f32,

    /// Amount deposited into the agent's own layer every tick
    ///
    /// With a ceiling of 255, three deposits on one cell saturate it.
    pub pheromone_strength: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            count: 500,
            speed: 1.5,
            turn_angle_deg: 15.0,
            sense_angle_deg: 30.0,
            sense_distance: 5.0,
            pheromone_strength: 100.0,
        }
    }
}

/// Food clump layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    /// Number of clumps scattered over the field
    pub clumps: usize,

    /// Food pieces per clump
    pub pieces_per_clump: usize,

    /// Side length of each square food piece
    pub piece_size: i32,

    /// Maximum offset of a piece from its clump center, on each axis
    pub jitter: i32,

    /// Minimum distance from a clump center to the field edge
    pub margin: i32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            clumps: 10,
            pieces_per_clump: 30,
            piece_size: 3,
            jitter: 10,
            margin: 50,
        }
    }
}

impl FoodConfig {
    pub fn total_pieces(&self) -> usize {
        self.clumps * self.pieces_per_clump
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthillConfig {
    /// Side length of the square anthill centered in the field
    pub size: usize,
}

impl Default for AnthillConfig {
    fn default() -> Self {
        Self { size: 10 }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for every random draw (headings, wander turns, food layout)
    pub seed: u64,

    /// Same-tick deposit visibility, see [`UpdateOrdering`]
    pub ordering: UpdateOrdering,

    /// Minimum agent count before buffered ordering moves agents in parallel
    ///
    /// Below this threshold, thread overhead exceeds benefits.
    /// Sequential ordering never runs in parallel.
    pub parallel_threshold: usize,

    pub field: FieldConfig,
    pub agents: AgentConfig,
    pub food: FoodConfig,
    pub anthill: AnthillConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            ordering: UpdateOrdering::Sequential,
            parallel_threshold: 1000,
            field: FieldConfig::default(),
            agents: AgentConfig::default(),
            food: FoodConfig::default(),
            anthill: AnthillConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load a config from a TOML file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let FieldConfig { width, height, decay, max_intensity } = self.field;

        // Rectangles use i32 coordinates and the grid holds width * height cells
        let max_side = i32::MAX as usize;
        if width == 0
            || height == 0
            || width > max_side
            || height > max_side
            || width.checked_mul(height).is_none()
        {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        // A factor of 1 or more would grow trails instead of fading them
        if !(decay > 0.0 && decay < 1.0) {
            return Err(ConfigError::InvalidDecay(decay));
        }

        if !(max_intensity.is_finite() && max_intensity > 0.0) {
            return Err(invalid("field.max_intensity", max_intensity, "must be positive"));
        }

        let agents = &self.agents;
        for (name, value) in [
            ("agents.speed", agents.speed),
            ("agents.turn_angle_deg", agents.turn_angle_deg),
            ("agents.sense_angle_deg", agents.sense_angle_deg),
            ("agents.sense_distance", agents.sense_distance),
            ("agents.pheromone_strength", agents.pheromone_strength),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, value, "must be finite and non-negative"));
            }
        }

        let food = &self.food;
        if food.piece_size <= 0 {
            return Err(invalid("food.piece_size", food.piece_size, "must be positive"));
        }
        if food.jitter < 0 || food.margin < 0 {
            return Err(ConfigError::InvalidParameter {
                name: "food",
                reason: "jitter and margin must be non-negative".into(),
            });
        }
        if food.total_pieces() > 0 {
            let margin = food.margin as i64;
            if 2 * margin > width as i64 || 2 * margin > height as i64 {
                return Err(ConfigError::FoodMarginTooLarge {
                    margin: food.margin,
                    width,
                    height,
                });
            }
        }

        if self.anthill.size == 0 {
            return Err(invalid("anthill.size", self.anthill.size, "must be positive"));
        }
        if self.anthill.size > width || self.anthill.size > height {
            return Err(ConfigError::AnthillTooLarge {
                size: self.anthill.size,
                width,
                height,
            });
        }

        Ok(())
    }

    /// Render the config as a TOML document
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn invalid(name: &'static str, value: impl fmt::Display, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: format!("{} ({})", reason, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field.width, 800);
        assert_eq!(config.field.height, 600);
        assert_eq!(config.food.total_pieces(), 300);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut config = SimulationConfig::default();
        config.field.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_decay_outside_unit_interval() {
        for decay in [1.0, 1.2, 0.0, -0.1, f32::NAN] {
            let mut config = SimulationConfig::default();
            config.field.decay = decay;
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidDecay(_))),
                "decay {} should be rejected",
                decay
            );
        }
    }

    #[test]
    fn test_rejects_negative_speed() {
        let mut config = SimulationConfig::default();
        config.agents.speed = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("agents.speed"));
    }

    #[test]
    fn test_food_margin_only_matters_with_food() {
        let mut config = SimulationConfig::default();
        config.field.width = 60;
        config.field.height = 60;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FoodMarginTooLarge { .. })
        ));

        config.food.clumps = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_dimensions_beyond_coordinate_range() {
        let mut config = SimulationConfig::default();
        config.field.width = 3_000_000_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 3_000_000_000, .. })
        ));

        let mut config = SimulationConfig::default();
        config.field.height = i32::MAX as usize + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_largest_side_is_accepted() {
        let mut config = SimulationConfig::default();
        config.field.width = i32::MAX as usize;
        config.field.height = 600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_anthill() {
        let mut config = SimulationConfig::default();
        config.anthill.size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("anthill.size"));
    }

    #[test]
    fn test_rejects_oversized_anthill() {
        let mut config = SimulationConfig::default();
        config.anthill.size = 700;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AnthillTooLarge { .. })
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            seed = 42
            ordering = "buffered"

            [agents]
            count = 2000
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.seed, 42);
        assert_eq!(config.ordering, UpdateOrdering::Buffered);
        assert_eq!(config.agents.count, 2000);
        assert_eq!(config.agents.speed, 1.5);
        assert_eq!(config.field.decay, 0.988);
    }

    #[test]
    fn test_toml_with_bad_decay_is_rejected() {
        let result = SimulationConfig::from_toml_str("[field]\ndecay = 1.5\n");
        assert!(matches!(result, Err(ConfigError::InvalidDecay(_))));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = SimulationConfig::default().to_toml_string().unwrap();
        let parsed = SimulationConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.field.width, 800);
        assert_eq!(parsed.ordering, UpdateOrdering::Sequential);
    }

    #[test]
    fn test_ordering_from_str() {
        assert_eq!("Buffered".parse::<UpdateOrdering>().unwrap(), UpdateOrdering::Buffered);
        assert_eq!("sequential".parse::<UpdateOrdering>().unwrap(), UpdateOrdering::Sequential);
        assert!("parallel".parse::<UpdateOrdering>().is_err());
    }
}
