use thiserror::Error;

/// Rejected simulation configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("field dimensions {width}x{height} are out of range")]
    InvalidDimensions { width: usize, height: usize },

    #[error("decay factor must lie strictly between 0 and 1, got {0}")]
    InvalidDecay(f32),

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("food margin {margin} leaves no room for clump centers in a {width}x{height} field")]
    FoodMarginTooLarge { margin: i32, width: usize, height: usize },

    #[error("anthill of size {size} does not fit in a {width}x{height} field")]
    AnthillTooLarge { size: usize, width: usize, height: usize },

    #[error("unknown update ordering: {0} (expected \"sequential\" or \"buffered\")")]
    UnknownOrdering(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
