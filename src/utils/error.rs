use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExampleError {
    #[error("Empty range: min {min} is greater than max {max}")]
    RangeError { min: i32, max: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ExampleError>;
