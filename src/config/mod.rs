pub mod file;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::random::BIG_NUMBER;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bounds, validate_positive_number, Validate};

pub use file::FileConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "example-api")]
#[command(about = "Demo driver for the example API")]
pub struct CliConfig {
    /// Example factor to store in the holder
    #[arg(long, default_value = "1.0")]
    pub factor: f64,

    /// Lower end of the sampling range
    #[arg(long, default_value = "0")]
    pub min: i32,

    /// Upper end of the sampling range
    #[arg(long, default_value_t = BIG_NUMBER)]
    pub max: i32,

    /// How many random numbers to draw
    #[arg(long, default_value = "10")]
    pub count: usize,

    /// TOML file whose values override the flags
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("count", self.count, 1)?;
        validate_bounds("range", self.min, self.max)?;
        Ok(())
    }
}
