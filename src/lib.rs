pub mod config;
pub mod core;
pub mod ffi;
pub mod utils;

pub use config::{CliConfig, FileConfig};
pub use core::factor::ExampleHolder;
pub use core::random::{random_number, BIG_NUMBER};
pub use utils::error::{ExampleError, Result};
