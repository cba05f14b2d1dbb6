pub mod factor;
pub mod random;

pub use factor::ExampleHolder;
pub use random::{random_number, BIG_NUMBER};
