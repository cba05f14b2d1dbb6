use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::CliConfig;
use crate::utils::error::Result;

/// Overrides loaded from a TOML file. Every field is optional; only the
/// values present in the file replace the command-line ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub factor: Option<f64>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub count: Option<usize>,
}

impl FileConfig {
    /// Reads and parses the TOML file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Applies every value present in the file on top of `cli`.
    pub fn apply(&self, cli: &mut CliConfig) {
        if let Some(factor) = self.factor {
            cli.factor = factor;
        }
        if let Some(min) = self.min {
            cli.min = min;
        }
        if let Some(max) = self.max {
            cli.max = max;
        }
        if let Some(count) = self.count {
            cli.count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExampleError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_partial_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "factor = 2.5\nmax = 99").unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(config.factor, Some(2.5));
        assert_eq!(config.min, None);
        assert_eq!(config.max, Some(99));
        assert_eq!(config.count, None);
    }

    #[test]
    fn apply_overrides_only_present_fields() {
        let mut cli = CliConfig::parse_from(["example-api", "--min", "5", "--count", "3"]);
        let file = FileConfig {
            max: Some(10),
            ..Default::default()
        };

        file.apply(&mut cli);
        assert_eq!(cli.min, 5);
        assert_eq!(cli.max, 10);
        assert_eq!(cli.count, 3);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "factor = ").unwrap();

        let err = FileConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ExampleError::TomlError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FileConfig::from_path("/nonexistent/example.toml").unwrap_err();
        assert!(matches!(err, ExampleError::IoError(_)));
    }
}
