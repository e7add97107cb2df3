#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_COUNT: usize = 15000;
pub const DEFAULT_OUTPUT_PATH: &str = "cpfs.csv";

/// Resolved settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub count: usize,
    pub output_path: String,
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            seed: None,
        }
    }
}

impl GenerationSettings {
    /// Layer file values over the defaults.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            count: file.generation.count.unwrap_or(defaults.count),
            output_path: file
                .generation
                .output_path
                .clone()
                .unwrap_or(defaults.output_path),
            seed: file.generation.seed,
        }
    }

    /// Layer explicit overrides (usually CLI flags) on top.
    pub fn with_overrides(
        mut self,
        count: Option<usize>,
        output_path: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(count) = count {
            self.count = count;
        }
        if let Some(output_path) = output_path {
            self.output_path = output_path;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl ConfigProvider for GenerationSettings {
    fn count(&self) -> usize {
        self.count
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for GenerationSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("count", self.count, 1)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.count(), 15000);
        assert_eq!(settings.output_path(), "cpfs.csv");
        assert_eq!(settings.seed(), None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[generation]\ncount = 10\noutput_path = \"file.csv\"\nseed = 1\n",
        )
        .unwrap();

        let settings = GenerationSettings::from_toml(&file).with_overrides(
            Some(20),
            None,
            Some(9),
        );

        assert_eq!(settings.count, 20);
        assert_eq!(settings.output_path, "file.csv");
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = GenerationSettings::default().with_overrides(Some(0), None, None);
        assert!(zero.validate().is_err());

        let empty = GenerationSettings::default().with_overrides(None, Some(String::new()), None);
        assert!(empty.validate().is_err());
    }
}
