use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub generation: GenerationSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    pub count: Option<usize>,
    pub output_path: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CpfError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CpfError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CpfError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.generation.count {
            validate_positive_number("generation.count", count, 1)?;
        }
        if let Some(path) = &self.generation.output_path {
            validate_path("generation.output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[generation]
count = 200
output_path = "out/cpfs.csv"
seed = 42

[logging]
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.generation.count, Some(200));
        assert_eq!(config.generation.output_path.as_deref(), Some("out/cpfs.csv"));
        assert_eq!(config.generation.seed, Some(42));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.generation.count, None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CPF_GEN_TEST_OUTPUT", "from-env.csv");
        let config = TomlConfig::from_toml_str(
            r#"
[generation]
output_path = "${CPF_GEN_TEST_OUTPUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.generation.output_path.as_deref(), Some("from-env.csv"));
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[generation]
output_path = "${CPF_GEN_TEST_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.generation.output_path.as_deref(),
            Some("${CPF_GEN_TEST_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_rejects_zero_count() {
        let config = TomlConfig::from_toml_str("[generation]\ncount = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        match TomlConfig::from_toml_str("[generation\ncount = ") {
            Err(CpfError::ConfigError { message }) => assert!(message.contains("TOML parsing error")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
