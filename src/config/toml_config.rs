use crate::core::ConfigProvider;
use crate::utils::error::{HealthError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
const MAX_SKIP_LINES: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fixture: FixtureConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    pub diet_cases: Option<String>,
    pub coders: Option<String>,
    pub skip_lines: Option<usize>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl AppConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HealthError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HealthError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HealthError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.fixture.diet_cases {
            validation::validate_path("fixture.diet_cases", path)?;
        }
        if let Some(path) = &self.fixture.coders {
            validation::validate_path("fixture.coders", path)?;
        }
        if let Some(skip_lines) = self.fixture.skip_lines {
            validation::validate_range("fixture.skip_lines", skip_lines, 0, MAX_SKIP_LINES)?;
        }
        if let Some(delimiter) = &self.fixture.delimiter {
            validation::validate_delimiter("fixture.delimiter", delimiter)?;
        }
        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn log_json(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for AppConfig {
    fn diet_cases_path(&self) -> Option<&str> {
        self.fixture.diet_cases.as_deref()
    }

    fn coders_path(&self) -> Option<&str> {
        self.fixture.coders.as_deref()
    }

    fn skip_lines(&self) -> usize {
        self.fixture.skip_lines.unwrap_or(1)
    }

    fn delimiter(&self) -> u8 {
        self.fixture
            .delimiter
            .as_deref()
            .and_then(|d| validation::validate_delimiter("fixture.delimiter", d).ok())
            .unwrap_or(b',')
    }

    fn json_output(&self) -> bool {
        self.output.format.as_deref() == Some("json")
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
