use crate::domain::model::{
    LoadLimits, MAX_CITIES, MAX_NAME_LENGTH, MAX_ROAD_LENGTH, MIN_CITIES, MIN_ROAD_LENGTH,
};
use crate::utils::error::{Result, RoadError};
use crate::utils::validation::{
    validate_bounds, validate_output_format, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file.
///
/// ```toml
/// [limits]
/// max_road_length = 5000
/// max_name_length = 32
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub limits: Option<LimitsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    pub min_road_length: Option<u32>,
    pub max_road_length: Option<u32>,
    pub min_cities: Option<usize>,
    pub max_cities: Option<usize>,
    pub max_name_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RoadError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RoadError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable, leaving
    /// unknown variables untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RoadError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn load_limits(&self) -> LoadLimits {
        let limits = self.limits.clone().unwrap_or_default();
        LoadLimits {
            road_length: limits.min_road_length.unwrap_or(MIN_ROAD_LENGTH)
                ..=limits.max_road_length.unwrap_or(MAX_ROAD_LENGTH),
            city_count: limits.min_cities.unwrap_or(MIN_CITIES)
                ..=limits.max_cities.unwrap_or(MAX_CITIES),
            max_name_length: limits.max_name_length.unwrap_or(MAX_NAME_LENGTH),
        }
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn validate_config(&self) -> Result<()> {
        let limits = self.load_limits();
        let (min_length, max_length) = (*limits.road_length.start(), *limits.road_length.end());
        let (min_cities, max_cities) = (*limits.city_count.start(), *limits.city_count.end());

        // Settings may only narrow the domain bounds.
        validate_range("limits.min_road_length", min_length, MIN_ROAD_LENGTH, MAX_ROAD_LENGTH)?;
        validate_range("limits.max_road_length", max_length, MIN_ROAD_LENGTH, MAX_ROAD_LENGTH)?;
        validate_bounds("limits.road_length", min_length, max_length)?;

        validate_range("limits.min_cities", min_cities, MIN_CITIES, MAX_CITIES)?;
        validate_range("limits.max_cities", max_cities, MIN_CITIES, MAX_CITIES)?;
        validate_bounds("limits.city_count", min_cities, max_cities)?;

        validate_range("limits.max_name_length", limits.max_name_length, 1, MAX_NAME_LENGTH)?;

        if let Some(format) = self.output_format() {
            validate_output_format("output.format", format)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
