use crate::config::OutputFormat;
use crate::core::store::DomainStore;
use crate::domain::model::DomainRecord;
use crate::utils::datetime::DEFAULT_DATE_FORMAT;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDateTime;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Seed file: display settings plus the domains to load.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub tracker: Option<TrackerSection>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub domains: Vec<DomainEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerSection {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            output_format: OutputFormat::default(),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainEntry {
    pub id: i64,
    pub name: String,
    pub owner: String,
    #[serde(deserialize_with = "crate::utils::datetime::deserialize")]
    pub start_date: NaiveDateTime,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validation::validate_path("config", &path.to_string_lossy())?;

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            domains = config.domains.len(),
            "loaded domain file"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn title(&self) -> Option<&str> {
        self.tracker.as_ref().map(|t| t.name.as_str())
    }

    /// Builds a store from the `[[domains]]` entries, in file order.
    pub fn build_store(&self) -> DomainStore {
        self.domains
            .iter()
            .map(|entry| {
                DomainRecord::new(
                    entry.id,
                    entry.name.as_str(),
                    entry.owner.as_str(),
                    entry.start_date,
                )
            })
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_date_format("display.date_format", &self.display.date_format)?;
        if let Some(tracker) = &self.tracker {
            validation::validate_non_empty_string("tracker.name", &tracker.name)?;
        }
        Ok(())
    }
}
