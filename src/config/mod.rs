pub mod toml_config;

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-aligned overview with the interactive search loop
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "domain-tracker")]
#[command(about = "Track domain registrations and flag those close to expiry")]
pub struct CliConfig {
    /// TOML file with [[domains]] entries; sample domains are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Evaluate as of this instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS) instead of the local clock
    #[arg(long, value_parser = crate::utils::datetime::parse_instant)]
    pub now: Option<chrono::NaiveDateTime>,

    /// Run a single search and exit instead of prompting
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format; overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// strftime pattern for dates; overrides the config file
    #[arg(long)]
    pub date_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation;

        if let Some(path) = &self.config {
            validation::validate_path("--config", path)?;
        }
        if let Some(format) = &self.date_format {
            validation::validate_date_format("--date-format", format)?;
        }
        Ok(())
    }
}
