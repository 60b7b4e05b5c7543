use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_format, validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryMode {
    /// Full neighborhood report
    All,
    /// Only the smallest span
    Span,
    /// Only the name of the city owning the smallest neighborhood
    City,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "road-neighborhoods")]
#[command(about = "Find the smallest city neighborhood along a road")]
pub struct CliConfig {
    /// Road description: length, city count, then one `position name` pair per city
    pub input: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format (text, json, csv); overrides the settings file
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short, long, value_enum, default_value = "all")]
    pub query: QueryMode,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// The command line flag wins over the settings file.
    pub fn output_format(&self, from_file: Option<&str>) -> Result<OutputFormat> {
        match self.format.as_deref().or(from_file) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(format) = &self.format {
            validate_output_format("format", format)?;
        }
        Ok(())
    }
}
