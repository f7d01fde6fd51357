#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "SampleCar.xml";

/// Effective settings for one run: built-in defaults, then the TOML file,
/// then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsSettings {
    pub input_path: String,
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_format: OutputFormat::Text,
            verbose: false,
            json_logs: false,
        }
    }
}

impl DiagnosticsSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let defaults = Self::default();
        Ok(Self {
            input_path: config
                .input_path()
                .map(str::to_string)
                .unwrap_or(defaults.input_path),
            output_format: config.output_format()?.unwrap_or(defaults.output_format),
            verbose: config.verbose(),
            json_logs: config.json_logs(),
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &cli::CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_toml(&TomlConfig::from_file(path)?)?,
            None => Self::default(),
        };

        if let Some(input) = &cli.input {
            settings.input_path = input.clone();
        }
        if let Some(format) = cli.format {
            settings.output_format = format;
        }
        settings.verbose |= cli.verbose;
        settings.json_logs |= cli.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for DiagnosticsSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for DiagnosticsSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        validate_file_extension("input.path", &self.input_path, &["xml"])
    }
}
