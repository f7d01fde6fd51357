use crate::domain::model::Car;
use crate::utils::error::Result;

/// Supplies an already-parsed car to the diagnostic engine.
pub trait CarSource {
    fn load_car(&self) -> Result<Car>;
}

/// Receives report lines in the order the engine emits them.
pub trait ReportSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::utils::error::DiagnosticsError;

    fn from_str(s: &str) -> Result<Self> {
        crate::utils::validation::validate_one_of("output.format", s, &Self::NAMES)?;
        Ok(if s == "json" {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        })
    }
}
