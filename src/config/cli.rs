use crate::domain::ports::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "car-diagnostics")]
#[command(about = "Diagnose a car record loaded from XML")]
pub struct CliConfig {
    /// Path to the car XML file [default: SampleCar.xml]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
