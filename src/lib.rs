pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::DiagnosticsSettings;

pub use adapters::{ConsoleSink, XmlCarLoader};
pub use crate::core::engine::DiagnosticEngine;
pub use domain::model::{Car, ConditionType, DescriptiveField, MissingParts, Part, PartType};
pub use domain::report::{DiagnosticOutcome, DiagnosticReport, DiagnosticStage};
pub use utils::error::{DiagnosticsError, Result};
