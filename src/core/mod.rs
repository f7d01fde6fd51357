pub mod engine;

pub use crate::domain::model::{
    Car, ConditionType, DescriptiveField, MissingParts, Part, PartType,
};
pub use crate::domain::ports::{CarSource, ConfigProvider, OutputFormat, ReportSink};
pub use crate::domain::report::{DiagnosticOutcome, DiagnosticReport, DiagnosticStage};
pub use crate::utils::error::Result;
