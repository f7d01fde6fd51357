use crate::core::{
    Car, CarSource, ConditionType, DescriptiveField, DiagnosticOutcome, DiagnosticReport, DiagnosticStage,
    PartType, ReportSink,
};
use crate::utils::error::{DiagnosticsError, Result};

pub const SUCCESS_MESSAGE: &str = "Car diagnostics success. Car is in good condition!";

/// Runs the checks in order and stops at the first stage with findings.
pub struct DiagnosticEngine<S: ReportSink> {
    sink: S,
    lines: Vec<String>,
}

impl<S: ReportSink> DiagnosticEngine<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            lines: Vec::new(),
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Diagnoses one car. Findings end up in the report; an `Err` means a
    /// part reached the reporting step without a type or condition, and the
    /// run was abandoned.
    pub fn run(&mut self, car: &Car) -> Result<DiagnosticReport> {
        self.lines.clear();
        tracing::info!("Executing diagnosis steps one by one");

        let mut stage = DiagnosticStage::CheckingFields;
        loop {
            tracing::debug!("Diagnostic stage: {:?}", stage);
            let outcome = match stage {
                DiagnosticStage::CheckingFields => self.check_fields(car)?,
                DiagnosticStage::CheckingParts => self.check_parts(car)?,
                DiagnosticStage::CheckingConditions => self.check_conditions(car)?,
                DiagnosticStage::Success => {
                    self.emit(SUCCESS_MESSAGE)?;
                    Some(DiagnosticOutcome::Passed)
                }
            };

            if let Some(outcome) = outcome {
                tracing::info!("Diagnostics finished at {:?} with {} line(s)", stage, self.lines.len());
                return Ok(DiagnosticReport {
                    stage,
                    outcome,
                    lines: std::mem::take(&mut self.lines),
                });
            }

            // the success stage always reports, so this never stalls
            stage = stage.next().unwrap_or(DiagnosticStage::Success);
        }
    }

    /// Loads the car from `source` and diagnoses it. Load failures are
    /// returned before any line is emitted.
    pub fn run_source<C: CarSource>(&mut self, source: &C) -> Result<DiagnosticReport> {
        let car = source.load_car()?;
        self.run(&car)
    }

    fn check_fields(&mut self, car: &Car) -> Result<Option<DiagnosticOutcome>> {
        let missing = car.missing_data();
        if missing.is_empty() {
            return Ok(None);
        }

        tracing::warn!("{} descriptive field(s) missing", missing.len());
        for field in &missing {
            self.report_missing_data(*field)?;
        }
        Ok(Some(DiagnosticOutcome::MissingData(missing)))
    }

    fn check_parts(&mut self, car: &Car) -> Result<Option<DiagnosticOutcome>> {
        let missing = car.missing_parts_map();
        if missing.is_empty() {
            return Ok(None);
        }

        tracing::warn!("{} part type(s) below the required count", missing.len());
        // BTreeMap keys iterate in catalog order
        for (part_type, count) in &missing {
            self.report_missing_part(Some(*part_type), Some(*count))?;
        }
        Ok(Some(DiagnosticOutcome::MissingParts(missing)))
    }

    fn check_conditions(&mut self, car: &Car) -> Result<Option<DiagnosticOutcome>> {
        let damaged = car.damaged_parts();
        if damaged.is_empty() {
            return Ok(None);
        }

        tracing::warn!("{} damaged part(s) found", damaged.len());
        for part in &damaged {
            self.report_damaged_part(part.part_type, part.condition)?;
        }
        Ok(Some(DiagnosticOutcome::DamagedParts(
            damaged.into_iter().cloned().collect(),
        )))
    }

    fn report_missing_data(&mut self, field: DescriptiveField) -> Result<()> {
        self.emit(&format!("{} data is missing", field))
    }

    fn report_missing_part(&mut self, part_type: Option<PartType>, count: Option<u32>) -> Result<()> {
        let part_type =
            part_type.ok_or_else(|| DiagnosticsError::invalid_argument("PartType must not be null"))?;
        let count = match count {
            Some(count) if count > 0 => count,
            _ => return Err(DiagnosticsError::invalid_argument("Count must be greater than 0")),
        };

        self.emit(&format!("Missing Part(s) Detected: {} - Count: {}", part_type, count))
    }

    fn report_damaged_part(
        &mut self,
        part_type: Option<PartType>,
        condition: Option<ConditionType>,
    ) -> Result<()> {
        let part_type =
            part_type.ok_or_else(|| DiagnosticsError::invalid_argument("PartType must not be null"))?;
        let condition = condition
            .ok_or_else(|| DiagnosticsError::invalid_argument("ConditionType must not be null"))?;

        self.emit(&format!("Damaged Part Detected: {} - Condition: {}", part_type, condition))
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        self.sink.emit(line)?;
        self.lines.push(line.to_string());
        Ok(())
    }
}
