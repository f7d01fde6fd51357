use crate::domain::model::{DescriptiveField, MissingParts, Part};
use serde::{Deserialize, Serialize};

/// Where a diagnostic run stands. Each checking stage either reports its
/// findings and ends the run, or falls through to the next stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticStage {
    CheckingFields,
    CheckingParts,
    CheckingConditions,
    Success,
}

impl DiagnosticStage {
    pub fn next(self) -> Option<DiagnosticStage> {
        match self {
            DiagnosticStage::CheckingFields => Some(DiagnosticStage::CheckingParts),
            DiagnosticStage::CheckingParts => Some(DiagnosticStage::CheckingConditions),
            DiagnosticStage::CheckingConditions => Some(DiagnosticStage::Success),
            DiagnosticStage::Success => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "findings", rename_all = "snake_case")]
pub enum DiagnosticOutcome {
    MissingData(Vec<DescriptiveField>),
    MissingParts(MissingParts),
    DamagedParts(Vec<Part>),
    Passed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Stage that ended the run.
    pub stage: DiagnosticStage,
    pub outcome: DiagnosticOutcome,
    pub lines: Vec<String>,
}

impl DiagnosticReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DiagnosticOutcome::Passed)
    }

    pub fn finding_count(&self) -> usize {
        match &self.outcome {
            DiagnosticOutcome::MissingData(fields) => fields.len(),
            DiagnosticOutcome::MissingParts(missing) => missing.len(),
            DiagnosticOutcome::DamagedParts(parts) => parts.len(),
            DiagnosticOutcome::Passed => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PartType;

    #[test]
    fn test_stage_order() {
        let mut stages = vec![DiagnosticStage::CheckingFields];
        while let Some(next) = stages.last().and_then(|stage| stage.next()) {
            stages.push(next);
        }
        assert_eq!(
            stages,
            vec![
                DiagnosticStage::CheckingFields,
                DiagnosticStage::CheckingParts,
                DiagnosticStage::CheckingConditions,
                DiagnosticStage::Success,
            ]
        );
    }

    #[test]
    fn test_report_serializes_outcome_with_kind() {
        let mut missing = MissingParts::new();
        missing.insert(PartType::Tire, 2);
        let report = DiagnosticReport {
            stage: DiagnosticStage::CheckingParts,
            outcome: DiagnosticOutcome::MissingParts(missing),
            lines: vec!["Missing Part(s) Detected: TIRE - Count: 2".to_string()],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stage"], "checking_parts");
        assert_eq!(json["outcome"]["kind"], "missing_parts");
        assert_eq!(json["outcome"]["findings"]["TIRE"], 2);
        assert!(!report.is_success());
        assert_eq!(report.finding_count(), 1);
    }
}
