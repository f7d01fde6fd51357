use crate::core::{ReportSink, Result};
use crate::utils::error::DiagnosticsError;
use std::io::Write;

/// Writes each report line to an `io::Write`, one line per call.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| DiagnosticsError::ReportError {
                message: e.to_string(),
            })
    }
}

pub type ConsoleSink = WriterSink<std::io::Stdout>;

impl ConsoleSink {
    pub fn stdout() -> Self {
        WriterSink::new(std::io::stdout())
    }
}

impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Discards lines. The JSON output format renders the whole report once the
/// run finishes instead of printing line by line.
#[derive(Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn emit(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }
}

/// Render a finished report as pretty JSON.
pub fn render_json(report: &crate::core::DiagnosticReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(DiagnosticsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiagnosticOutcome, DiagnosticReport, DiagnosticStage};

    #[test]
    fn test_writer_sink_writes_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit("Make data is missing").unwrap();
        sink.emit("Year data is missing").unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "Make data is missing\nYear data is missing\n");
    }

    #[test]
    fn test_render_json() {
        let report = DiagnosticReport {
            stage: DiagnosticStage::Success,
            outcome: DiagnosticOutcome::Passed,
            lines: vec!["Car diagnostics success. Car is in good condition!".to_string()],
        };

        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["stage"], "success");
        assert_eq!(json["outcome"]["kind"], "passed");
    }
}
