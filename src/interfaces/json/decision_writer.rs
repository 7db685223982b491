use crate::domain::decision::DecisionReport;
use crate::error::Result;
use std::io::Write;

/// Writes a decision report as a single JSON object followed by a newline.
pub struct ReportWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_report(&mut self, report: &DecisionReport) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
