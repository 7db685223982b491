use crate::domain::decision::DecisionRecord;
use crate::error::Result;
use std::io::Write;

/// Writes decision records as CSV with an `event_id,decision,reason` header.
///
/// The header is written even when there are no records.
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(destination);
        Self { writer }
    }

    pub fn write_decisions(&mut self, decisions: &[DecisionRecord]) -> Result<()> {
        self.writer.write_record(["event_id", "decision", "reason"])?;
        for record in decisions {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
