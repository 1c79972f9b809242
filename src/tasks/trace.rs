use crate::core::PredictionInterval;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// One emitted interval, tagged with how many samples had been ingested
/// when it was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceRow {
    pub samples_seen: u64,
    pub interval: PredictionInterval,
}

impl Display for TraceRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "seen={}, interval={}", self.samples_seen, self.interval)
    }
}

pub enum TraceFormat {
    Csv,
    Tsv,
    Json,
}

/// In-order record of every interval a tracking run emitted.
pub struct IntervalTrace {
    rows: Vec<TraceRow>,
}

impl IntervalTrace {
    pub fn push(&mut self, row: TraceRow) {
        self.rows.push(row)
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn latest(&self) -> Option<TraceRow> {
        self.rows.last().copied()
    }
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TraceFormat) -> Result<(), Error> {
        match fmt {
            TraceFormat::Csv => self.export_with_delimiter(path, ','),
            TraceFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TraceFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "samples_seen{d}lower{d}upper", d = delimiter)?;
        for row in &self.rows {
            writeln!(
                w,
                "{}{d}{}{d}{}",
                row.samples_seen,
                row.interval.lower,
                row.interval.upper,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(
                w,
                "  {{\"samples_seen\":{},\"lower\":{},\"upper\":{}}}{}",
                row.samples_seen,
                row.interval.lower,
                row.interval.upper,
                if i + 1 == self.rows.len() { "" } else { "," }
            )?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}

impl Default for IntervalTrace {
    fn default() -> Self {
        Self { rows: vec![] }
    }
}
