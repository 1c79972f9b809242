use crate::core::PredictionInterval;
use crate::sinks::sink::IntervalSink;
use std::io::{Error, Write};

/// Writes each interval as `"lower upper"` on its own line.
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

impl<W: Write> IntervalSink for WriterSink<W> {
    fn emit(&mut self, interval: PredictionInterval) -> Result<(), Error> {
        writeln!(self.writer, "{} {}", interval.lower, interval.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_space_separated_pairs_one_per_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit(PredictionInterval::new(1, 3)).unwrap();
        sink.emit(PredictionInterval::new(-2, 2)).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "1 3\n-2 2\n");
    }
}
