use crate::core::Sample;
use crate::streams::stream::SampleStream;
use std::io::{BufRead, Error, ErrorKind};

/// Integer-per-line sample source over any [`BufRead`].
///
/// Each line is trimmed and parsed as a decimal integer. Blank and
/// unparseable lines are skipped; read errors end the stream. This is the
/// boundary where malformed input is rejected, so the estimator behind it
/// only ever sees well-formed samples.
pub struct LineSampleStream<R: BufRead> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> LineSampleStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }
}

impl<R: BufRead> SampleStream for LineSampleStream<R> {
    fn has_more_samples(&self) -> bool {
        !self.exhausted
    }

    fn next_sample(&mut self) -> Option<Sample> {
        if self.exhausted {
            return None;
        }

        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => {
                    if let Ok(sample) = line.trim().parse::<Sample>() {
                        return Some(sample);
                    }
                    // Malformed or blank line: skip and keep reading.
                }
            }
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        Err(Error::new(
            ErrorKind::Unsupported,
            "cannot rewind a consumed reader",
        ))
    }
}
