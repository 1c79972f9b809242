use crate::estimators::IntervalEstimator;
use crate::sinks::IntervalSink;
use crate::streams::SampleStream;
use crate::tasks::trace::{IntervalTrace, TraceRow};
use std::io::{Error, ErrorKind};

/// End-to-end tracking run: pulls samples from a stream, feeds them to an
/// interval estimator, and forwards every emitted interval to a sink, in
/// order. A trace of the run is kept for later export.
///
/// The loop is single-threaded and synchronous: each sample is fully
/// processed before the next one is pulled, so sink emissions mirror
/// ingestion order exactly.
pub struct TrackingTask {
    estimator: Box<dyn IntervalEstimator>,
    stream: Box<dyn SampleStream>,
    sink: Box<dyn IntervalSink>,

    trace: IntervalTrace,

    max_samples: Option<u64>,
    processed: u64,
}

impl TrackingTask {
    pub fn new(
        estimator: Box<dyn IntervalEstimator>,
        stream: Box<dyn SampleStream>,
        sink: Box<dyn IntervalSink>,
        max_samples: Option<u64>,
    ) -> Result<Self, Error> {
        if max_samples == Some(0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "max_samples must be > 0",
            ));
        }

        Ok(Self {
            estimator,
            stream,
            sink,
            trace: IntervalTrace::default(),
            max_samples,
            processed: 0,
        })
    }

    pub fn run(&mut self) -> Result<(), Error> {
        while self.stream.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.processed >= n {
                    break;
                }
            }
            let Some(sample) = self.stream.next_sample() else {
                break;
            };
            self.processed += 1;

            if let Some(interval) = self.estimator.ingest(sample) {
                self.sink.emit(interval)?;
                self.trace.push(TraceRow {
                    samples_seen: self.processed,
                    interval,
                });
            }
        }
        Ok(())
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn trace(&self) -> &IntervalTrace {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PredictionInterval, Sample};
    use crate::estimators::{AdaptiveWindowEstimator, IntervalEstimator};
    use crate::sinks::WriterSink;
    use crate::testing::stubs::{SharedIntervals, VecSink, VecStream};

    fn task_over(samples: Vec<Sample>) -> (TrackingTask, SharedIntervals) {
        let sink = VecSink::shared();
        let task = TrackingTask::new(
            Box::new(AdaptiveWindowEstimator::with_defaults()),
            Box::new(VecStream::new(samples)),
            Box::new(VecSink::attached(&sink)),
            None,
        )
        .unwrap();
        (task, sink)
    }

    #[test]
    fn emits_one_interval_per_sample_after_the_first() {
        let samples: Vec<Sample> = vec![3, 9, -4, 12, 7, 7, 0, 15];
        let (mut task, sink) = task_over(samples.clone());
        task.run().unwrap();

        assert_eq!(task.processed(), samples.len() as u64);
        assert_eq!(sink.lock().unwrap().len(), samples.len() - 1);
        assert_eq!(task.trace().len(), samples.len() - 1);
    }

    #[test]
    fn sink_matches_driving_the_estimator_by_hand() {
        let samples: Vec<Sample> = vec![10, 10, 11, 9, 10, 11, 9, 10, 500];

        let mut reference = AdaptiveWindowEstimator::with_defaults();
        let expected: Vec<PredictionInterval> = samples
            .iter()
            .filter_map(|&s| reference.ingest(s))
            .collect();

        let (mut task, sink) = task_over(samples);
        task.run().unwrap();
        assert_eq!(*sink.lock().unwrap(), expected);
    }

    #[test]
    fn trace_rows_carry_the_ingestion_count() {
        let (mut task, _sink) = task_over(vec![5, 5, 5, 5]);
        task.run().unwrap();

        let seen: Vec<u64> = task.trace().rows().iter().map(|r| r.samples_seen).collect();
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn max_samples_caps_the_run() {
        let sink = VecSink::shared();
        let mut task = TrackingTask::new(
            Box::new(AdaptiveWindowEstimator::with_defaults()),
            Box::new(VecStream::new(vec![1; 100])),
            Box::new(VecSink::attached(&sink)),
            Some(10),
        )
        .unwrap();
        task.run().unwrap();

        assert_eq!(task.processed(), 10);
        assert_eq!(sink.lock().unwrap().len(), 9);
    }

    #[test]
    fn zero_max_samples_is_rejected() {
        let sink = VecSink::shared();
        let result = TrackingTask::new(
            Box::new(AdaptiveWindowEstimator::with_defaults()),
            Box::new(VecStream::new(vec![])),
            Box::new(VecSink::attached(&sink)),
            Some(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_stream_emits_nothing() {
        let (mut task, sink) = task_over(vec![]);
        task.run().unwrap();
        assert_eq!(task.processed(), 0);
        assert!(sink.lock().unwrap().is_empty());
    }

    #[test]
    fn writer_sink_end_to_end_output_is_line_per_interval() {
        use std::fs::File;
        use tempfile::NamedTempFile;

        let file = NamedTempFile::new().unwrap();
        let mut task = TrackingTask::new(
            Box::new(AdaptiveWindowEstimator::with_defaults()),
            Box::new(VecStream::new(vec![5, 5, 5])),
            Box::new(WriterSink::new(File::create(file.path()).unwrap())),
            None,
        )
        .unwrap();
        task.run().unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "5 5\n5 5\n");
    }
}
