mod trace;
mod tracking_task;

pub use trace::{IntervalTrace, TraceFormat, TraceRow};
pub use tracking_task::TrackingTask;
