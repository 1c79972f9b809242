mod sink;
mod writer_sink;

pub use sink::IntervalSink;
pub use writer_sink::WriterSink;
