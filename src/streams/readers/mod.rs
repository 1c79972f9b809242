mod line_stream;

pub use line_stream::LineSampleStream;
