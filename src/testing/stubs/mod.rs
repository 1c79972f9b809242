pub mod vec_sink;
pub mod vec_stream;

pub use vec_sink::{SharedIntervals, VecSink};
pub use vec_stream::VecStream;
