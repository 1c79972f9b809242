pub mod generators;
pub mod readers;
mod stream;

pub use stream::SampleStream;
