pub mod core;
pub mod estimators;
pub mod sinks;
pub mod streams;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
