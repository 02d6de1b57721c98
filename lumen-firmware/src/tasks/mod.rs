//! Embassy async tasks

#[cfg(feature = "test-pattern")]
pub mod pattern;
pub mod worker;

#[cfg(feature = "test-pattern")]
pub use pattern::pattern_task;
pub use worker::worker_task;
