//! Timed-loop Microbenchmarks
//!
//! Two benchmarks on a small batch harness:
//! - `float_max_min`: f32 `max`/`min` over random draws
//! - `string_search`: forward substring search over a fixed ~64k corpus
//!
//! A benchmark implements [`MicroBench`]. [`Harness::run`] hands it a loop
//! count and a pausable timer; only time spent between `start_timer` and
//! `pause_timer` is reported.

pub mod config;
pub mod corpus;
pub mod error;
pub mod float_max_min;
pub mod harness;
pub mod search;
pub mod string_search;
pub mod timer;

pub use config::StringSearchConfig;
pub use error::BenchError;
pub use float_max_min::FloatMaxMinBench;
pub use harness::{BatchReport, Harness, Interrupt, MicroBench};
pub use string_search::{StringIndexOfBench, StringSearchFixture};
