#![forbid(unsafe_code)]

pub mod grader;
pub mod model;
pub mod text;

pub use grader::{Grade, Grader, GradingThresholds, MatchKind};
pub use text::{normalize, similarity};
