//! Statistics, diversity and composite scoring over trait profiles.

pub mod composite;
pub mod diversity;
pub mod score_types;
pub mod stats;

pub use composite::{CompositeScores, DynamicPredictions};
pub use score_types::{Score0To1, Score0To100};
