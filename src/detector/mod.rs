//! Detector descriptors and score validation.

mod score;
mod types;
mod validate;

pub use score::ScoreEntry;
pub use types::{CategoricalOptions, Detector, DetectorKind, KindTag, ScoreOrder};
