//! Output document model and JSON encoding.

mod document;
mod json;
mod ordered;

pub use document::{DetectorSummary, FileEntry, ScoreSummary, ToolDocument};
pub use json::{read_document, write_document};
pub use ordered::OrderedMap;
