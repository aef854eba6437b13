//! Tool JSON writer - unified JSON reports of per-file detector scores.
//!
//! A tool declares its [`Detector`]s, feeds scores for each processed file
//! into a [`ResultWriter`], and the writer serializes everything into one
//! JSON document when it is disposed.
//!
//! ```no_run
//! use tool_json_writer::{Detector, ResultWriter};
//!
//! # fn main() -> tool_json_writer::Result<()> {
//! let detectors = vec![
//!     Detector::binary("is_tampered", ["original", "tampered"])?,
//!     Detector::categorical("3valued_detector", ["cover", "stego", "not_sure"])?,
//! ];
//!
//! ResultWriter::new("steganography_detector.json", "steganography_detector", detectors)?
//!     .run(|writer| {
//!         writer.prepend("third.jpeg")?;
//!         writer.append(
//!             "third.jpeg",
//!             "3valued_detector",
//!             [("cover", 0.05), ("stego", 0.8), ("not_sure", 0.15)],
//!             "stego",
//!         )
//!     })
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod detector;
pub mod error;
pub mod output;
pub mod writer;

pub use config::{ToolConfig, load_tool_config};
pub use detector::{CategoricalOptions, Detector, DetectorKind, ScoreEntry, ScoreOrder};
pub use error::{Error, Result};
pub use output::{ToolDocument, read_document};
pub use writer::{FileRecord, ResultWriter, ToolInfo};
