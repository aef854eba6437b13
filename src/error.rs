//! Error types for the tool JSON writer.

/// Result type alias for writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the tool JSON writer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Detector or writer setup is invalid.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Detector is not registered with the writer.
    #[error("unknown detector '{name}'")]
    UnknownDetector {
        /// Name that was looked up.
        name: String,
    },

    /// Score distribution does not cover exactly the declared labels.
    #[error(
        "score shape mismatch for detector '{detector}': expected {expected:?}, found {found:?}"
    )]
    ShapeMismatch {
        /// Detector the scores were given for.
        detector: String,
        /// Declared labels.
        expected: Vec<String>,
        /// Labels present in the supplied distribution.
        found: Vec<String>,
    },

    /// Decision is not one of the declared labels.
    #[error("decision '{decision}' is not a label of detector '{detector}'")]
    InvalidDecision {
        /// Detector the decision was given for.
        detector: String,
        /// Offending decision.
        decision: String,
    },

    /// Score is NaN or infinite.
    #[error("score {score} for label '{label}' of detector '{detector}' is not finite")]
    InvalidScore {
        /// Detector the scores were given for.
        detector: String,
        /// Label carrying the score.
        label: String,
        /// Offending score.
        score: f64,
    },

    /// Writer was already disposed.
    #[error("writer for '{path}' is already disposed")]
    WriterDisposed {
        /// Destination of the disposed writer.
        path: std::path::PathBuf,
    },

    /// Failed to open or flush the output document.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the output document.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read a written output document.
    #[error("failed to read output file '{path}'")]
    OutputRead {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a written output document.
    #[error("failed to parse JSON output file '{path}'")]
    JsonRead {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read tool configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse tool configuration.
    #[error(
        "failed to parse tool config{}",
        .path.as_ref().map(|p| format!(" '{}'", p.display())).unwrap_or_default()
    )]
    ConfigParse {
        /// Path to the config file, when parsed from disk.
        path: Option<std::path::PathBuf>,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Build a [`Error::Configuration`] from any message.
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error came from the filesystem or the JSON encoder at
    /// dispose time.
    pub const fn is_output_error(&self) -> bool {
        matches!(self, Self::OutputWrite { .. } | Self::JsonWrite { .. })
    }
}
