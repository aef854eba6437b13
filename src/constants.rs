//! Crate-wide constants.

/// Version written for a tool when the caller does not supply one.
pub const DEFAULT_TOOL_VERSION: &str = "1.0.0";

/// Minimum number of labels any detector must declare.
pub const MIN_LABELS: usize = 2;

/// Number of labels a binary detector declares.
pub const BINARY_LABEL_COUNT: usize = 2;

/// Labels used for a binary detector configured without labels.
pub const DEFAULT_BINARY_LABELS: [&str; BINARY_LABEL_COUNT] = ["0", "1"];
