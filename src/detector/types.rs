//! Detector descriptor type definitions.

use crate::constants::BINARY_LABEL_COUNT;
use crate::detector::validate::validate_descriptor;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Order in which a categorical detector's scores are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOrder {
    /// Declared label order.
    #[default]
    Declared,
    /// Lowest score first.
    Ascending,
    /// Highest score first.
    Descending,
}

/// Output options of a categorical detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoricalOptions {
    /// Order of labels in the written distribution.
    pub order: ScoreOrder,
    /// Write only labels with a non-zero score.
    pub only_flags: bool,
}

/// Output shape of a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    /// Negative/positive label pair.
    Binary,
    /// Two or more labels without pairing semantics.
    Categorical(CategoricalOptions),
}

impl DetectorKind {
    /// Serializable tag of this kind.
    pub const fn tag(&self) -> KindTag {
        match self {
            Self::Binary => KindTag::Binary,
            Self::Categorical(_) => KindTag::Categorical,
        }
    }
}

/// Kind name as written to documents and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    /// Binary detector.
    Binary,
    /// Categorical detector.
    Categorical,
}

/// A named scoring detector and the labels it may output.
///
/// Descriptors are immutable once built; the label set is checked at
/// construction and is what every appended score is validated against.
///
/// ```
/// use tool_json_writer::Detector;
///
/// let det = Detector::binary("is_tampered", ["original", "tampered"]).unwrap();
/// assert_eq!(det.label_index("tampered"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detector {
    name: String,
    kind: DetectorKind,
    labels: Vec<String>,
}

impl Detector {
    /// Create a binary detector from a negative/positive label pair.
    pub fn binary<N, L>(name: N, labels: [L; BINARY_LABEL_COUNT]) -> Result<Self>
    where
        N: Into<String>,
        L: Into<String>,
    {
        Self::new(
            name.into(),
            DetectorKind::Binary,
            labels.into_iter().map(Into::into).collect(),
        )
    }

    /// Create a categorical detector with default output options.
    pub fn categorical<N, I, L>(name: N, labels: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::categorical_with(name, labels, CategoricalOptions::default())
    }

    /// Create a categorical detector with explicit output options.
    pub fn categorical_with<N, I, L>(
        name: N,
        labels: I,
        options: CategoricalOptions,
    ) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::new(
            name.into(),
            DetectorKind::Categorical(options),
            labels.into_iter().map(Into::into).collect(),
        )
    }

    fn new(name: String, kind: DetectorKind, labels: Vec<String>) -> Result<Self> {
        validate_descriptor(&name, kind, &labels)?;
        Ok(Self { name, kind, labels })
    }

    /// Detector name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detector kind.
    pub const fn kind(&self) -> DetectorKind {
        self.kind
    }

    /// Declared labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of `label` in the declared labels.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}
