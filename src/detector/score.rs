//! Validated detector output for one file.

use crate::detector::{DetectorKind, ScoreOrder};

/// One detector's output for one file.
///
/// Only produced by [`Detector::validate_scores`](crate::Detector::validate_scores)
/// and [`Detector::validate_ordered`](crate::Detector::validate_ordered), so the
/// distribution always covers exactly the detector's labels, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    detector: String,
    distribution: Vec<(String, f64)>,
    decision: String,
    decision_index: usize,
}

impl ScoreEntry {
    pub(super) const fn new(
        detector: String,
        distribution: Vec<(String, f64)>,
        decision: String,
        decision_index: usize,
    ) -> Self {
        Self {
            detector,
            distribution,
            decision,
            decision_index,
        }
    }

    /// Name of the detector that produced the scores.
    pub fn detector(&self) -> &str {
        &self.detector
    }

    /// Label/score pairs in declared label order.
    pub fn distribution(&self) -> &[(String, f64)] {
        &self.distribution
    }

    /// Score of a single label.
    pub fn score(&self, label: &str) -> Option<f64> {
        self.distribution
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, score)| *score)
    }

    /// The tool's hard decision.
    pub fn decision(&self) -> &str {
        &self.decision
    }

    /// Position of the decision in the declared labels.
    pub const fn decision_index(&self) -> usize {
        self.decision_index
    }

    /// Distribution as it is written for a detector of the given kind.
    ///
    /// Ties keep declared label order. Binary detectors are always written in
    /// declared order.
    pub fn rendered(&self, kind: DetectorKind) -> Vec<(String, f64)> {
        let mut entries = self.distribution.clone();
        if let DetectorKind::Categorical(options) = kind {
            match options.order {
                ScoreOrder::Declared => {}
                ScoreOrder::Ascending => entries.sort_by(|a, b| a.1.total_cmp(&b.1)),
                ScoreOrder::Descending => entries.sort_by(|a, b| b.1.total_cmp(&a.1)),
            }
            if options.only_flags {
                entries.retain(|(_, score)| score.abs() > 0.0);
            }
        }
        entries
    }
}
