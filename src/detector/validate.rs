//! Descriptor and score validation.

use crate::constants::{BINARY_LABEL_COUNT, MIN_LABELS};
use crate::detector::{Detector, DetectorKind, ScoreEntry};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validate the parts of a detector descriptor.
pub(super) fn validate_descriptor(name: &str, kind: DetectorKind, labels: &[String]) -> Result<()> {
    if name.is_empty() {
        return Err(Error::configuration("detector name must not be empty"));
    }

    if labels.len() < MIN_LABELS {
        return Err(Error::configuration(format!(
            "detector '{name}' needs at least {MIN_LABELS} labels, got {}",
            labels.len()
        )));
    }

    if kind == DetectorKind::Binary && labels.len() != BINARY_LABEL_COUNT {
        return Err(Error::configuration(format!(
            "binary detector '{name}' needs exactly {BINARY_LABEL_COUNT} labels, got {}",
            labels.len()
        )));
    }

    let mut seen = HashSet::with_capacity(labels.len());
    if let Some(duplicate) = labels.iter().find(|label| !seen.insert(label.as_str())) {
        return Err(Error::configuration(format!(
            "detector '{name}' declares label '{duplicate}' more than once"
        )));
    }

    Ok(())
}

impl Detector {
    /// Validate a label-to-score mapping and a decision against this detector.
    ///
    /// The distribution must name every declared label exactly once and every
    /// score must be finite. The returned entry stores scores in declared
    /// label order.
    pub fn validate_scores<I, K>(&self, distribution: I, decision: &str) -> Result<ScoreEntry>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut slots: Vec<Option<f64>> = vec![None; self.labels().len()];
        let mut found = Vec::new();
        let mut malformed = false;

        for (label, score) in distribution {
            let label = label.as_ref();
            match self.label_index(label).and_then(|i| slots.get_mut(i)) {
                Some(slot) if slot.is_none() => *slot = Some(score),
                _ => malformed = true,
            }
            found.push(label.to_string());
        }

        let scores: Option<Vec<f64>> = slots.into_iter().collect();
        match scores {
            Some(scores) if !malformed => self.score_entry(scores, decision),
            _ => Err(self.shape_mismatch(found)),
        }
    }

    /// Validate scores given in declared label order.
    pub fn validate_ordered(&self, scores: &[f64], decision: &str) -> Result<ScoreEntry> {
        if scores.len() != self.labels().len() {
            let found = (0..scores.len()).map(|i| format!("#{i}")).collect();
            return Err(self.shape_mismatch(found));
        }
        self.score_entry(scores.to_vec(), decision)
    }

    fn score_entry(&self, scores: Vec<f64>, decision: &str) -> Result<ScoreEntry> {
        // JSON has no NaN or infinity.
        if let Some((label, &score)) = self
            .labels()
            .iter()
            .zip(&scores)
            .find(|(_, score)| !score.is_finite())
        {
            return Err(Error::InvalidScore {
                detector: self.name().to_string(),
                label: label.clone(),
                score,
            });
        }

        let decision_index = self
            .label_index(decision)
            .ok_or_else(|| Error::InvalidDecision {
                detector: self.name().to_string(),
                decision: decision.to_string(),
            })?;

        let distribution = self.labels().iter().cloned().zip(scores).collect();
        Ok(ScoreEntry::new(
            self.name().to_string(),
            distribution,
            decision.to_string(),
            decision_index,
        ))
    }

    fn shape_mismatch(&self, found: Vec<String>) -> Error {
        Error::ShapeMismatch {
            detector: self.name().to_string(),
            expected: self.labels().to_vec(),
            found,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn tampering() -> Detector {
        Detector::binary("is_tampered", ["original", "tampered"]).unwrap()
    }

    #[test]
    fn test_valid_scores_follow_declared_order() {
        let entry = tampering()
            .validate_scores([("tampered", 0.2), ("original", 0.8)], "original")
            .unwrap();
        assert_eq!(entry.detector(), "is_tampered");
        assert_eq!(entry.distribution()[0], ("original".to_string(), 0.8));
        assert_eq!(entry.distribution()[1], ("tampered".to_string(), 0.2));
        assert_eq!(entry.decision(), "original");
        assert_eq!(entry.decision_index(), 0);
    }

    #[test]
    fn test_missing_label_is_shape_mismatch() {
        let result = tampering().validate_scores([("original", 1.0)], "original");
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_extra_label_is_shape_mismatch() {
        let det = Detector::categorical("cover_stego", ["cover", "stego"]).unwrap();
        let result = det.validate_scores(
            [("cover", 0.3), ("stego", 0.2), ("not_sure", 0.5)],
            "not_sure",
        );
        match result {
            Err(Error::ShapeMismatch {
                detector,
                expected,
                found,
            }) => {
                assert_eq!(detector, "cover_stego");
                assert_eq!(expected, ["cover", "stego"]);
                assert_eq!(found, ["cover", "stego", "not_sure"]);
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_label_is_shape_mismatch() {
        let result =
            tampering().validate_scores([("original", 0.5), ("original", 0.5)], "original");
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_decision_outside_labels() {
        let result =
            tampering().validate_scores([("original", 0.5), ("tampered", 0.5)], "unsure");
        assert!(matches!(result, Err(Error::InvalidDecision { .. })));
    }

    #[test]
    fn test_shape_checked_before_decision() {
        let result = tampering().validate_scores([("original", 0.5)], "unsure");
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_decision_not_required_to_be_argmax() {
        let entry = tampering()
            .validate_scores([("original", 0.9), ("tampered", 0.1)], "tampered")
            .unwrap();
        assert_eq!(entry.decision_index(), 1);
    }

    #[test]
    fn test_non_finite_scores_rejected() {
        let result =
            tampering().validate_scores([("original", f64::NAN), ("tampered", 0.5)], "original");
        match result {
            Err(Error::InvalidScore {
                detector,
                label,
                score,
            }) => {
                assert_eq!(detector, "is_tampered");
                assert_eq!(label, "original");
                assert!(score.is_nan());
            }
            other => panic!("expected invalid score, got {other:?}"),
        }

        let result = tampering().validate_ordered(&[0.5, f64::NEG_INFINITY], "tampered");
        assert!(matches!(
            result,
            Err(Error::InvalidScore { ref label, .. }) if label == "tampered"
        ));
    }

    #[test]
    fn test_ordered_scores() {
        let det = Detector::categorical("three", ["cover", "stego", "not_sure"]).unwrap();
        let entry = det.validate_ordered(&[0.05, 0.8, 0.15], "stego").unwrap();
        assert_eq!(entry.score("stego"), Some(0.8));
        assert_eq!(entry.decision_index(), 1);

        let result = det.validate_ordered(&[0.5, 0.5], "stego");
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }
}
