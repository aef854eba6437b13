//! Per-file records and the insertion-ordered record table.

use crate::detector::ScoreEntry;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Accumulated results for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    file_id: String,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    scores: Vec<ScoreEntry>,
    errors: Vec<String>,
}

impl FileRecord {
    fn new(file_id: String) -> Self {
        Self {
            file_id,
            start_time: None,
            end_time: None,
            scores: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// File identifier.
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Time the record was announced with `prepend`.
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Time of the most recent `append`.
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Score entries in the order their detectors were first set.
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    /// Score entry of one detector.
    pub fn score(&self, detector: &str) -> Option<&ScoreEntry> {
        self.scores.iter().find(|s| s.detector() == detector)
    }

    /// Processing errors reported for this file.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub(super) fn set_start_time(&mut self, at: DateTime<Utc>) {
        self.start_time = Some(at);
    }

    /// Store a score entry, replacing an earlier one from the same detector.
    pub(super) fn set_score(&mut self, entry: ScoreEntry, at: DateTime<Utc>) {
        match self
            .scores
            .iter_mut()
            .find(|s| s.detector() == entry.detector())
        {
            Some(existing) => *existing = entry,
            None => self.scores.push(entry),
        }
        self.end_time = Some(at);
    }

    pub(super) fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }
}

/// File records keyed by file id, iterated in first-reference order.
#[derive(Debug, Default)]
pub(super) struct RecordTable {
    records: Vec<FileRecord>,
    index: HashMap<String, usize>,
}

impl RecordTable {
    /// Record for `file_id`, created if missing. The flag is `true` when the
    /// record was created by this call.
    pub(super) fn get_or_insert(&mut self, file_id: &str) -> (&mut FileRecord, bool) {
        let (slot, created) = match self.index.get(file_id) {
            Some(&slot) => (slot, false),
            None => {
                let slot = self.records.len();
                self.records.push(FileRecord::new(file_id.to_string()));
                self.index.insert(file_id.to_string(), slot);
                (slot, true)
            }
        };
        (&mut self.records[slot], created)
    }

    pub(super) fn get(&self, file_id: &str) -> Option<&FileRecord> {
        self.index.get(file_id).map(|&slot| &self.records[slot])
    }

    pub(super) fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub(super) fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::detector::Detector;

    #[test]
    fn test_table_keeps_first_reference_order() {
        let mut table = RecordTable::default();
        table.get_or_insert("b.jpg");
        table.get_or_insert("a.jpg");
        let (_, created) = table.get_or_insert("b.jpg");

        assert!(!created);
        let ids: Vec<_> = table.records().iter().map(FileRecord::file_id).collect();
        assert_eq!(ids, ["b.jpg", "a.jpg"]);
        assert!(table.get("a.jpg").is_some());
        assert!(table.get("c.jpg").is_none());
    }

    #[test]
    fn test_set_score_overwrites_same_detector() {
        let det = Detector::binary("is_tampered", ["original", "tampered"]).unwrap();
        let first = det
            .validate_scores([("original", 0.8), ("tampered", 0.2)], "original")
            .unwrap();
        let second = det
            .validate_scores([("original", 0.3), ("tampered", 0.7)], "tampered")
            .unwrap();

        let mut table = RecordTable::default();
        let (record, _) = table.get_or_insert("x.jpg");
        record.set_score(first, Utc::now());
        record.set_score(second, Utc::now());

        let record = table.get("x.jpg").unwrap();
        assert_eq!(record.scores().len(), 1);
        assert_eq!(record.score("is_tampered").unwrap().decision(), "tampered");
        assert!(record.end_time().is_some());
        assert!(record.start_time().is_none());
    }

    #[test]
    fn test_clear_empties_table() {
        let mut table = RecordTable::default();
        table.get_or_insert("a.jpg");
        table.clear();
        assert!(table.records().is_empty());
        assert!(table.get("a.jpg").is_none());
    }
}
