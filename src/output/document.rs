//! Unified JSON document written at disposal.

use crate::detector::{Detector, DetectorKind, KindTag, ScoreEntry};
use crate::output::OrderedMap;
use crate::writer::{FileRecord, ToolInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level output document of one tool run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDocument {
    /// Tool name.
    pub tool: String,
    /// Tool version.
    pub version: String,
    /// Tool parameters.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub configuration: Map<String, Value>,
    /// Input filter the tool ran with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Registered detectors in construction order.
    pub detectors: Vec<DetectorSummary>,
    /// Per-file results in first-reference order.
    pub files: Vec<FileEntry>,
}

impl ToolDocument {
    /// Assemble the document from writer state.
    pub(crate) fn build<'a>(
        tool: &ToolInfo,
        detectors: &[Detector],
        records: impl IntoIterator<Item = &'a FileRecord>,
    ) -> Self {
        let files = records
            .into_iter()
            .map(|record| FileEntry::build(record, detectors))
            .collect();

        Self {
            tool: tool.name.clone(),
            version: tool.version.clone(),
            configuration: tool.configuration.clone(),
            filter: tool.filter.clone(),
            detectors: detectors.iter().map(DetectorSummary::from).collect(),
            files,
        }
    }

    /// Entry for a file, if present.
    pub fn file(&self, file_id: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.file_id == file_id)
    }
}

/// Detector descriptor as written to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorSummary {
    /// Detector name.
    pub name: String,
    /// Detector kind.
    pub kind: KindTag,
    /// Declared labels.
    pub labels: Vec<String>,
}

impl From<&Detector> for DetectorSummary {
    fn from(detector: &Detector) -> Self {
        Self {
            name: detector.name().to_string(),
            kind: detector.kind().tag(),
            labels: detector.labels().to_vec(),
        }
    }
}

/// Accumulated results for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File identifier.
    pub file_id: String,
    /// When processing of the file was announced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the last score for the file was appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Scores by detector name.
    pub scores: OrderedMap<ScoreSummary>,
    /// Processing errors reported for the file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl FileEntry {
    fn build(record: &FileRecord, detectors: &[Detector]) -> Self {
        let scores = record
            .scores()
            .iter()
            .map(|entry| {
                let kind = detectors
                    .iter()
                    .find(|d| d.name() == entry.detector())
                    .map_or(DetectorKind::Binary, Detector::kind);
                (entry.detector().to_string(), ScoreSummary::build(entry, kind))
            })
            .collect();

        Self {
            file_id: record.file_id().to_string(),
            start_time: record.start_time(),
            end_time: record.end_time(),
            scores,
            errors: record.errors().to_vec(),
        }
    }
}

/// One detector's output as written to the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Score per label.
    pub distribution: OrderedMap<f64>,
    /// Chosen label.
    pub decision: String,
    /// Position of the chosen label in the declared labels.
    pub decision_index: usize,
}

impl ScoreSummary {
    fn build(entry: &ScoreEntry, kind: DetectorKind) -> Self {
        Self {
            distribution: entry.rendered(kind).into_iter().collect(),
            decision: entry.decision().to_string(),
            decision_index: entry.decision_index(),
        }
    }
}
