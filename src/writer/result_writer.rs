//! Accumulating writer for per-file detector scores.

use crate::config::{ToolConfig, validate_tool_config};
use crate::detector::{Detector, ScoreEntry};
use crate::error::{Error, Result};
use crate::output::{ToolDocument, write_document};
use crate::writer::record::{FileRecord, RecordTable};
use crate::writer::ToolInfo;
use chrono::Utc;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Collects validated detector scores per file and writes them as one JSON
/// document when disposed.
///
/// Prefer [`ResultWriter::run`] or an explicit [`ResultWriter::dispose`]:
/// dropping an undisposed writer still writes the document, but a failure at
/// that point can only be logged.
///
/// The writer is not synchronized; callers sharing it across threads must
/// wrap it in their own lock.
#[derive(Debug)]
pub struct ResultWriter {
    path: PathBuf,
    tool: ToolInfo,
    detectors: Vec<Detector>,
    detector_index: HashMap<String, usize>,
    records: RecordTable,
    disposed: bool,
}

impl ResultWriter {
    /// Create a writer for `tool` with the default version and no parameters.
    pub fn new(
        path: impl AsRef<Path>,
        tool: impl Into<String>,
        detectors: impl IntoIterator<Item = Detector>,
    ) -> Result<Self> {
        Self::with_tool(path, ToolInfo::new(tool), detectors)
    }

    /// Create a writer with full tool metadata.
    ///
    /// Fails with [`Error::Configuration`] if two detectors share a name.
    pub fn with_tool(
        path: impl AsRef<Path>,
        tool: ToolInfo,
        detectors: impl IntoIterator<Item = Detector>,
    ) -> Result<Self> {
        let detectors: Vec<Detector> = detectors.into_iter().collect();
        let mut detector_index = HashMap::with_capacity(detectors.len());
        for (slot, detector) in detectors.iter().enumerate() {
            if detector_index
                .insert(detector.name().to_string(), slot)
                .is_some()
            {
                return Err(Error::configuration(format!(
                    "detector '{}' is registered more than once",
                    detector.name()
                )));
            }
        }

        let path = path.as_ref().to_path_buf();
        debug!(
            path = %path.display(),
            tool = %tool.name,
            detectors = detectors.len(),
            "result writer opened"
        );

        Ok(Self {
            path,
            tool,
            detectors,
            detector_index,
            records: RecordTable::default(),
            disposed: false,
        })
    }

    /// Create a writer from a loaded tool configuration.
    pub fn from_config(path: impl AsRef<Path>, config: &ToolConfig) -> Result<Self> {
        validate_tool_config(config)?;
        Self::with_tool(path, config.tool_info(), config.build_detectors()?)
    }

    /// Run `f` against the writer, then dispose it.
    ///
    /// Disposal happens on every exit path of `f`. If `f` fails, its error is
    /// returned and a disposal failure is only logged. A failed disposal
    /// keeps the records, so [`ResultWriter::dispose`] can be retried.
    pub fn run<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let outcome = f(self);
        let disposed = self.dispose();

        match (outcome, disposed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) | (Err(e), Ok(())) => Err(e),
            (Err(e), Err(dispose_err)) => {
                error!(
                    path = %self.path.display(),
                    error = %dispose_err,
                    "failed to write tool report after processing error"
                );
                Err(e)
            }
        }
    }

    /// Announce processing of a file and record its start time.
    ///
    /// An existing record keeps its start time.
    pub fn prepend(&mut self, file_id: &str) -> Result<()> {
        self.ensure_open()?;
        let (record, created) = self.records.get_or_insert(file_id);
        if created {
            record.set_start_time(Utc::now());
            debug!(file_id, "file record announced");
        } else {
            debug!(file_id, "file record already present, keeping start time");
        }
        Ok(())
    }

    /// Set a detector's scores for a file.
    ///
    /// The distribution must name every label of the detector exactly once
    /// and the decision must be one of those labels. A later call for the
    /// same file and detector replaces the earlier one. Nothing is recorded
    /// when validation fails.
    pub fn append<I, K>(
        &mut self,
        file_id: &str,
        detector: &str,
        distribution: I,
        decision: &str,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        self.ensure_open()?;
        let entry = self
            .lookup(detector)?
            .validate_scores(distribution, decision)?;
        self.store(file_id, entry);
        Ok(())
    }

    /// Like [`ResultWriter::append`], with scores in declared label order.
    pub fn append_ordered(
        &mut self,
        file_id: &str,
        detector: &str,
        scores: &[f64],
        decision: &str,
    ) -> Result<()> {
        self.ensure_open()?;
        let entry = self.lookup(detector)?.validate_ordered(scores, decision)?;
        self.store(file_id, entry);
        Ok(())
    }

    /// Record a processing error for a file.
    ///
    /// When `detector` is given the message is prefixed with its name.
    pub fn fail(&mut self, file_id: &str, message: &str, detector: Option<&str>) -> Result<()> {
        self.ensure_open()?;
        let message = match detector {
            Some(name) => {
                self.lookup(name)?;
                format!("{name} error: {message}")
            }
            None => message.to_string(),
        };

        debug!(file_id, %message, "processing error recorded");
        let (record, _) = self.records.get_or_insert(file_id);
        record.push_error(message);
        Ok(())
    }

    /// Drop all file records.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.records.clear();
        Ok(())
    }

    /// Write the document to the destination.
    ///
    /// Later calls are no-ops. On failure the records stay in memory and the
    /// call may be retried.
    pub fn dispose(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }

        let document = self.document();
        write_document(&self.path, &document)?;
        self.disposed = true;

        info!(
            path = %self.path.display(),
            files = document.files.len(),
            "tool report written"
        );
        Ok(())
    }

    /// The document [`ResultWriter::dispose`] would write now.
    pub fn document(&self) -> ToolDocument {
        ToolDocument::build(&self.tool, &self.detectors, self.records.records())
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tool metadata.
    pub const fn tool(&self) -> &ToolInfo {
        &self.tool
    }

    /// Registered detectors in construction order.
    pub fn detectors(&self) -> &[Detector] {
        &self.detectors
    }

    /// Registered detector by name.
    pub fn detector(&self, name: &str) -> Option<&Detector> {
        self.detector_index
            .get(name)
            .and_then(|&slot| self.detectors.get(slot))
    }

    /// Record of one file.
    pub fn record(&self, file_id: &str) -> Option<&FileRecord> {
        self.records.get(file_id)
    }

    /// All records in first-reference order.
    pub fn records(&self) -> &[FileRecord] {
        self.records.records()
    }

    /// Number of file records.
    pub fn len(&self) -> usize {
        self.records.records().len()
    }

    /// Whether no file has been referenced.
    pub fn is_empty(&self) -> bool {
        self.records.records().is_empty()
    }

    /// Whether the document has been written.
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn lookup(&self, name: &str) -> Result<&Detector> {
        self.detector(name).ok_or_else(|| Error::UnknownDetector {
            name: name.to_string(),
        })
    }

    fn store(&mut self, file_id: &str, entry: ScoreEntry) {
        let (record, created) = self.records.get_or_insert(file_id);
        if created {
            debug!(file_id, "file record created by append");
        }
        record.set_score(entry, Utc::now());
    }

    fn ensure_open(&self) -> Result<()> {
        if self.disposed {
            return Err(Error::WriterDisposed {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

impl Drop for ResultWriter {
    fn drop(&mut self) {
        if self.disposed {
            return;
        }

        warn!(
            path = %self.path.display(),
            "result writer dropped without dispose, writing report"
        );
        if let Err(e) = self.dispose() {
            error!(
                path = %self.path.display(),
                error = %e,
                "failed to write tool report on drop"
            );
        }
    }
}
