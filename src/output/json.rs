//! JSON encoding of tool documents.

use crate::error::{Error, Result};
use crate::output::ToolDocument;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a document to `path` as pretty-printed JSON, replacing any
/// existing file.
pub fn write_document(path: &Path, document: &ToolDocument) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| Error::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| Error::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a document previously written by [`write_document`].
pub fn read_document(path: &Path) -> Result<ToolDocument> {
    let file = File::open(path).map_err(|e| Error::OutputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::JsonRead {
        path: path.to_path_buf(),
        source: e,
    })
}
