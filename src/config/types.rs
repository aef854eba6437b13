//! Tool configuration type definitions.

use crate::constants::{BINARY_LABEL_COUNT, DEFAULT_BINARY_LABELS};
use crate::detector::{CategoricalOptions, Detector, KindTag, ScoreOrder};
use crate::error::{Error, Result};
use crate::writer::ToolInfo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tool description as read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Tool name.
    pub tool: String,

    /// Tool version; the crate default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Input filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Run parameters copied into every report.
    #[serde(default)]
    pub configuration: Map<String, Value>,

    /// Detectors of the tool, in report order.
    #[serde(default)]
    pub detectors: Vec<DetectorConfig>,
}

impl ToolConfig {
    /// Tool metadata for a writer.
    pub fn tool_info(&self) -> ToolInfo {
        let mut info =
            ToolInfo::new(self.tool.clone()).with_configuration(self.configuration.clone());
        if let Some(ref version) = self.version {
            info = info.with_version(version.clone());
        }
        if let Some(ref filter) = self.filter {
            info = info.with_filter(filter.clone());
        }
        info
    }

    /// Build every configured detector.
    pub fn build_detectors(&self) -> Result<Vec<Detector>> {
        self.detectors.iter().map(DetectorConfig::build).collect()
    }
}

/// One `[[detectors]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Detector name.
    pub name: String,

    /// Detector kind.
    pub kind: KindTag,

    /// Declared labels. Binary detectors default to `["0", "1"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// Score order (categorical only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<ScoreOrder>,

    /// Write only non-zero scores (categorical only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_flags: Option<bool>,
}

impl DetectorConfig {
    /// Build the detector descriptor.
    pub fn build(&self) -> Result<Detector> {
        match self.kind {
            KindTag::Binary => self.build_binary(),
            KindTag::Categorical => {
                let labels = self.labels.clone().ok_or_else(|| {
                    Error::configuration(format!(
                        "categorical detector '{}' requires labels",
                        self.name
                    ))
                })?;
                let options = CategoricalOptions {
                    order: self.order.unwrap_or_default(),
                    only_flags: self.only_flags.unwrap_or(false),
                };
                Detector::categorical_with(self.name.clone(), labels, options)
            }
        }
    }

    fn build_binary(&self) -> Result<Detector> {
        if self.order.is_some() || self.only_flags.is_some() {
            return Err(Error::configuration(format!(
                "binary detector '{}' does not take order or only_flags",
                self.name
            )));
        }

        let labels = self
            .labels
            .clone()
            .unwrap_or_else(|| Vec::from(DEFAULT_BINARY_LABELS.map(String::from)));
        let labels: [String; BINARY_LABEL_COUNT] =
            labels.try_into().map_err(|labels: Vec<String>| {
                Error::configuration(format!(
                    "binary detector '{}' needs exactly {BINARY_LABEL_COUNT} labels, got {}",
                    self.name,
                    labels.len()
                ))
            })?;
        Detector::binary(self.name.clone(), labels)
    }
}
