//! Tool identity written into the document.

use crate::constants::DEFAULT_TOOL_VERSION;
use serde_json::{Map, Value};

/// Name, version and run parameters of the tool producing the scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInfo {
    /// Tool name.
    pub name: String,
    /// Tool version.
    pub version: String,
    /// Parameter/value pairs the tool ran with.
    pub configuration: Map<String, Value>,
    /// Input filter, if any.
    pub filter: Option<String>,
}

impl ToolInfo {
    /// Tool with the default version and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_TOOL_VERSION.to_string(),
            configuration: Map::new(),
            filter: None,
        }
    }

    /// Set the tool version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the run parameters.
    #[must_use]
    pub fn with_configuration(mut self, configuration: Map<String, Value>) -> Self {
        self.configuration = configuration;
        self
    }

    /// Add a single run parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.configuration.insert(key.into(), value.into());
        self
    }

    /// Set the input filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
