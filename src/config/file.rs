//! Tool configuration loading.

use crate::config::ToolConfig;
use crate::error::{Error, Result};
use std::path::Path;

/// Load a tool configuration from a TOML file.
pub fn load_tool_config(path: &Path) -> Result<ToolConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: Some(path.to_path_buf()),
        source: e,
    })
}

/// Parse a tool configuration from TOML text.
pub fn parse_tool_config(contents: &str) -> Result<ToolConfig> {
    toml::from_str(contents).map_err(|e| Error::ConfigParse {
        path: None,
        source: e,
    })
}
