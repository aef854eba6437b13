//! Tool configuration validation.

use crate::config::ToolConfig;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Validate a tool configuration.
///
/// Checks the tool name, every detector definition, and that detector names
/// are unique.
pub fn validate_tool_config(config: &ToolConfig) -> Result<()> {
    if config.tool.trim().is_empty() {
        return Err(Error::configuration("tool name must not be empty"));
    }

    let mut names = HashSet::with_capacity(config.detectors.len());
    for detector in &config.detectors {
        detector.build()?;
        if !names.insert(detector.name.as_str()) {
            return Err(Error::configuration(format!(
                "detector '{}' is defined more than once",
                detector.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::parse_tool_config;

    #[test]
    fn test_valid_config() {
        let config = parse_tool_config(
            r#"
tool = "steganography_detector"

[[detectors]]
name = "is_tampered"
kind = "binary"
"#,
        )
        .unwrap();
        assert!(validate_tool_config(&config).is_ok());
    }

    #[test]
    fn test_empty_tool_name() {
        let config = parse_tool_config(r#"tool = "  ""#).unwrap();
        assert!(matches!(
            validate_tool_config(&config),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_duplicate_detector_names() {
        let config = parse_tool_config(
            r#"
tool = "t"

[[detectors]]
name = "d"
kind = "binary"

[[detectors]]
name = "d"
kind = "categorical"
labels = ["a", "b"]
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_tool_config(&config),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_invalid_detector() {
        let config = parse_tool_config(
            r#"
tool = "t"

[[detectors]]
name = "d"
kind = "categorical"
labels = ["only"]
"#,
        )
        .unwrap();
        assert!(matches!(
            validate_tool_config(&config),
            Err(Error::Configuration { .. })
        ));
    }
}
