//! Tool configuration loading and validation.

mod file;
mod types;
mod validate;

pub use file::{load_tool_config, parse_tool_config};
pub use types::{DetectorConfig, ToolConfig};
pub use validate::validate_tool_config;
