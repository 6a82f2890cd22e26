//! Output formatting module
//!
//! This module serializes breadcrumb trails as JSON or YAML data. Turning a
//! trail into markup is left to the host.

mod json;
mod yaml;

pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::Trail;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Format a trail in the specified format
pub fn format_output(trail: &Trail, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(trail),
        OutputFormat::Yaml => format_yaml(trail),
    }
}
