//! Configuration module for trail building
//!
//! This module provides the per-call breadcrumb options (`home` and `404`
//! nodes with shallow caller overrides) and the builder-level [`TrailConfig`].

use crate::models::{BreadcrumbNode, SiteInfo, HOME_NODE_TYPE, NOT_FOUND_NODE_TYPE};
use crate::store::FixtureFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default label of the not-found node
pub const DEFAULT_NOT_FOUND_LABEL: &str = "404 Not Found";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML options error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON options error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported options format: {0}")]
    UnsupportedFormat(String),
}

/// Caller-supplied replacements for the synthetic nodes
///
/// Each key present replaces the default node as a whole; fields are never
/// merged individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<BreadcrumbNode>,

    #[serde(rename = "404", default, skip_serializing_if = "Option::is_none")]
    pub not_found: Option<BreadcrumbNode>,
}

impl OptionOverrides {
    /// Replace the home node (builder pattern)
    pub fn with_home(mut self, node: BreadcrumbNode) -> Self {
        self.home = Some(node);
        self
    }

    /// Replace the not-found node (builder pattern)
    pub fn with_not_found(mut self, node: BreadcrumbNode) -> Self {
        self.not_found = Some(node);
        self
    }
}

/// Resolved options for one trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbOptions {
    pub home: BreadcrumbNode,
    pub not_found: BreadcrumbNode,
}

impl BreadcrumbOptions {
    /// Defaults derived from site information
    pub fn defaults(site: &SiteInfo) -> Self {
        Self {
            home: BreadcrumbNode::synthetic(
                HOME_NODE_TYPE,
                site.name.clone(),
                Some(site.home_url.clone()),
            ),
            not_found: BreadcrumbNode::synthetic(NOT_FOUND_NODE_TYPE, DEFAULT_NOT_FOUND_LABEL, None),
        }
    }

    /// Apply caller overrides by whole-key replacement
    pub fn merged(self, overrides: &OptionOverrides) -> Self {
        Self {
            home: overrides.home.clone().unwrap_or(self.home),
            not_found: overrides.not_found.clone().unwrap_or(self.not_found),
        }
    }
}

/// Builder-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailConfig {
    /// Appended to the year in year archive labels (e.g. "年")
    pub year_suffix: String,
}

impl TrailConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set year label suffix (builder pattern)
    pub fn with_year_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.year_suffix = suffix.into();
        self
    }
}

/// Load option overrides from a YAML or JSON file
pub fn load_overrides(path: &Path) -> Result<OptionOverrides, ConfigError> {
    let format = FixtureFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
    let source = fs::read_to_string(path)?;

    let overrides = match format {
        FixtureFormat::Yaml => serde_yaml::from_str(&source)?,
        FixtureFormat::Json => serde_json::from_str(&source)?,
    };

    tracing::debug!(?path, "loaded breadcrumb options");
    Ok(overrides)
}
