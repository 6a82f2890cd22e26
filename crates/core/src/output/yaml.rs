//! YAML output formatter

use crate::models::Trail;
use crate::output::FormatError;

/// Format a trail as YAML
pub fn format_yaml(trail: &Trail) -> Result<String, FormatError> {
    serde_yaml::to_string(trail).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreadcrumbNode, NOT_FOUND_NODE_TYPE};

    #[test]
    fn test_format_yaml() {
        let mut trail = Trail::new(BreadcrumbNode::synthetic(
            "home",
            "Example Site",
            Some("https://example.com/".to_string()),
        ));
        trail.push(BreadcrumbNode::synthetic(NOT_FOUND_NODE_TYPE, "404 Not Found", None));

        let yaml = format_yaml(&trail).unwrap();
        assert!(yaml.contains("type: home"));
        assert!(yaml.contains("404 Not Found"));
        assert!(yaml.contains("url: null"));
    }
}
