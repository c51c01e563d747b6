//! JSON → YAML conversion.
//!
//! JSON text is parsed into a [`Node`] tree and written back out as block-style
//! YAML. No key filtering happens in this direction: x-yarm keys pass through.
//!
//! # Example
//! ```
//! use yarm_core::to_yaml;
//!
//! let json = r#"{"name":"petstore","tags":["pets","store"],"public":true}"#;
//! let yaml = to_yaml(Some(json)).unwrap().unwrap();
//! assert_eq!(yaml, "name: petstore\ntags:\n- pets\n- store\npublic: true\n");
//! ```

use crate::error::Result;
use crate::types::Node;

/// Convert JSON text to YAML.
///
/// Returns `Ok(None)` when the input is `None`, empty, or whitespace only.
/// Strings that would read back as another type (`"true"`, `"1"`) are quoted.
///
/// # Errors
///
/// [`YarmError::InvalidJson`](crate::YarmError::InvalidJson) when the input is
/// not valid JSON.
pub fn to_yaml(json: Option<&str>) -> Result<Option<String>> {
    let Some(json) = crate::non_blank(json) else {
        return Ok(None);
    };
    tracing::debug!(bytes = json.len(), "converting JSON to YAML");

    let tree = parse_json(json)?;
    write_yaml(&tree).map(Some)
}

/// Parse JSON text into a document tree. Key order is preserved.
pub fn parse_json(json: &str) -> Result<Node> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(Node::from_json_value(value))
}

/// Write a document tree as block-style YAML.
pub fn write_yaml(tree: &Node) -> Result<String> {
    Ok(serde_yaml::to_string(&tree.to_yaml_value())?)
}
