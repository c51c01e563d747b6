//! YAML → JSON conversion.
//!
//! The YAML text is parsed into a [`Node`] tree, optionally stripped of x-yarm
//! keys, then bridged to a `serde_json::Value` and written out. Any failure in
//! the bridge or the writer is a JSON-stage error.
//!
//! # Example
//! ```
//! use yarm_core::to_json;
//!
//! let yaml = "x-yarm: internal\nname: petstore\nversion: 1\n";
//! let json = to_json(Some(yaml), true).unwrap().unwrap();
//! assert_eq!(json, "{\n  \"name\": \"petstore\",\n  \"version\": 1\n}");
//! ```

use crate::error::Result;
use crate::filter::{filter_x_yarm, FilterScope};
use crate::types::Node;

/// Default for the `ignore_x_yarm` argument of [`to_json`].
pub const DEFAULT_IGNORE_X_YARM: bool = true;

/// JSON output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Two-space indented, `"key": value`.
    #[default]
    Pretty,
    /// Single line, no whitespace.
    Compact,
}

/// Options for [`to_json_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToJsonOptions {
    /// Strip keys starting with `x-yarm`.
    pub ignore_x_yarm: bool,
    /// How far the x-yarm filter reaches. Ignored when `ignore_x_yarm` is false.
    pub scope: FilterScope,
    pub style: JsonStyle,
}

impl Default for ToJsonOptions {
    fn default() -> Self {
        Self {
            ignore_x_yarm: DEFAULT_IGNORE_X_YARM,
            scope: FilterScope::default(),
            style: JsonStyle::default(),
        }
    }
}

impl ToJsonOptions {
    pub fn ignore_x_yarm(mut self, ignore: bool) -> Self {
        self.ignore_x_yarm = ignore;
        self
    }

    pub fn scope(mut self, scope: FilterScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

/// Convert YAML text to pretty-printed JSON.
///
/// Returns `Ok(None)` when the input is `None`, empty, or whitespace only; no
/// parser is invoked in that case. With `ignore_x_yarm` set, keys of the root
/// mapping that start with `x-yarm` are dropped.
///
/// # Errors
///
/// [`YarmError::InvalidYaml`](crate::YarmError::InvalidYaml) when the input is
/// not valid YAML, and
/// [`YarmError::InvalidJson`](crate::YarmError::InvalidJson) when the parsed
/// document cannot be written as JSON.
pub fn to_json(yaml: Option<&str>, ignore_x_yarm: bool) -> Result<Option<String>> {
    to_json_with(yaml, &ToJsonOptions::default().ignore_x_yarm(ignore_x_yarm))
}

/// Convert YAML text to JSON with explicit options.
pub fn to_json_with(yaml: Option<&str>, options: &ToJsonOptions) -> Result<Option<String>> {
    let Some(yaml) = crate::non_blank(yaml) else {
        return Ok(None);
    };
    tracing::debug!(
        bytes = yaml.len(),
        ignore_x_yarm = options.ignore_x_yarm,
        scope = ?options.scope,
        "converting YAML to JSON"
    );

    let mut tree = parse_yaml(yaml)?;
    if options.ignore_x_yarm {
        filter_x_yarm(&mut tree, options.scope);
    }
    write_json(&tree, options.style).map(Some)
}

/// Parse YAML text into a document tree.
///
/// Multi-document streams are rejected by the parser.
pub fn parse_yaml(yaml: &str) -> Result<Node> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    Ok(Node::from_yaml_value(value)?)
}

/// Write a document tree as JSON text.
pub fn write_json(tree: &Node, style: JsonStyle) -> Result<String> {
    let value = tree.to_json_value()?;
    let json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value)?,
        JsonStyle::Compact => serde_json::to_string(&value)?,
    };
    Ok(json)
}
