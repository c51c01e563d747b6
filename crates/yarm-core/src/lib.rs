//! # yarm-core
//!
//! Bidirectional YAML ↔ JSON conversion with **x-yarm** key filtering.
//!
//! Keys starting with `x-yarm` carry tool-internal metadata, in the manner of
//! OpenAPI `x-` vendor extensions. They are stripped when converting YAML to
//! JSON unless the caller asks to keep them. JSON → YAML passes every key
//! through.
//!
//! ## Quick start
//!
//! ```rust
//! use yarm_core::{to_json, to_yaml, DEFAULT_IGNORE_X_YARM};
//!
//! // YAML → JSON, x-yarm keys dropped
//! let yaml = "x-yarm-owner: team-a\ntitle: Petstore\n";
//! let json = to_json(Some(yaml), DEFAULT_IGNORE_X_YARM).unwrap().unwrap();
//! assert_eq!(json, "{\n  \"title\": \"Petstore\"\n}");
//!
//! // JSON → YAML
//! let back = to_yaml(Some(json.as_str())).unwrap().unwrap();
//! assert_eq!(back, "title: Petstore\n");
//!
//! // Blank input is a no-op, not an error
//! assert_eq!(to_json(Some("   "), true).unwrap(), None);
//! ```
//!
//! ## Modules
//!
//! - [`yaml_to_json`] — YAML string → JSON string (`to_json`, `to_json_with`)
//! - [`json_to_yaml`] — JSON string → YAML string (`to_yaml`)
//! - [`filter`] — x-yarm key stripping (`filter_x_yarm`, `FilterScope`)
//! - [`error`] — Stage-typed error (`YarmError`)
//! - [`types`] — `Node` document tree used as the pivot between formats

pub mod error;
pub mod filter;
pub mod json_to_yaml;
pub mod types;
pub mod yaml_to_json;

pub use error::{Stage, YarmError};
pub use filter::{filter_x_yarm, filtered, is_x_yarm_key, FilterScope, XYARM_PREFIX};
pub use json_to_yaml::to_yaml;
pub use types::{Node, Scalar};
pub use yaml_to_json::{to_json, to_json_with, JsonStyle, ToJsonOptions, DEFAULT_IGNORE_X_YARM};

/// `None` for missing, empty, or whitespace-only input.
pub(crate) fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
