//! Document tree shared by the YAML and JSON adapters.
//!
//! Both conversion directions parse into a [`Node`] and serialize out of one,
//! so neither format adapter knows about the other. Mappings are kept as
//! `Vec<(String, Node)>` to preserve insertion order without depending on
//! `IndexMap`.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// A node in a parsed YAML or JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key-value pairs in insertion order. Keys are unique.
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

/// A leaf value, holding the minimally-typed parsed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    /// Only used for integers above `i64::MAX`.
    UnsignedInteger(u64),
    Float(f64),
    String(String),
}

impl Node {
    /// An empty mapping.
    pub fn mapping() -> Self {
        Node::Mapping(Vec::new())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Look up a key in a mapping node. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Keys of a mapping node in order; empty for anything else.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_mapping()
            .unwrap_or_default()
            .iter()
            .map(|(k, _)| k.as_str())
    }

    /// Build a tree from a parsed YAML value.
    ///
    /// Scalar mapping keys are rendered to text (`1` becomes `"1"`). Distinct
    /// keys that render the same (`1` and `'1'`) are rejected, as are mapping or
    /// sequence keys, which have no JSON form. Tags are dropped and the tagged
    /// value kept.
    pub fn from_yaml_value(value: YamlValue) -> Result<Node, serde_yaml::Error> {
        Ok(match value {
            YamlValue::Null => Node::Scalar(Scalar::Null),
            YamlValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            YamlValue::Number(n) => Node::Scalar(yaml_number(&n)),
            YamlValue::String(s) => Node::Scalar(Scalar::String(s)),
            YamlValue::Sequence(seq) => Node::Sequence(
                seq.into_iter()
                    .map(Node::from_yaml_value)
                    .collect::<Result<_, _>>()?,
            ),
            YamlValue::Mapping(map) => {
                let mut entries: Vec<(String, Node)> = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let key = yaml_key(key)?;
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(<serde_yaml::Error as serde::de::Error>::custom(format!(
                            "duplicate key `{key}` after rendering"
                        )));
                    }
                    entries.push((key, Node::from_yaml_value(value)?));
                }
                Node::Mapping(entries)
            }
            YamlValue::Tagged(tagged) => Node::from_yaml_value(tagged.value)?,
        })
    }

    /// Build a tree from a parsed JSON value. Every JSON value has a tree form.
    pub fn from_json_value(value: JsonValue) -> Node {
        match value {
            JsonValue::Null => Node::Scalar(Scalar::Null),
            JsonValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Node::Scalar(json_number(&n)),
            JsonValue::String(s) => Node::Scalar(Scalar::String(s)),
            JsonValue::Array(arr) => {
                Node::Sequence(arr.into_iter().map(Node::from_json_value).collect())
            }
            JsonValue::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from_json_value(v)))
                    .collect(),
            ),
        }
    }

    /// Convert to a JSON value.
    ///
    /// Fails on NaN and infinite floats, which JSON cannot express.
    pub fn to_json_value(&self) -> Result<JsonValue, serde_json::Error> {
        Ok(match self {
            Node::Scalar(scalar) => match scalar {
                Scalar::Null => JsonValue::Null,
                Scalar::Bool(b) => JsonValue::Bool(*b),
                Scalar::Integer(i) => JsonValue::from(*i),
                Scalar::UnsignedInteger(u) => JsonValue::from(*u),
                Scalar::Float(f) => serde_json::Number::from_f64(*f)
                    .map(JsonValue::Number)
                    .ok_or_else(|| {
                        <serde_json::Error as serde::ser::Error>::custom(format!(
                            "float {f} has no JSON representation"
                        ))
                    })?,
                Scalar::String(s) => JsonValue::String(s.clone()),
            },
            Node::Sequence(items) => JsonValue::Array(
                items
                    .iter()
                    .map(Node::to_json_value)
                    .collect::<Result<_, _>>()?,
            ),
            Node::Mapping(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json_value()?);
                }
                JsonValue::Object(map)
            }
        })
    }

    /// Convert to a YAML value. Every tree has a YAML form.
    pub fn to_yaml_value(&self) -> YamlValue {
        match self {
            Node::Scalar(scalar) => match scalar {
                Scalar::Null => YamlValue::Null,
                Scalar::Bool(b) => YamlValue::Bool(*b),
                Scalar::Integer(i) => YamlValue::Number((*i).into()),
                Scalar::UnsignedInteger(u) => YamlValue::Number((*u).into()),
                Scalar::Float(f) => YamlValue::Number((*f).into()),
                Scalar::String(s) => YamlValue::String(s.clone()),
            },
            Node::Sequence(items) => {
                YamlValue::Sequence(items.iter().map(Node::to_yaml_value).collect())
            }
            Node::Mapping(entries) => YamlValue::Mapping(
                entries
                    .iter()
                    .map(|(k, v)| (YamlValue::String(k.clone()), v.to_yaml_value()))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Scalar::Integer(i))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

/// Numbers render from their parsed value, not the source text: `0x10` is
/// `"16"` and `1e3` is `"1000.0"`.
fn yaml_key(key: YamlValue) -> Result<String, serde_yaml::Error> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Tagged(tagged) => yaml_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(
            <serde_yaml::Error as serde::de::Error>::custom(
                "mapping keys must be scalars to be represented in JSON",
            ),
        ),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::UnsignedInteger(u)
    } else if let Some(f) = n.as_f64() {
        Scalar::Float(f)
    } else {
        Scalar::String(n.to_string())
    }
}

fn json_number(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::UnsignedInteger(u)
    } else if let Some(f) = n.as_f64() {
        Scalar::Float(f)
    } else {
        Scalar::String(n.to_string())
    }
}
