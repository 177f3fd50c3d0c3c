//! Element fixtures
//!
//! Documents are handed over as a flat list of already-parsed elements in
//! document order, written as YAML or JSON:
//!
//! ```yaml
//! elements:
//!   - tag: img
//!     line: 3
//!     column: 5
//!     attributes:
//!       - { name: src, value: logo.png }
//!       - { name: ismap }
//! ```

use crate::node::{Attribute, Node, QuoteStyle, TagId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Element fixture loading error
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown input format: {0}")]
    UnsupportedFormat(String),
}

/// Serialization format of an element fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "json" => Ok(InputFormat::Json),
            _ => Err(InputError::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// Attribute values as written; numbers and booleans are kept as text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// One attribute in a fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
    #[serde(default)]
    pub quote: QuoteStyle,
}

/// One element in a fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttributeRecord>,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Deserialize)]
struct ElementFile {
    #[serde(default)]
    elements: Vec<ElementRecord>,
}

impl From<AttributeRecord> for Attribute {
    fn from(record: AttributeRecord) -> Self {
        Attribute {
            name: record.name,
            value: record.value,
            quote: record.quote,
        }
    }
}

impl From<ElementRecord> for Node {
    fn from(record: ElementRecord) -> Self {
        Node {
            tag: TagId::from_name(&record.tag),
            element: record.tag,
            attributes: record.attributes.into_iter().map(Attribute::from).collect(),
            line: record.line,
            column: record.column,
        }
    }
}

/// Parse an element fixture from text
pub fn parse_elements(content: &str, format: InputFormat) -> Result<Vec<Node>, InputError> {
    let file: ElementFile = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(file.elements.into_iter().map(Node::from).collect())
}

/// Load an element fixture, choosing the format by extension
pub fn load_elements(path: &Path) -> Result<Vec<Node>, InputError> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let nodes = parse_elements(&content, format)?;
    log::debug!("loaded {} element(s) from {}", nodes.len(), path.display());
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_elements() {
        let yaml = r#"
elements:
  - tag: IMG
    line: 3
    column: 5
    attributes:
      - { name: src, value: logo.png }
      - { name: ismap }
      - { name: width, value: 100 }
  - tag: blink
"#;
        let nodes = parse_elements(yaml, InputFormat::Yaml).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag, Some(TagId::Img));
        assert_eq!(nodes[0].element, "IMG");
        assert_eq!(nodes[0].line, 3);
        assert_eq!(nodes[0].attributes[1].value, None);
        assert_eq!(
            nodes[0].get_attr_by_name("width").and_then(|a| a.value()),
            Some("100")
        );
        assert_eq!(nodes[1].tag, None);
    }

    #[test]
    fn test_parse_json_elements() {
        let json = r#"{"elements": [{"tag": "a", "attributes": [{"name": "href", "value": "/", "quote": "single"}]}]}"#;
        let nodes = parse_elements(json, InputFormat::Json).unwrap();

        assert_eq!(nodes[0].tag, Some(TagId::A));
        assert_eq!(nodes[0].attributes[0].quote, QuoteStyle::Single);
        assert_eq!(nodes[0].line, 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "elements:\n  - tag: form").unwrap();

        let nodes = load_elements(file.path()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag, Some(TagId::Form));
    }

    #[test]
    fn test_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
        let err = load_elements(file.path()).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFormat(ref ext) if ext == "html"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_elements("elements: [", InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, InputError::Yaml(_)));
    }
}
