#![deny(missing_docs)]

//! # Document Shims
//!
//! Loose serde structures acting as an intermediate deserialization layer between the
//! raw YAML/JSON text and the immutable `ApiModel`. Only the fields generation needs are
//! modeled; everything else in the document is ignored.

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Either a `$ref` pointer or an inline definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShimRefOr<T> {
    /// `{ $ref: "#/components/..." }`
    Ref {
        /// The pointer.
        #[serde(rename = "$ref")]
        reference: String,
    },
    /// Inline definition.
    Item(T),
}

/// The root document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimOpenApi {
    /// Metadata about the API.
    pub info: Option<ShimInfo>,
    /// Declared tags.
    #[serde(default)]
    pub tags: Vec<ShimTag>,
    /// Path items keyed by template.
    #[serde(default)]
    pub paths: IndexMap<String, ShimPathItem>,
    /// Reusable definitions.
    pub components: Option<ShimComponents>,
}

/// The `info` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimInfo {
    /// API title.
    #[serde(default)]
    pub title: String,
    /// API version. Kept as a raw value because `version: 1.0` is a YAML float.
    pub version: Option<Value>,
}

/// A tag declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShimTag {
    /// Tag name.
    pub name: String,
}

/// The `components` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimComponents {
    /// Named schemas.
    #[serde(default)]
    pub schemas: IndexMap<String, ShimSchema>,
    /// Named responses.
    #[serde(default)]
    pub responses: IndexMap<String, ShimResponse>,
    /// Named parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, ShimParameter>,
    /// Named request bodies.
    #[serde(default, rename = "requestBodies")]
    pub request_bodies: IndexMap<String, ShimRequestBody>,
}

/// A path item: shared parameters plus one operation per method key.
#[derive(Debug, Clone, Default)]
pub struct ShimPathItem {
    /// Parameters shared by all operations of the path.
    pub parameters: Vec<ShimRefOr<ShimParameter>>,
    /// Operations keyed by the raw method key, in declaration order.
    pub operations: IndexMap<String, ShimOperation>,
}

const METHOD_KEYS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

impl<'de> Deserialize<'de> for ShimPathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut item = ShimPathItem::default();

        for (key, value) in raw {
            if key == "parameters" {
                item.parameters = serde_yaml::from_value(value).map_err(|e| {
                    DeError::custom(format!("Failed to parse path parameters: {}", e))
                })?;
            } else if METHOD_KEYS.contains(&key.to_ascii_lowercase().as_str()) {
                let op = serde_yaml::from_value::<ShimOperation>(value).map_err(|e| {
                    DeError::custom(format!("Failed to parse operation '{}': {}", key, e))
                })?;
                item.operations.insert(key, op);
            }
        }

        Ok(item)
    }
}

/// An operation object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimOperation {
    /// Unique operation id.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<ShimRefOr<ShimParameter>>,
    /// Request body.
    #[serde(rename = "requestBody")]
    pub request_body: Option<ShimRefOr<ShimRequestBody>>,
    /// Responses keyed by status code.
    #[serde(default, deserialize_with = "deserialize_status_map")]
    pub responses: IndexMap<String, ShimRefOr<ShimResponse>>,
    /// Owning tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Status codes are often written unquoted (`200:`), which YAML reads as integers.
fn deserialize_status_map<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, ShimRefOr<ShimResponse>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<Value, ShimRefOr<ShimResponse>>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, response)| {
            let status = scalar_to_string(&key)
                .ok_or_else(|| DeError::custom("response status codes must be scalars"))?;
            Ok((status, response))
        })
        .collect()
}

/// Renders a YAML scalar (string, number, bool) as text.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A parameter object.
#[derive(Debug, Clone, Deserialize)]
pub struct ShimParameter {
    /// Wire name.
    pub name: String,
    /// Location (`path`, `query`, `header`, `cookie`).
    #[serde(rename = "in")]
    pub parameter_in: String,
    /// Schema definition.
    pub schema: Option<ShimSchema>,
}

/// A request body object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimRequestBody {
    /// Media type -> representation.
    #[serde(default)]
    pub content: IndexMap<String, ShimMediaType>,
}

/// A response object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimResponse {
    /// Media type -> representation. Absent for body-less responses.
    pub content: Option<IndexMap<String, ShimMediaType>>,
}

/// A media type entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimMediaType {
    /// Payload schema.
    pub schema: Option<ShimSchema>,
}

/// A schema object. Composition keywords (`allOf`, `oneOf`, ...) are not modeled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimSchema {
    /// `$ref` pointer.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// `type`: a string, or a list of strings in OAS 3.1.
    #[serde(rename = "type")]
    pub schema_type: Option<Value>,
    /// `format`.
    pub format: Option<String>,
    /// Object properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, ShimSchema>,
    /// Array element schema.
    pub items: Option<Box<ShimSchema>>,
}

impl ShimSchema {
    /// The effective type name, skipping `"null"` in OAS 3.1 type lists.
    pub fn type_name(&self) -> Option<&str> {
        match self.schema_type.as_ref()? {
            Value::String(s) => Some(s.as_str()),
            Value::Sequence(list) => list
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_item_splits_methods_and_parameters() {
        let yaml = r#"
summary: ignored
parameters:
  - name: id
    in: path
get:
  operationId: getUser
POST:
  operationId: replaceUser
x-extension: true
"#;
        let item: ShimPathItem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(item.parameters.len(), 1);
        let keys: Vec<_> = item.operations.keys().cloned().collect();
        assert_eq!(keys, vec!["get", "POST"]);
    }

    #[test]
    fn test_unquoted_status_codes() {
        let yaml = r#"
responses:
  200:
    description: ok
  '404':
    description: missing
"#;
        let op: ShimOperation = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<_> = op.responses.keys().cloned().collect();
        assert_eq!(keys, vec!["200", "404"]);
    }

    #[test]
    fn test_ref_or_inline_parameter() {
        let yaml = r#"
- $ref: '#/components/parameters/Limit'
- name: q
  in: query
"#;
        let params: Vec<ShimRefOr<ShimParameter>> = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(&params[0], ShimRefOr::Ref { reference } if reference.ends_with("Limit")));
        assert!(matches!(&params[1], ShimRefOr::Item(p) if p.name == "q"));
    }

    #[test]
    fn test_type_list_skips_null() {
        let schema: ShimSchema = serde_yaml::from_str("type: [\"null\", integer]").unwrap();
        assert_eq!(schema.type_name(), Some("integer"));
    }
}
