#![deny(missing_docs)]

//! # API Model
//!
//! The immutable, already-parsed view of an API description that generation consumes.
//!
//! Everything here is produced once by the document loader and only read afterwards.
//! Maps are `IndexMap`s so that declaration order survives into the generated code.

use indexmap::IndexMap;
use std::fmt;

/// The whole API description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiModel {
    /// Document metadata.
    pub info: ApiInfo,
    /// Tag names declared at the document root, in declaration order.
    pub tags: Vec<String>,
    /// Path template -> path item, in declaration order.
    pub paths: IndexMap<String, PathItem>,
    /// Named component schemas.
    pub schemas: IndexMap<String, SchemaNode>,
    /// Named component responses.
    pub responses: IndexMap<String, ResponseDef>,
}

/// Title and version of the API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiInfo {
    /// Human readable title, e.g. "Pet Store".
    pub title: String,
    /// Declared API version, if any.
    pub version: Option<String>,
}

/// One path template with its operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// Parameters shared by every operation under this path.
    pub parameters: Vec<Parameter>,
    /// Operations keyed by HTTP method, in declaration order.
    pub operations: IndexMap<HttpMethod, Operation>,
}

/// HTTP methods an operation can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Lower-case method name as it appears in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Parses a path-item key into a method. Non-method keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operation (one method on one path).
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The `operationId`, or a name derived from method and path when missing.
    pub id: String,
    /// Parameters declared on the operation itself (path-level ones live on `PathItem`).
    pub parameters: Vec<Parameter>,
    /// Request body representations, if the operation declares a body.
    pub request_body: Option<Content>,
    /// Responses keyed by status code (`"200"`, `"2XX"`, `"default"`), in declaration order.
    pub responses: IndexMap<String, Option<Content>>,
    /// Tags owning this operation.
    pub tags: Vec<String>,
}

impl Operation {
    /// The content of the first response whose status code starts with `2`.
    pub fn success_content(&self) -> Option<&Content> {
        self.responses
            .iter()
            .find(|(status, _)| status.starts_with('2'))
            .and_then(|(_, content)| content.as_ref())
    }
}

/// Where a parameter travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// `{name}` placeholder in the path template.
    Path,
    /// URL query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

/// An operation or path-level parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Wire name.
    pub name: String,
    /// Location.
    pub location: ParamLocation,
    /// Declared schema, if any.
    pub schema: Option<SchemaNode>,
}

/// The representations a body may be sent or received in.
///
/// Only the three formats the client knows how to encode are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    /// `application/json` (or any `+json` media type).
    pub json: Option<Representation>,
    /// `application/x-www-form-urlencoded`.
    pub form: Option<Representation>,
    /// `application/xml` / `text/xml`.
    pub xml: Option<Representation>,
}

impl Content {
    /// The first present representation, in JSON, form, XML priority order.
    pub fn preferred(&self) -> Option<(BodyFormat, &Representation)> {
        if let Some(json) = &self.json {
            return Some((BodyFormat::Json, json));
        }
        if let Some(form) = &self.form {
            return Some((BodyFormat::Form, form));
        }
        self.xml.as_ref().map(|xml| (BodyFormat::Xml, xml))
    }

    /// Schema of the preferred representation.
    pub fn preferred_schema(&self) -> Option<(BodyFormat, &SchemaNode)> {
        let (format, repr) = self.preferred()?;
        repr.schema.as_ref().map(|schema| (format, schema))
    }
}

/// A single media type entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Representation {
    /// The payload schema, if declared.
    pub schema: Option<SchemaNode>,
}

/// Supported body encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// application/json
    Json,
    /// application/x-www-form-urlencoded
    Form,
    /// application/xml
    Xml,
}

/// A named response from `components/responses`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseDef {
    /// The response body representations, if any.
    pub content: Option<Content>,
}

impl ResponseDef {
    /// Schema of the preferred representation.
    pub fn schema(&self) -> Option<&SchemaNode> {
        self.content
            .as_ref()
            .and_then(Content::preferred_schema)
            .map(|(_, schema)| schema)
    }
}

/// Structural kind of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `type: integer`
    Integer,
    /// `type: number`
    Number,
    /// `type: string`
    String,
    /// `type: boolean`
    Boolean,
    /// `type: array`
    Array,
    /// `type: object` (also anything untyped that is not an array).
    Object,
}

/// Format hints that change the resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaFormat {
    /// `int64`
    Int64,
    /// `float`
    Float,
    /// `uuid`
    Uuid,
    /// Anything else, kept verbatim.
    Other(String),
}

impl SchemaFormat {
    /// Classifies a raw format string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "int64" => SchemaFormat::Int64,
            "float" => SchemaFormat::Float,
            "uuid" => SchemaFormat::Uuid,
            other => SchemaFormat::Other(other.to_string()),
        }
    }
}

/// One data shape from the API description.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Structural kind.
    pub kind: SchemaKind,
    /// Format hint.
    pub format: Option<SchemaFormat>,
    /// Object properties in declaration order.
    pub properties: IndexMap<String, SchemaNode>,
    /// Element schema for arrays.
    pub items: Option<Box<SchemaNode>>,
    /// `$ref` pointer. When present it wins over everything else.
    pub reference: Option<String>,
}

impl SchemaNode {
    /// A bare schema of the given kind.
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            format: None,
            properties: IndexMap::new(),
            items: None,
            reference: None,
        }
    }

    /// A schema that only points at a named component.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Self::of_kind(SchemaKind::Object)
        }
    }

    /// An array of the given element schema.
    pub fn array_of(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_kind(SchemaKind::Array)
        }
    }

    /// An object with the given properties, in order.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            ..Self::of_kind(SchemaKind::Object)
        }
    }

    /// Builder-style format setter.
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// True when this is an object schema with no reference.
    pub fn is_anonymous_object(&self) -> bool {
        self.reference.is_none() && self.kind == SchemaKind::Object
    }
}
