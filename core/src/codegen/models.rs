#![deny(missing_docs)]

//! # Generated Client Tree
//!
//! Target-independent description of everything a run produces: data types, operation
//! bindings, operation groups and the root client. Syntax strategies render this tree;
//! they never make naming or typing decisions of their own.

use crate::oas::models::{BodyFormat, HttpMethod};

/// Primitive aliases a schema can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Plain string.
    String,
    /// UUID.
    Uuid,
    /// Boolean.
    Boolean,
}

/// A reference to a type in the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A generated type, by name. Self-references stay by-name links.
    Named(String),
    /// A primitive alias.
    Primitive(Primitive),
    /// Placeholder for JSON of unknown shape.
    Untyped,
    /// Array of the inner type.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Wraps `self` in `depth` array levels.
    pub fn wrap_in_arrays(self, depth: usize) -> TypeRef {
        (0..depth).fold(self, |inner, _| TypeRef::Array(Box::new(inner)))
    }

    /// The category used for reserved-word suffixes.
    pub fn category(&self) -> TypeCategory {
        match self {
            TypeRef::Primitive(Primitive::Int) => TypeCategory::Int,
            TypeRef::Primitive(Primitive::Long) => TypeCategory::Long,
            TypeRef::Primitive(Primitive::Float) => TypeCategory::Float,
            TypeRef::Primitive(Primitive::Double) => TypeCategory::Double,
            TypeRef::Primitive(Primitive::String) => TypeCategory::String,
            TypeRef::Primitive(Primitive::Uuid) => TypeCategory::Uuid,
            TypeRef::Primitive(Primitive::Boolean) => TypeCategory::Boolean,
            TypeRef::Array(_) => TypeCategory::Array,
            TypeRef::Named(_) | TypeRef::Untyped => TypeCategory::Object,
        }
    }

    /// True for the boolean primitive.
    pub fn is_boolean(&self) -> bool {
        matches!(self, TypeRef::Primitive(Primitive::Boolean))
    }

    /// The named type at the bottom of any array levels.
    pub fn named(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            TypeRef::Array(inner) => inner.named(),
            _ => None,
        }
    }
}

/// Closed set of type categories. Anything outside collapses to `Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Single precision.
    Float,
    /// Double precision.
    Double,
    /// String.
    String,
    /// UUID.
    Uuid,
    /// Boolean.
    Boolean,
    /// Any array.
    Array,
    /// Everything else.
    Object,
}

impl TypeCategory {
    /// Suffix appended to identifiers that collide with a reserved word.
    pub fn suffix(&self) -> &'static str {
        match self {
            TypeCategory::Int => "Int",
            TypeCategory::Long => "Long",
            TypeCategory::Float => "Float",
            TypeCategory::Double => "Double",
            TypeCategory::String => "String",
            TypeCategory::Uuid => "Uuid",
            TypeCategory::Boolean => "Boolean",
            TypeCategory::Array => "Array",
            TypeCategory::Object => "Object",
        }
    }
}

/// One field of a generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedField {
    /// Wire name.
    pub source_name: String,
    /// Identifier used in generated code.
    pub target_identifier: String,
    /// Wire name kept for (de)serialization when the identifier differs from it.
    pub serialized_alias: Option<String>,
    /// Field type.
    pub ty: TypeRef,
    /// Whether a predicate accessor is emitted.
    pub is_boolean: bool,
}

/// Accessor flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// Returns the field value.
    Getter,
    /// Replaces the field value.
    Setter,
    /// "is set and true"; an unset value reads as false.
    Predicate,
}

/// An accessor method over one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Flavour.
    pub kind: AccessorKind,
    /// Method name, e.g. `getName`.
    pub name: String,
    /// Target identifier of the field it reads or writes.
    pub field: String,
}

/// A structured data type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedType {
    /// Type name, unique within its namespace (or enclosing type).
    pub name: String,
    /// Fields in source declaration order.
    pub fields: Vec<GeneratedField>,
    /// Accessors, grouped per field in field order.
    pub accessors: Vec<Accessor>,
    /// Owned nested types promoted from anonymous objects.
    pub nested_types: Vec<GeneratedType>,
}

impl GeneratedType {
    /// Looks up a field by wire name.
    pub fn field(&self, source_name: &str) -> Option<&GeneratedField> {
        self.fields.iter().find(|f| f.source_name == source_name)
    }

    /// Looks up a nested type by name.
    pub fn nested(&self, name: &str) -> Option<&GeneratedType> {
        self.nested_types.iter().find(|t| t.name == name)
    }

    /// Accessors generated for the given field identifier.
    pub fn accessors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Accessor> + 'a {
        self.accessors.iter().filter(move |a| a.field == field)
    }
}

/// A piece of a bound path: literal text or a reference to a path argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Literal text, copied verbatim.
    Literal(String),
    /// The value of the path argument with this identifier.
    Argument(String),
}

/// A path argument.
#[derive(Debug, Clone, PartialEq)]
pub struct PathArgument {
    /// Identifier in the generated signature.
    pub identifier: String,
    /// Declared parameter name.
    pub source_name: String,
    /// Argument type.
    pub ty: TypeRef,
}

/// The single optional string-to-string map carrying all query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgument {
    /// Identifier in the generated signature.
    pub identifier: String,
    /// Names of the declared query parameters folded into the map.
    pub parameter_names: Vec<String>,
}

/// The request body argument.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyArgument {
    /// Identifier in the generated signature.
    pub identifier: String,
    /// Body type.
    pub ty: TypeRef,
    /// Encoding used on the wire.
    pub format: BodyFormat,
}

/// One operation bound to a callable method.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationBinding {
    /// Operation id as declared (or derived).
    pub operation_id: String,
    /// Method identifier.
    pub method_name: String,
    /// HTTP method.
    pub http_method: HttpMethod,
    /// The raw path template.
    pub path_template: String,
    /// The template split into literals and argument references.
    pub path: Vec<PathSegment>,
    /// Path arguments, path-level parameters first.
    pub path_args: Vec<PathArgument>,
    /// Query map argument, when the operation declares query parameters.
    pub query: Option<QueryArgument>,
    /// Body argument.
    pub body: Option<BodyArgument>,
    /// Decoded success type; `None` means no value is returned.
    pub returns: Option<TypeRef>,
}

/// The operations of one tag.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationGroup {
    /// Tag name.
    pub tag: String,
    /// Group type name, e.g. `PetsTag`.
    pub type_name: String,
    /// Accessor on the root client, e.g. `pets`.
    pub accessor: String,
    /// Bound operations in document order.
    pub operations: Vec<OperationBinding>,
    /// Types synthesized for anonymous bodies and responses.
    pub nested_types: Vec<GeneratedType>,
}

/// Handle of a group as exposed from the root client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHandle {
    /// Group type name.
    pub type_name: String,
    /// Accessor name.
    pub accessor: String,
}

/// The root client facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFacade {
    /// Client type name.
    pub name: String,
    /// Error type every operation fails with.
    pub error_type: String,
    /// One handle per operation group.
    pub groups: Vec<GroupHandle>,
    /// Verbatim fragments injected into the client body, in insertion order.
    pub snippets: Vec<String>,
}

/// The shared operation error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorType {
    /// Type name.
    pub name: String,
}

/// Everything generated in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientModel {
    /// API name all root artifacts derive from.
    pub api_name: String,
    /// Root namespace.
    pub namespace: String,
    /// Root client.
    pub client: ClientFacade,
    /// Error type.
    pub error: ErrorType,
    /// One type per named schema.
    pub schemas: Vec<GeneratedType>,
    /// One type per named response with an object body.
    pub responses: Vec<GeneratedType>,
    /// One group per tag.
    pub groups: Vec<OperationGroup>,
}

impl ClientModel {
    /// Namespace of named schema types.
    pub fn schemas_namespace(&self) -> String {
        format!("{}.schemas", self.namespace)
    }

    /// Namespace of named response types.
    pub fn responses_namespace(&self) -> String {
        format!("{}.responses", self.namespace)
    }

    /// Namespace of operation groups.
    pub fn groups_namespace(&self) -> String {
        format!("{}.tags", self.namespace)
    }

    /// Looks up a group by tag.
    pub fn group(&self, tag: &str) -> Option<&OperationGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    /// Looks up a named schema type.
    pub fn schema(&self, name: &str) -> Option<&GeneratedType> {
        self.schemas.iter().find(|t| t.name == name)
    }
}
