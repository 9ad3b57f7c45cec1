#![deny(missing_docs)]

//! # Type Resolution
//!
//! Maps a schema node to a `TypeRef`, or to `None` when the schema is an anonymous
//! object that the caller has to promote into a named type.
//!
//! Rules, first match wins:
//! - `$ref` -> the component name (final pointer segment)
//! - `integer` -> `Long` for `int64`, else `Int`
//! - `number` -> `Float` for `float`, else `Double`
//! - `string` -> `Uuid` for `uuid`, else `String`
//! - `boolean` -> `Boolean`
//! - `array` -> array of the element type (untyped placeholder when `items` is missing)
//! - `object` -> `None`

use crate::codegen::models::{Primitive, TypeRef};
use crate::error::ResolutionError;
use crate::oas::models::{SchemaFormat, SchemaKind, SchemaNode};
use crate::oas::ref_utils::component_name;

/// Resolves a schema node.
///
/// Arrays whose elements need synthesis need synthesis themselves, so `None` is
/// returned for them as well.
pub fn resolve_type(schema: &SchemaNode) -> Result<Option<TypeRef>, ResolutionError> {
    if let Some(pointer) = &schema.reference {
        return Ok(Some(TypeRef::Named(component_name(pointer)?.to_string())));
    }

    let resolved = match schema.kind {
        SchemaKind::Integer => match schema.format {
            Some(SchemaFormat::Int64) => TypeRef::Primitive(Primitive::Long),
            _ => TypeRef::Primitive(Primitive::Int),
        },
        SchemaKind::Number => match schema.format {
            Some(SchemaFormat::Float) => TypeRef::Primitive(Primitive::Float),
            _ => TypeRef::Primitive(Primitive::Double),
        },
        SchemaKind::String => match schema.format {
            Some(SchemaFormat::Uuid) => TypeRef::Primitive(Primitive::Uuid),
            _ => TypeRef::Primitive(Primitive::String),
        },
        SchemaKind::Boolean => TypeRef::Primitive(Primitive::Boolean),
        SchemaKind::Array => {
            let element = match schema.items.as_deref() {
                None => TypeRef::Untyped,
                Some(items) => match resolve_type(items)? {
                    Some(element) => element,
                    None => return Ok(None),
                },
            };
            TypeRef::Array(Box::new(element))
        }
        SchemaKind::Object => return Ok(None),
    };

    Ok(Some(resolved))
}

/// Resolves a schema, falling back to a plain string when it needs synthesis.
pub fn resolve_or_string(schema: Option<&SchemaNode>) -> Result<TypeRef, ResolutionError> {
    let resolved = match schema {
        Some(schema) => resolve_type(schema)?,
        None => None,
    };
    Ok(resolved.unwrap_or(TypeRef::Primitive(Primitive::String)))
}

/// Walks down the array levels of a schema that needs synthesis.
///
/// Returns the innermost anonymous object and the number of array levels above it.
pub fn innermost_anonymous(schema: &SchemaNode) -> (&SchemaNode, usize) {
    let mut node = schema;
    let mut depth = 0;
    while node.reference.is_none() && node.kind == SchemaKind::Array {
        match node.items.as_deref() {
            Some(items) => {
                node = items;
                depth += 1;
            }
            None => break,
        }
    }
    (node, depth)
}
