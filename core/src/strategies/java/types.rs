#![deny(missing_docs)]

//! # Java Types
//!
//! Spelling of `TypeRef`s and literals in Java source.

use crate::codegen::models::{Primitive, TypeRef};

/// Placeholder for JSON of unknown shape.
pub const UNTYPED: &str = "com.google.gson.JsonObject";

/// The Java spelling of a type reference.
pub fn java_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::Primitive(p) => primitive(*p).to_string(),
        TypeRef::Untyped => UNTYPED.to_string(),
        TypeRef::Array(inner) => format!("{}[]", java_type(inner)),
    }
}

fn primitive(p: Primitive) -> &'static str {
    match p {
        Primitive::Int => "Integer",
        Primitive::Long => "Long",
        Primitive::Float => "Float",
        Primitive::Double => "Double",
        Primitive::String => "String",
        Primitive::Uuid => "java.util.UUID",
        Primitive::Boolean => "Boolean",
    }
}

/// A double-quoted Java string literal.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_types() {
        assert_eq!(java_type(&TypeRef::Primitive(Primitive::Int)), "Integer");
        assert_eq!(
            java_type(&TypeRef::Primitive(Primitive::Uuid)),
            "java.util.UUID"
        );
        assert_eq!(
            java_type(&TypeRef::Array(Box::new(TypeRef::Untyped))),
            "com.google.gson.JsonObject[]"
        );
        assert_eq!(
            java_type(&TypeRef::Named("Pet".into()).wrap_in_arrays(2)),
            "Pet[][]"
        );
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("/pets"), "\"/pets\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
