#![deny(missing_docs)]

//! # Class Emission
//!
//! Builds `GeneratedType`s from object schemas.
//!
//! Anonymous nested objects are promoted into owned nested types named after the
//! singular form of their property (`categories` -> `Category`). Fields, accessors and
//! nested types all follow property declaration order.

use crate::codegen::models::{
    Accessor, AccessorKind, GeneratedField, GeneratedType, TypeCategory, TypeRef,
};
use crate::codegen::naming::{capitalize, IdentifierNamer, NameTable};
use crate::codegen::resolver::{innermost_anonymous, resolve_type};
use crate::error::AppResult;
use crate::oas::models::SchemaNode;
use tracing::debug;

/// Emits structured types.
#[derive(Debug, Clone, Copy)]
pub struct ClassEmitter<'a> {
    namer: IdentifierNamer<'a>,
}

impl<'a> ClassEmitter<'a> {
    /// Creates an emitter naming identifiers with `namer`.
    pub fn new(namer: IdentifierNamer<'a>) -> Self {
        Self { namer }
    }

    /// Emits `schema` as a top-level type called `type_name`, recursing into anonymous
    /// properties.
    pub fn emit(&self, type_name: &str, schema: &SchemaNode) -> AppResult<GeneratedType> {
        self.emit_within(type_name, schema, &[])
    }

    /// Emits `schema` as a type nested inside `enclosing`, outermost first.
    ///
    /// Promoted types never reuse the name of any enclosing type.
    pub fn emit_within(
        &self,
        type_name: &str,
        schema: &SchemaNode,
        enclosing: &[&str],
    ) -> AppResult<GeneratedType> {
        let mut chain = enclosing.to_vec();
        chain.push(type_name);

        let mut field_names = NameTable::default();
        let mut accessor_names = NameTable::default();
        let mut nested_names = NameTable::with_taken(chain.iter().copied());
        let mut pending: Vec<(String, &SchemaNode)> = Vec::new();

        let mut fields = Vec::with_capacity(schema.properties.len());
        let mut accessors = Vec::new();

        for (property, property_schema) in &schema.properties {
            let (ty, category) = match resolve_type(property_schema)? {
                Some(ty) => {
                    let category = ty.category();
                    (ty, category)
                }
                None => {
                    let (inner, depth) = innermost_anonymous(property_schema);
                    let nested_name = self.namer.promoted_type_name(property, &mut nested_names);
                    pending.push((nested_name.clone(), inner));
                    (
                        TypeRef::Named(nested_name).wrap_in_arrays(depth),
                        TypeCategory::Object,
                    )
                }
            };

            let ident = self.namer.name(property, category, &mut field_names);
            accessors.extend(accessors_for(
                &ident.name,
                ty.is_boolean(),
                &mut accessor_names,
            ));
            fields.push(GeneratedField {
                source_name: property.clone(),
                is_boolean: ty.is_boolean(),
                target_identifier: ident.name,
                serialized_alias: ident.alias,
                ty,
            });
        }

        let nested_types = pending
            .into_iter()
            .map(|(name, nested)| self.emit_within(&name, nested, &chain))
            .collect::<AppResult<Vec<_>>>()?;

        debug!(
            r#type = type_name,
            fields = fields.len(),
            nested = nested_types.len(),
            "emitted type"
        );

        Ok(GeneratedType {
            name: type_name.to_string(),
            fields,
            accessors,
            nested_types,
        })
    }

    /// Resolves `schema`, synthesizing a type named `base_name` when it is anonymous.
    ///
    /// Synthesized types are pushed onto `owner`, the type named last in `enclosing`;
    /// `scope` keeps their names unique there. The returned category is `Object` for
    /// synthesized types, arrays of them included.
    pub fn resolve_or_synthesize(
        &self,
        base_name: &str,
        schema: &SchemaNode,
        scope: &mut NameTable,
        owner: &mut Vec<GeneratedType>,
        enclosing: &[&str],
    ) -> AppResult<(TypeRef, TypeCategory)> {
        if let Some(ty) = resolve_type(schema)? {
            let category = ty.category();
            return Ok((ty, category));
        }
        let (inner, depth) = innermost_anonymous(schema);
        let name = scope.claim(base_name);
        owner.push(self.emit_within(&name, inner, enclosing)?);
        Ok((TypeRef::Named(name).wrap_in_arrays(depth), TypeCategory::Object))
    }
}

/// Getter/setter pair, plus a predicate for booleans. Names are claimed in `scope`.
fn accessors_for(identifier: &str, is_boolean: bool, scope: &mut NameTable) -> Vec<Accessor> {
    let suffix = capitalize(identifier);
    let mut kinds = vec![
        (AccessorKind::Getter, "get"),
        (AccessorKind::Setter, "set"),
    ];
    if is_boolean {
        kinds.push((AccessorKind::Predicate, "is"));
    }
    kinds
        .into_iter()
        .map(|(kind, prefix)| Accessor {
            kind,
            name: scope.claim(&format!("{}{}", prefix, suffix)),
            field: identifier.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::models::Primitive;
    use crate::oas::models::{SchemaFormat, SchemaKind};
    use pretty_assertions::assert_eq;

    const RESERVED: &[&str] = &["class", "default", "public"];

    fn emitter() -> ClassEmitter<'static> {
        ClassEmitter::new(IdentifierNamer::new(RESERVED))
    }

    fn string() -> SchemaNode {
        SchemaNode::of_kind(SchemaKind::String)
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let names = ["zeta", "alpha", "mid", "beta", "omega"];
        let schema = SchemaNode::object(names.iter().map(|n| (*n, string())));
        let ty = emitter().emit("Ordered", &schema).unwrap();
        let emitted: Vec<_> = ty.fields.iter().map(|f| f.source_name.as_str()).collect();
        assert_eq!(emitted, names);

        let reversed = SchemaNode::object(names.iter().rev().map(|n| (*n, string())));
        let ty = emitter().emit("Ordered", &reversed).unwrap();
        let emitted: Vec<_> = ty.fields.iter().map(|f| f.source_name.as_str()).collect();
        assert_eq!(emitted, names.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_reserved_boolean_field() {
        let schema = SchemaNode::object([("class", SchemaNode::of_kind(SchemaKind::Boolean))]);
        let ty = emitter().emit("Flags", &schema).unwrap();
        let field = ty.field("class").unwrap();
        assert_eq!(field.target_identifier, "classBoolean");
        assert_eq!(field.serialized_alias.as_deref(), Some("class"));
        assert!(field.is_boolean);

        let names: Vec<_> = ty
            .accessors_for("classBoolean")
            .map(|a| (a.kind, a.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                (AccessorKind::Getter, "getClassBoolean"),
                (AccessorKind::Setter, "setClassBoolean"),
                (AccessorKind::Predicate, "isClassBoolean"),
            ]
        );
    }

    #[test]
    fn test_non_boolean_fields_have_no_predicate() {
        let schema = SchemaNode::object([("name", string())]);
        let ty = emitter().emit("Named", &schema).unwrap();
        assert_eq!(ty.accessors.len(), 2);
        assert!(ty
            .accessors
            .iter()
            .all(|a| a.kind != AccessorKind::Predicate));
    }

    #[test]
    fn test_anonymous_objects_are_promoted() {
        let inner = || SchemaNode::object([("label", string())]);
        let schema = SchemaNode::object([
            ("categories", SchemaNode::array_of(inner())),
            ("addresses", inner()),
            ("cars", SchemaNode::array_of(inner())),
        ]);
        let ty = emitter().emit("Garage", &schema).unwrap();

        let nested: Vec<_> = ty.nested_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(nested, vec!["Category", "Address", "Car"]);

        assert_eq!(
            ty.field("categories").unwrap().ty,
            TypeRef::Array(Box::new(TypeRef::Named("Category".into())))
        );
        assert_eq!(
            ty.field("addresses").unwrap().ty,
            TypeRef::Named("Address".into())
        );
        assert_eq!(ty.nested("Car").unwrap().fields[0].source_name, "label");
    }

    #[test]
    fn test_promotion_recurses() {
        let schema = SchemaNode::object([(
            "owner",
            SchemaNode::object([(
                "pets",
                SchemaNode::array_of(SchemaNode::object([("name", string())])),
            )]),
        )]);
        let ty = emitter().emit("House", &schema).unwrap();
        let owner = ty.nested("Owner").unwrap();
        let pet = owner.nested("Pet").unwrap();
        assert_eq!(pet.fields[0].target_identifier, "name");
        assert!(pet.nested_types.is_empty());
    }

    #[test]
    fn test_reference_only_property_synthesizes_nothing() {
        let schema = SchemaNode::object([("foo", SchemaNode::reference("#/components/schemas/Foo"))]);
        let ty = emitter().emit("Holder", &schema).unwrap();
        assert!(ty.nested_types.is_empty());
        assert_eq!(ty.field("foo").unwrap().ty, TypeRef::Named("Foo".into()));
    }

    #[test]
    fn test_nested_names_never_shadow_the_owner() {
        let schema = SchemaNode::object([("items", SchemaNode::array_of(SchemaNode::object([("id", string())])))]);
        let ty = emitter().emit("Item", &schema).unwrap();
        assert_eq!(ty.nested_types[0].name, "Item2");
    }

    #[test]
    fn test_reserved_fields_take_category_suffix() {
        let schema = SchemaNode::object([
            ("public", SchemaNode::array_of(SchemaNode::object([("x", string())]))),
            (
                "default",
                SchemaNode::of_kind(SchemaKind::Integer).with_format(SchemaFormat::Int64),
            ),
        ]);
        let ty = emitter().emit("Settings", &schema).unwrap();
        assert_eq!(ty.field("public").unwrap().target_identifier, "publicObject");
        assert_eq!(ty.field("default").unwrap().target_identifier, "defaultLong");
        assert_eq!(
            ty.field("default").unwrap().ty,
            TypeRef::Primitive(Primitive::Long)
        );
    }

    #[test]
    fn test_malformed_reference_aborts() {
        let schema = SchemaNode::object([("bad", SchemaNode::reference("#/components/Foo"))]);
        assert!(emitter().emit("Broken", &schema).is_err());
    }

    #[test]
    fn test_resolve_or_synthesize() {
        let mut scope = NameTable::default();
        let mut owner = Vec::new();
        let anonymous = SchemaNode::array_of(SchemaNode::object([("id", string())]));

        let (ty, category) = emitter()
            .resolve_or_synthesize("ListPetsResponse", &anonymous, &mut scope, &mut owner, &[])
            .unwrap();
        assert_eq!(
            ty,
            TypeRef::Array(Box::new(TypeRef::Named("ListPetsResponse".into())))
        );
        assert_eq!(category, TypeCategory::Object);
        assert_eq!(owner.len(), 1);

        let (named, category) = emitter()
            .resolve_or_synthesize("Unused", &string(), &mut scope, &mut owner, &[])
            .unwrap();
        assert_eq!(named, TypeRef::Primitive(Primitive::String));
        assert_eq!(category, TypeCategory::String);
        assert_eq!(owner.len(), 1);
    }

    #[test]
    fn test_nested_names_avoid_every_enclosing_type() {
        let schema = SchemaNode::object([(
            "items",
            SchemaNode::array_of(SchemaNode::object([(
                "orders",
                SchemaNode::array_of(SchemaNode::object([("id", string())])),
            )])),
        )]);
        let ty = emitter().emit("Order", &schema).unwrap();
        let item = ty.nested("Item").unwrap();
        assert_eq!(item.nested_types[0].name, "Order2");
        assert_eq!(
            item.field("orders").unwrap().ty,
            TypeRef::Array(Box::new(TypeRef::Named("Order2".into())))
        );
    }

    #[test]
    fn test_synthesized_types_avoid_the_enclosing_group() {
        let mut scope = NameTable::with_taken(["PetsTag"]);
        let mut owner = Vec::new();
        let body = SchemaNode::object([("petsTag", SchemaNode::object([("id", string())]))]);
        emitter()
            .resolve_or_synthesize("CreatePetRequest", &body, &mut scope, &mut owner, &["PetsTag"])
            .unwrap();
        assert_eq!(owner[0].nested_types[0].name, "PetsTag2");
    }

    #[test]
    fn test_accessor_names_are_unique_per_type() {
        let schema = SchemaNode::object([("x", string()), ("X", string())]);
        let ty = emitter().emit("Point", &schema).unwrap();
        let names: Vec<_> = ty.accessors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["getX", "setX", "getX2", "setX2"]);
        assert_eq!(ty.accessors[2].field, "X");
    }
}
