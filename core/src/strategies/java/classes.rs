#![deny(missing_docs)]

//! # Java Classes
//!
//! Renders `GeneratedType`s as gson-friendly Java beans.
//!
//! Fields are private and boxed, so an absent JSON value stays `null`. Nested types
//! become `public static` inner classes.

use crate::codegen::models::{Accessor, AccessorKind, ClientModel, GeneratedType, TypeRef};
use crate::strategies::java::types::{java_type, string_literal};

/// Import for the alias annotation.
pub const SERIALIZED_NAME_IMPORT: &str = "com.google.gson.annotations.SerializedName";

/// Renders `ty` as a class. `indent` prefixes every line; inner classes are `static`.
pub fn render_class(ty: &GeneratedType, indent: &str, inner: bool) -> String {
    let mut sections = Vec::new();

    if !ty.fields.is_empty() {
        let mut fields = String::new();
        for field in &ty.fields {
            if let Some(alias) = &field.serialized_alias {
                fields.push_str(&format!(
                    "{}    @SerializedName({})\n",
                    indent,
                    string_literal(alias)
                ));
            }
            fields.push_str(&format!(
                "{}    private {} {};\n",
                indent,
                java_type(&field.ty),
                field.target_identifier
            ));
        }
        // Drop the final newline; sections are joined with blank lines.
        fields.pop();
        sections.push(fields);
    }

    for accessor in &ty.accessors {
        if let Some(field) = ty
            .fields
            .iter()
            .find(|f| f.target_identifier == accessor.field)
        {
            sections.push(render_accessor(accessor, &field.ty, indent));
        }
    }

    let nested_indent = format!("{}    ", indent);
    for nested in &ty.nested_types {
        sections.push(render_class(nested, &nested_indent, true));
    }

    let modifier = if inner { "public static class" } else { "public class" };
    let mut code = format!("{}{} {} {{\n\n", indent, modifier, ty.name);
    for section in sections {
        code.push_str(&section);
        code.push_str("\n\n");
    }
    code.push_str(&format!("{}}}", indent));
    code
}

fn render_accessor(accessor: &Accessor, ty: &TypeRef, indent: &str) -> String {
    let java = java_type(ty);
    let field = &accessor.field;
    match accessor.kind {
        AccessorKind::Getter => format!(
            "{i}    public {t} {n}() {{\n{i}        return this.{f};\n{i}    }}",
            i = indent,
            t = java,
            n = accessor.name,
            f = field
        ),
        AccessorKind::Setter => format!(
            "{i}    public void {n}({t} {f}) {{\n{i}        this.{f} = {f};\n{i}    }}",
            i = indent,
            t = java,
            n = accessor.name,
            f = field
        ),
        AccessorKind::Predicate => format!(
            "{i}    public boolean {n}() {{\n{i}        return this.{f} != null && this.{f};\n{i}    }}",
            i = indent,
            n = accessor.name,
            f = field
        ),
    }
}

/// Whether any field in the tree carries a serialized alias.
pub fn uses_aliases(ty: &GeneratedType) -> bool {
    ty.fields.iter().any(|f| f.serialized_alias.is_some())
        || ty.nested_types.iter().any(uses_aliases)
}

/// Named types referenced by any field in the tree.
pub fn referenced_names(ty: &GeneratedType) -> Vec<&str> {
    let mut names: Vec<&str> = ty.fields.iter().filter_map(|f| f.ty.named()).collect();
    for nested in &ty.nested_types {
        names.extend(referenced_names(nested));
    }
    names
}

/// Which shared namespaces a set of type names needs: (schemas, responses).
pub fn needed_imports<'a>(
    model: &ClientModel,
    names: impl IntoIterator<Item = &'a str>,
) -> (bool, bool) {
    let mut schemas = false;
    let mut responses = false;
    for name in names {
        schemas |= model.schema(name).is_some();
        responses |= model.responses.iter().any(|r| r.name == name);
    }
    (schemas, responses)
}

/// Renders a whole file: package line, imports, then the class.
pub fn render_file(package: &str, imports: &[String], body: &str) -> String {
    let mut code = format!("package {};\n\n", package);
    for import in imports {
        code.push_str(&format!("import {};\n", import));
    }
    if !imports.is_empty() {
        code.push('\n');
    }
    code.push_str(body);
    code.push('\n');
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::emitter::ClassEmitter;
    use crate::codegen::naming::IdentifierNamer;
    use crate::oas::models::{SchemaKind, SchemaNode};
    use crate::strategies::java::JAVA_RESERVED;
    use pretty_assertions::assert_eq;

    fn emit(name: &str, schema: &SchemaNode) -> GeneratedType {
        ClassEmitter::new(IdentifierNamer::new(JAVA_RESERVED))
            .emit(name, schema)
            .unwrap()
    }

    #[test]
    fn test_render_bean_with_alias_and_predicate() {
        let schema = SchemaNode::object([
            ("pet_name", SchemaNode::of_kind(SchemaKind::String)),
            ("class", SchemaNode::of_kind(SchemaKind::Boolean)),
        ]);
        let ty = emit("Pet", &schema);
        let expected = r#"public class Pet {

    @SerializedName("pet_name")
    private String petName;
    @SerializedName("class")
    private Boolean classBoolean;

    public String getPetName() {
        return this.petName;
    }

    public void setPetName(String petName) {
        this.petName = petName;
    }

    public Boolean getClassBoolean() {
        return this.classBoolean;
    }

    public void setClassBoolean(Boolean classBoolean) {
        this.classBoolean = classBoolean;
    }

    public boolean isClassBoolean() {
        return this.classBoolean != null && this.classBoolean;
    }

}"#;
        assert_eq!(render_class(&ty, "", false), expected);
        assert!(uses_aliases(&ty));
    }

    #[test]
    fn test_render_nested_static_class() {
        let schema = SchemaNode::object([(
            "tags",
            SchemaNode::array_of(SchemaNode::object([(
                "id",
                SchemaNode::of_kind(SchemaKind::Integer),
            )])),
        )]);
        let ty = emit("Pet", &schema);
        let code = render_class(&ty, "", false);
        assert!(code.contains("    private Tag[] tags;\n"));
        assert!(code.contains("    public static class Tag {\n\n        private Integer id;"));
        assert!(code.ends_with("        }\n\n    }\n\n}"));
        assert!(!uses_aliases(&ty));
    }

    #[test]
    fn test_alias_is_escaped() {
        let schema = SchemaNode::object([(r#"a"b\c"#, SchemaNode::of_kind(SchemaKind::String))]);
        let code = render_class(&emit("Quoted", &schema), "", false);
        assert!(code.contains(r#"    @SerializedName("a\"b\\c")"#));
    }

    #[test]
    fn test_render_empty_class() {
        let ty = emit("Empty", &SchemaNode::of_kind(SchemaKind::Object));
        assert_eq!(render_class(&ty, "", false), "public class Empty {\n\n}");
    }

    #[test]
    fn test_render_file() {
        let code = render_file(
            "com.example.schemas",
            &[SERIALIZED_NAME_IMPORT.to_string()],
            "public class A {\n\n}",
        );
        assert_eq!(
            code,
            "package com.example.schemas;\n\nimport com.google.gson.annotations.SerializedName;\n\npublic class A {\n\n}\n"
        );
        assert_eq!(
            render_file("p", &[], "class B {}"),
            "package p;\n\nclass B {}\n"
        );
    }
}
