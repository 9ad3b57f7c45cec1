#![deny(missing_docs)]

//! # Java Strategy Module
//!
//! Implementation of `SyntaxStrategy` for Java clients built on the javawebstack
//! HTTP client and gson.
//! Relies on submodules for the individual artifact kinds.

pub mod classes;
pub mod client;
pub mod tags;
pub mod types;

use crate::codegen::models::{ClientModel, GeneratedType, OperationGroup};
use crate::strategies::SyntaxStrategy;
use classes::{needed_imports, referenced_names, render_class, render_file, uses_aliases};

/// Java keywords plus the literal names.
pub const JAVA_RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
];

/// Strategy for generating Java client sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaStrategy;

impl JavaStrategy {
    fn render_data_file(
        &self,
        model: &ClientModel,
        package: &str,
        ty: &GeneratedType,
        allow_schema_import: bool,
    ) -> String {
        let mut imports = Vec::new();
        if allow_schema_import {
            let (schemas, _) = needed_imports(model, referenced_names(ty));
            if schemas {
                imports.push(format!("{}.*", model.schemas_namespace()));
            }
        }
        if uses_aliases(ty) {
            imports.push(classes::SERIALIZED_NAME_IMPORT.to_string());
        }
        render_file(package, &imports, &render_class(ty, "", false))
    }
}

impl SyntaxStrategy for JavaStrategy {
    fn reserved_words(&self) -> &'static [&'static str] {
        JAVA_RESERVED
    }

    fn error_suffix(&self) -> &'static str {
        "Exception"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn render_client(&self, model: &ClientModel) -> String {
        client::render_client(model)
    }

    fn render_error(&self, model: &ClientModel) -> String {
        client::render_error(model)
    }

    fn render_schema(&self, model: &ClientModel, ty: &GeneratedType) -> String {
        // Schemas share a package, no import needed between them.
        self.render_data_file(model, &model.schemas_namespace(), ty, false)
    }

    fn render_response(&self, model: &ClientModel, ty: &GeneratedType) -> String {
        self.render_data_file(model, &model.responses_namespace(), ty, true)
    }

    fn render_group(&self, model: &ClientModel, group: &OperationGroup) -> String {
        tags::render_group(model, group)
    }
}
