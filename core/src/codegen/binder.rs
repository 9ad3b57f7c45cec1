#![deny(missing_docs)]

//! # Operation Binding
//!
//! Turns one operation into a callable method description.
//!
//! The generated signature is fixed: path arguments in declaration order, then one
//! optional query map, then the body. Header and cookie parameters have no slot in it
//! and are skipped.

use crate::codegen::emitter::ClassEmitter;
use crate::codegen::models::{
    BodyArgument, GeneratedType, OperationBinding, PathArgument, PathSegment, QueryArgument,
    TypeCategory,
};
use crate::codegen::naming::{capitalize, sanitize, IdentifierNamer, NameTable};
use crate::codegen::resolver::resolve_or_string;
use crate::error::AppResult;
use crate::oas::models::{Content, HttpMethod, Operation, ParamLocation, Parameter};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Identifier of the collapsed query map argument.
const QUERY_ARGUMENT: &str = "queryParams";

/// Identifier of the body argument.
const BODY_ARGUMENT: &str = "body";

/// Names and synthesized types shared by every operation of one group.
#[derive(Debug, Default)]
pub struct GroupScope {
    group_name: String,
    method_names: NameTable,
    type_names: NameTable,
    /// Types synthesized for anonymous bodies and responses, in binding order.
    pub nested_types: Vec<GeneratedType>,
}

impl GroupScope {
    /// A scope whose synthesized types may not take the group's own type name.
    pub fn for_group(type_name: &str) -> Self {
        Self {
            group_name: type_name.to_string(),
            type_names: NameTable::with_taken([type_name]),
            ..Self::default()
        }
    }
}

/// Binds operations.
#[derive(Debug, Clone, Copy)]
pub struct OperationBinder<'a> {
    namer: IdentifierNamer<'a>,
    emitter: ClassEmitter<'a>,
}

impl<'a> OperationBinder<'a> {
    /// Creates a binder naming identifiers with `namer`.
    pub fn new(namer: IdentifierNamer<'a>) -> Self {
        Self {
            namer,
            emitter: ClassEmitter::new(namer),
        }
    }

    /// Binds `operation`, found under `path_template` with the given path-level parameters.
    ///
    /// Path-level parameters come first and are not deduplicated against the
    /// operation's own.
    pub fn bind(
        &self,
        http_method: HttpMethod,
        path_template: &str,
        path_parameters: &[Parameter],
        operation: &Operation,
        scope: &mut GroupScope,
    ) -> AppResult<OperationBinding> {
        let parameters: Vec<&Parameter> = path_parameters
            .iter()
            .chain(operation.parameters.iter())
            .collect();
        let mut arguments = NameTable::default();

        let mut path_args = Vec::new();
        for param in parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
        {
            let ty = resolve_or_string(param.schema.as_ref())?;
            let ident = self.namer.name(&param.name, ty.category(), &mut arguments);
            path_args.push(PathArgument {
                identifier: ident.name,
                source_name: param.name.clone(),
                ty,
            });
        }

        let query_names: Vec<String> = parameters
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
            .map(|p| p.name.clone())
            .collect();
        let query = if query_names.is_empty() {
            None
        } else {
            let ident = self
                .namer
                .name(QUERY_ARGUMENT, TypeCategory::Object, &mut arguments);
            Some(QueryArgument {
                identifier: ident.name,
                parameter_names: query_names,
            })
        };

        let base_name = capitalize(&sanitize(&operation.id));
        let enclosing = [scope.group_name.as_str()];

        let body = match operation
            .request_body
            .as_ref()
            .and_then(Content::preferred_schema)
        {
            Some((format, schema)) => {
                let (ty, category) = self.emitter.resolve_or_synthesize(
                    &format!("{}Request", base_name),
                    schema,
                    &mut scope.type_names,
                    &mut scope.nested_types,
                    &enclosing,
                )?;
                let ident = self.namer.name(BODY_ARGUMENT, category, &mut arguments);
                Some(BodyArgument {
                    identifier: ident.name,
                    ty,
                    format,
                })
            }
            None => None,
        };

        let (returns, category) = match operation
            .success_content()
            .and_then(Content::preferred_schema)
        {
            Some((_, schema)) => {
                let (ty, category) = self.emitter.resolve_or_synthesize(
                    &format!("{}Response", base_name),
                    schema,
                    &mut scope.type_names,
                    &mut scope.nested_types,
                    &enclosing,
                )?;
                (Some(ty), category)
            }
            None => (None, TypeCategory::Object),
        };

        let method_name = self
            .namer
            .name(&operation.id, category, &mut scope.method_names)
            .name;

        let path = split_path(path_template, &path_args);

        debug!(
            operation = %operation.id,
            method = %http_method,
            path = path_template,
            path_args = path_args.len(),
            "bound operation"
        );

        Ok(OperationBinding {
            operation_id: operation.id.clone(),
            method_name,
            http_method,
            path_template: path_template.to_string(),
            path,
            path_args,
            query,
            body,
            returns,
        })
    }
}

/// Splits a path template into literals and argument references.
///
/// A `{token}` refers to the first path argument declared with that name. Tokens
/// without a matching argument stay in the literal text.
pub fn split_path(template: &str, path_args: &[PathArgument]) -> Vec<PathSegment> {
    static PATH_TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = PATH_TOKEN_RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"));

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(template) {
        push_literal(&mut segments, &template[last..m.start()]);
        let token = &m.as_str()[1..m.as_str().len() - 1];
        match path_args.iter().find(|arg| arg.source_name == token) {
            Some(arg) => segments.push(PathSegment::Argument(arg.identifier.clone())),
            None => push_literal(&mut segments, m.as_str()),
        }
        last = m.end();
    }
    push_literal(&mut segments, &template[last..]);
    segments
}

fn push_literal(segments: &mut Vec<PathSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(PathSegment::Literal(previous)) = segments.last_mut() {
        previous.push_str(text);
    } else {
        segments.push(PathSegment::Literal(text.to_string()));
    }
}
