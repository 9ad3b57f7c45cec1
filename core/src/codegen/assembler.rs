#![deny(missing_docs)]

//! # Client Assembly
//!
//! Builds the complete `ClientModel` for a document: one type per named schema, one per
//! named object response, one operation group per tag, the error type and the root client.
//!
//! Tag order is: tags declared at the document root, then tags only mentioned by
//! operations (first seen first), then `default` for untagged operations.

use crate::codegen::binder::{GroupScope, OperationBinder};
use crate::codegen::emitter::ClassEmitter;
use crate::codegen::models::{
    ClientFacade, ClientModel, ErrorType, GeneratedType, GroupHandle, OperationBinding,
    OperationGroup, TypeCategory,
};
use crate::codegen::naming::{IdentifierNamer, NameTable};
use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::oas::models::ApiModel;
use crate::strategies::SyntaxStrategy;
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Tag assigned to operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// Assembles the client tree for `api`.
///
/// Any malformed reference anywhere in the document fails the whole run.
pub fn assemble(
    api: &ApiModel,
    config: &GeneratorConfig,
    strategy: &impl SyntaxStrategy,
) -> AppResult<ClientModel> {
    let namer = IdentifierNamer::new(strategy.reserved_words());
    let emitter = ClassEmitter::new(namer);
    let binder = OperationBinder::new(namer);

    let api_name = config.resolve_api_name(&api.info);

    let schemas = api
        .schemas
        .iter()
        .map(|(name, schema)| emitter.emit(name, schema))
        .collect::<AppResult<Vec<_>>>()?;

    let mut responses = Vec::new();
    for (name, response) in &api.responses {
        match response.schema() {
            Some(schema) if schema.is_anonymous_object() => {
                responses.push(emitter.emit(name, schema)?);
            }
            _ => debug!(response = %name, "skipping response without an object body"),
        }
    }

    let groups = assemble_groups(api, strategy, namer, binder)?;

    let client = ClientFacade {
        name: format!("{}{}", api_name, strategy.client_suffix()),
        error_type: format!("{}{}", api_name, strategy.error_suffix()),
        groups: groups
            .iter()
            .map(|g| GroupHandle {
                type_name: g.type_name.clone(),
                accessor: g.accessor.clone(),
            })
            .collect(),
        snippets: config.snippets.clone(),
    };
    let error = ErrorType {
        name: client.error_type.clone(),
    };

    Ok(ClientModel {
        api_name,
        namespace: config.namespace.clone(),
        client,
        error,
        schemas,
        responses,
        groups,
    })
}

/// Tags in group order.
pub fn collect_tags(api: &ApiModel) -> IndexSet<String> {
    let mut tags: IndexSet<String> = api.tags.iter().cloned().collect();
    let mut untagged = false;
    for item in api.paths.values() {
        for operation in item.operations.values() {
            if operation.tags.is_empty() {
                untagged = true;
            }
            tags.extend(operation.tags.iter().cloned());
        }
    }
    if untagged {
        tags.insert(DEFAULT_TAG.to_string());
    }
    tags
}

struct PendingGroup {
    type_name: String,
    accessor: String,
    scope: GroupScope,
    operations: Vec<OperationBinding>,
}

fn assemble_groups(
    api: &ApiModel,
    strategy: &impl SyntaxStrategy,
    namer: IdentifierNamer<'_>,
    binder: OperationBinder<'_>,
) -> AppResult<Vec<OperationGroup>> {
    let mut type_names = NameTable::default();
    let mut accessors = NameTable::default();

    let mut pending: IndexMap<String, PendingGroup> = IndexMap::new();
    for tag in collect_tags(api) {
        let type_name = type_names.claim(&format!(
            "{}{}",
            tag.to_upper_camel_case(),
            strategy.group_suffix()
        ));
        let accessor = namer
            .name(&tag.to_lower_camel_case(), TypeCategory::Object, &mut accessors)
            .name;
        let scope = GroupScope::for_group(&type_name);
        pending.insert(
            tag,
            PendingGroup {
                type_name,
                accessor,
                scope,
                operations: Vec::new(),
            },
        );
    }

    let default_tags = [DEFAULT_TAG.to_string()];
    for (template, item) in &api.paths {
        for (method, operation) in &item.operations {
            let tags: IndexSet<&String> = if operation.tags.is_empty() {
                default_tags.iter().collect()
            } else {
                operation.tags.iter().collect()
            };
            for tag in tags {
                if let Some(group) = pending.get_mut(tag.as_str()) {
                    let binding = binder.bind(
                        *method,
                        template,
                        &item.parameters,
                        operation,
                        &mut group.scope,
                    )?;
                    group.operations.push(binding);
                }
            }
        }
    }

    Ok(pending
        .into_iter()
        .map(|(tag, group)| {
            debug!(
                tag = %tag,
                r#type = %group.type_name,
                operations = group.operations.len(),
                "assembled operation group"
            );
            OperationGroup {
                tag,
                type_name: group.type_name,
                accessor: group.accessor,
                operations: group.operations,
                nested_types: group.scope.nested_types,
            }
        })
        .collect())
}

/// Number of generated types, nested ones included.
pub fn count_types(model: &ClientModel) -> usize {
    fn count(ty: &GeneratedType) -> usize {
        1 + ty.nested_types.iter().map(count).sum::<usize>()
    }
    model
        .schemas
        .iter()
        .chain(&model.responses)
        .chain(model.groups.iter().flat_map(|g| &g.nested_types))
        .map(count)
        .sum()
}
