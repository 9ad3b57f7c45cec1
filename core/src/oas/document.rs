#![deny(missing_docs)]

//! # Document Loading
//!
//! Reads an OpenAPI description (YAML or JSON) into the immutable `ApiModel`.
//!
//! Lowering rules:
//! - `$ref` parameters and request bodies are inlined from `components`.
//! - A response `$ref` becomes a by-name reference when the target response carries an
//!   object schema (a type is generated for it), otherwise the target's content is inlined.
//! - Untyped schemas are arrays when they declare `items`, objects otherwise.
//! - Operations without `operationId` get a name derived from method and path.

use crate::error::{AppError, AppResult};
use crate::oas::models::{
    ApiInfo, ApiModel, Content, HttpMethod, Operation, ParamLocation, Parameter, PathItem,
    Representation, ResponseDef, SchemaFormat, SchemaKind, SchemaNode,
};
use crate::oas::ref_utils::parse_component_ref;
use crate::oas::shims::{
    scalar_to_string, ShimComponents, ShimMediaType, ShimOpenApi, ShimOperation, ShimParameter,
    ShimRefOr, ShimRequestBody, ShimResponse, ShimSchema,
};
use heck::ToLowerCamelCase;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Parses raw document text into an `ApiModel`.
pub fn parse_api_document(text: &str) -> AppResult<ApiModel> {
    let shim: ShimOpenApi = serde_yaml::from_str(text)
        .map_err(|e| AppError::Parse(format!("Failed to parse API description: {}", e)))?;
    lower_document(&shim)
}

/// Reads and parses a document from disk.
pub fn load_api_document(path: &Path) -> AppResult<ApiModel> {
    let text = fs::read_to_string(path)?;
    parse_api_document(&text)
}

fn lower_document(shim: &ShimOpenApi) -> AppResult<ApiModel> {
    let empty = ShimComponents::default();
    let components = shim.components.as_ref().unwrap_or(&empty);

    let info = shim
        .info
        .as_ref()
        .map(|info| ApiInfo {
            title: info.title.clone(),
            version: info.version.as_ref().and_then(scalar_to_string),
        })
        .unwrap_or_default();

    let mut paths = IndexMap::new();
    for (template, item) in &shim.paths {
        let parameters = lower_parameters(&item.parameters, components)?;
        let mut operations = IndexMap::new();
        for (key, op) in &item.operations {
            let Some(method) = HttpMethod::parse(key) else {
                continue;
            };
            operations.insert(method, lower_operation(method, template, op, components)?);
        }
        paths.insert(
            template.clone(),
            PathItem {
                parameters,
                operations,
            },
        );
    }

    let schemas = components
        .schemas
        .iter()
        .map(|(name, schema)| (name.clone(), lower_schema(schema)))
        .collect();

    let responses = components
        .responses
        .iter()
        .map(|(name, response)| {
            (
                name.clone(),
                ResponseDef {
                    content: response.content.as_ref().map(lower_content),
                },
            )
        })
        .collect();

    Ok(ApiModel {
        info,
        tags: shim.tags.iter().map(|t| t.name.clone()).collect(),
        paths,
        schemas,
        responses,
    })
}

fn lower_operation(
    method: HttpMethod,
    template: &str,
    op: &ShimOperation,
    components: &ShimComponents,
) -> AppResult<Operation> {
    let id = match &op.operation_id {
        Some(id) if !id.is_empty() => id.clone(),
        _ => derive_operation_id(method, template),
    };

    let request_body = match &op.request_body {
        None => None,
        Some(ShimRefOr::Item(body)) => Some(lower_request_body(body)),
        Some(ShimRefOr::Ref { reference }) => {
            let body = lookup(reference, "requestBodies", &components.request_bodies)?;
            Some(lower_request_body(body))
        }
    };

    let mut responses = IndexMap::new();
    for (status, response) in &op.responses {
        let content = match response {
            ShimRefOr::Item(r) => r.content.as_ref().map(lower_content),
            ShimRefOr::Ref { reference } => {
                let target = lookup(reference, "responses", &components.responses)?;
                lower_response_ref(reference, target)
            }
        };
        responses.insert(status.clone(), content);
    }

    Ok(Operation {
        id,
        parameters: lower_parameters(&op.parameters, components)?,
        request_body,
        responses,
        tags: op.tags.clone(),
    })
}

/// Derives a method name when `operationId` is missing.
///
/// e.g. `GET /users/{id}` -> `getUsersId`
pub fn derive_operation_id(method: HttpMethod, template: &str) -> String {
    let clean_path = template.replace(['{', '}'], "");
    format!("{} {}", method.as_str(), clean_path).to_lower_camel_case()
}

fn lower_response_ref(reference: &str, target: &ShimResponse) -> Option<Content> {
    let content = target.content.as_ref().map(lower_content)?;
    let points_at_object = content
        .preferred_schema()
        .is_some_and(|(_, schema)| schema.is_anonymous_object());

    if points_at_object {
        Some(Content {
            json: Some(Representation {
                schema: Some(SchemaNode::reference(reference)),
            }),
            ..Content::default()
        })
    } else {
        Some(content)
    }
}

fn lower_parameters(
    params: &[ShimRefOr<ShimParameter>],
    components: &ShimComponents,
) -> AppResult<Vec<Parameter>> {
    params
        .iter()
        .map(|param| {
            let param = match param {
                ShimRefOr::Item(p) => p,
                ShimRefOr::Ref { reference } => {
                    lookup(reference, "parameters", &components.parameters)?
                }
            };
            Ok(lower_parameter(param))
        })
        .collect()
}

fn lower_parameter(param: &ShimParameter) -> Parameter {
    let location = match param.parameter_in.as_str() {
        "path" => ParamLocation::Path,
        "header" => ParamLocation::Header,
        "cookie" => ParamLocation::Cookie,
        _ => ParamLocation::Query, // Fallback
    };
    Parameter {
        name: param.name.clone(),
        location,
        schema: param.schema.as_ref().map(lower_schema),
    }
}

fn lower_request_body(body: &ShimRequestBody) -> Content {
    lower_content(&body.content)
}

fn lower_content(media: &IndexMap<String, ShimMediaType>) -> Content {
    let mut content = Content::default();
    for (media_type, entry) in media {
        let slot = match media_kind(media_type) {
            Some(MediaKind::Json) => &mut content.json,
            Some(MediaKind::Form) => &mut content.form,
            Some(MediaKind::Xml) => &mut content.xml,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(Representation {
                schema: entry.schema.as_ref().map(lower_schema),
            });
        }
    }
    content
}

enum MediaKind {
    Json,
    Form,
    Xml,
}

fn media_kind(media_type: &str) -> Option<MediaKind> {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "application/json" => Some(MediaKind::Json),
        "application/x-www-form-urlencoded" => Some(MediaKind::Form),
        "application/xml" | "text/xml" => Some(MediaKind::Xml),
        other if other.ends_with("+json") => Some(MediaKind::Json),
        other if other.ends_with("+xml") => Some(MediaKind::Xml),
        _ => None,
    }
}

fn lower_schema(schema: &ShimSchema) -> SchemaNode {
    if let Some(reference) = &schema.reference {
        return SchemaNode::reference(reference.clone());
    }

    let kind = match schema.type_name() {
        Some("integer") => SchemaKind::Integer,
        Some("number") => SchemaKind::Number,
        Some("string") => SchemaKind::String,
        Some("boolean") => SchemaKind::Boolean,
        Some("array") => SchemaKind::Array,
        Some(_) => SchemaKind::Object,
        None if schema.items.is_some() => SchemaKind::Array,
        None => SchemaKind::Object,
    };

    SchemaNode {
        kind,
        format: schema.format.as_deref().map(SchemaFormat::parse),
        properties: schema
            .properties
            .iter()
            .map(|(name, prop)| (name.clone(), lower_schema(prop)))
            .collect(),
        items: schema
            .items
            .as_deref()
            .map(|items| Box::new(lower_schema(items))),
        reference: None,
    }
}

/// Resolves a component `$ref` within one `components` section.
fn lookup<'a, T>(
    reference: &str,
    section: &str,
    entries: &'a IndexMap<String, T>,
) -> AppResult<&'a T> {
    let target = parse_component_ref(reference)?;
    if target.kind != section {
        return Err(AppError::Parse(format!(
            "Reference '{}' must point into components/{}",
            reference, section
        )));
    }
    entries.get(target.name).ok_or_else(|| {
        AppError::Parse(format!("Unresolvable reference '{}'", reference))
    })
}
