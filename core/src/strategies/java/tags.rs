#![deny(missing_docs)]

//! # Java Tag Classes
//!
//! One class per operation group. Each bound operation becomes a method that builds
//! the request on the shared client and decodes the response through `orError`.

use crate::codegen::models::{ClientModel, OperationBinding, OperationGroup, PathSegment};
use crate::strategies::java::classes::{
    needed_imports, referenced_names, render_class, render_file, uses_aliases,
    SERIALIZED_NAME_IMPORT,
};
use crate::strategies::java::client::HTTP_REQUEST_IMPORT;
use crate::strategies::java::types::{java_type, string_literal};

const MAP_IMPORT: &str = "java.util.Map";

/// Renders the class of one operation group.
pub fn render_group(model: &ClientModel, group: &OperationGroup) -> String {
    let client = &model.client.name;

    let mut code = format!("public class {} {{\n\n", group.type_name);
    code.push_str(&format!("    private final {} client;\n\n", client));
    code.push_str(&format!(
        "    public {}({} client) {{\n        this.client = client;\n    }}\n\n",
        group.type_name, client
    ));

    for operation in &group.operations {
        code.push_str(&render_operation(operation, &model.client.error_type));
        code.push_str("\n\n");
    }

    for nested in &group.nested_types {
        code.push_str(&render_class(nested, "    ", true));
        code.push_str("\n\n");
    }
    code.push('}');

    render_file(&model.groups_namespace(), &group_imports(model, group), &code)
}

fn group_imports(model: &ClientModel, group: &OperationGroup) -> Vec<String> {
    let mut names: Vec<&str> = Vec::new();
    for operation in &group.operations {
        names.extend(operation.path_args.iter().filter_map(|a| a.ty.named()));
        names.extend(operation.body.iter().filter_map(|b| b.ty.named()));
        names.extend(operation.returns.iter().filter_map(|r| r.named()));
    }
    for nested in &group.nested_types {
        names.extend(referenced_names(nested));
    }
    let (schemas, responses) = needed_imports(model, names);

    let mut imports = vec![
        HTTP_REQUEST_IMPORT.to_string(),
        format!("{}.*", model.namespace),
    ];
    if schemas {
        imports.push(format!("{}.*", model.schemas_namespace()));
    }
    if responses {
        imports.push(format!("{}.*", model.responses_namespace()));
    }
    if group.operations.iter().any(|o| o.query.is_some()) {
        imports.push(MAP_IMPORT.to_string());
    }
    if group.nested_types.iter().any(uses_aliases) {
        imports.push(SERIALIZED_NAME_IMPORT.to_string());
    }
    imports
}

/// Renders one operation method.
pub fn render_operation(operation: &OperationBinding, error_type: &str) -> String {
    let mut params: Vec<String> = operation
        .path_args
        .iter()
        .map(|a| format!("{} {}", java_type(&a.ty), a.identifier))
        .collect();
    if let Some(query) = &operation.query {
        params.push(format!("Map<String, String> {}", query.identifier));
    }
    if let Some(body) = &operation.body {
        params.push(format!("{} {}", java_type(&body.ty), body.identifier));
    }

    let return_type = operation
        .returns
        .as_ref()
        .map_or_else(|| "void".to_string(), java_type);

    let mut code = format!(
        "    public {} {}({}) throws {} {{\n",
        return_type,
        operation.method_name,
        params.join(", "),
        error_type
    );
    code.push_str(&format!(
        "        HTTPRequest request = client.{}({});\n",
        operation.http_method,
        url_expression(&operation.path)
    ));

    if let Some(query) = &operation.query {
        let q = &query.identifier;
        code.push_str(&format!("        if({} != null) {{\n", q));
        code.push_str(&format!("            for(String key : {}.keySet()) {{\n", q));
        code.push_str(&format!("                request.query(key, {}.get(key));\n", q));
        code.push_str("            }\n");
        code.push_str("        }\n");
    }

    if let Some(body) = &operation.body {
        code.push_str(&format!("        request.jsonBody({});\n", body.identifier));
    }

    match &operation.returns {
        Some(ty) => code.push_str(&format!(
            "        return client.orError(request.execute(), {}.class);\n",
            java_type(ty)
        )),
        None => code.push_str("        client.orError(request.execute(), null);\n"),
    }
    code.push_str("    }");
    code
}

/// String concatenation building the request path.
pub fn url_expression(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return string_literal("");
    }
    path.iter()
        .map(|segment| match segment {
            PathSegment::Literal(text) => string_literal(text),
            PathSegment::Argument(identifier) => identifier.clone(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
