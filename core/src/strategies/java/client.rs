#![deny(missing_docs)]

//! # Java Client & Exception
//!
//! The root client extends the javawebstack `HTTPClient`, owns one instance of every
//! tag class and funnels each response through `orError`.

use crate::codegen::models::ClientModel;
use crate::strategies::java::classes::render_file;

/// javawebstack HTTP client base class.
pub const HTTP_CLIENT_IMPORT: &str = "org.javawebstack.httpclient.HTTPClient";

/// javawebstack request type.
pub const HTTP_REQUEST_IMPORT: &str = "org.javawebstack.httpclient.HTTPRequest";

/// Renders the root client class.
pub fn render_client(model: &ClientModel) -> String {
    let client = &model.client;
    let error = &client.error_type;

    let mut imports = vec![
        HTTP_CLIENT_IMPORT.to_string(),
        HTTP_REQUEST_IMPORT.to_string(),
    ];
    if !client.groups.is_empty() {
        imports.push(format!("{}.*", model.groups_namespace()));
    }

    let mut code = format!("public class {} extends HTTPClient {{\n\n", client.name);

    if !client.groups.is_empty() {
        for group in &client.groups {
            code.push_str(&format!(
                "    private final {} {};\n",
                group.type_name, group.accessor
            ));
        }
        code.push('\n');
    }

    code.push_str(&format!("    public {}() {{\n", client.name));
    for group in &client.groups {
        code.push_str(&format!(
            "        this.{} = new {}(this);\n",
            group.accessor, group.type_name
        ));
    }
    code.push_str("    }\n\n");

    code.push_str(&format!(
        "    public <T> T orError(HTTPRequest request, Class<T> type) throws {} {{\n",
        error
    ));
    code.push_str("        if(request.status() < 200 || request.status() > 299)\n");
    code.push_str(&format!("            throw new {}(request);\n", error));
    code.push_str("        if(type == null)\n");
    code.push_str("            return null;\n");
    code.push_str("        try {\n");
    code.push_str("            return request.object(type);\n");
    code.push_str("        } catch (Throwable throwable) {\n");
    code.push_str(&format!("            throw new {}(request, throwable);\n", error));
    code.push_str("        }\n");
    code.push_str("    }\n\n");

    for group in &client.groups {
        code.push_str(&format!(
            "    public {} {}() {{\n        return {};\n    }}\n\n",
            group.type_name, group.accessor, group.accessor
        ));
    }

    if !client.snippets.is_empty() {
        for snippet in &client.snippets {
            if snippet.is_empty() {
                code.push('\n');
            } else {
                code.push_str(&format!("    {}\n", snippet));
            }
        }
        code.push('\n');
    }

    code.push('}');
    render_file(&model.namespace, &imports, &code)
}

/// Renders the exception every operation throws.
pub fn render_error(model: &ClientModel) -> String {
    let name = &model.error.name;
    let mut code = format!("public class {} extends Exception {{\n\n", name);
    code.push_str("    private final HTTPRequest request;\n\n");

    code.push_str(&format!("    public {}(HTTPRequest request) {{\n", name));
    code.push_str("        super(\"HTTP Response \" + request.status() + \": \" + request.string());\n");
    code.push_str("        this.request = request;\n");
    code.push_str("    }\n\n");

    code.push_str(&format!(
        "    public {}(HTTPRequest request, Throwable parent) {{\n",
        name
    ));
    code.push_str("        super(parent);\n");
    code.push_str("        this.request = request;\n");
    code.push_str("    }\n\n");

    code.push_str("    public HTTPRequest getRequest() {\n");
    code.push_str("        return request;\n");
    code.push_str("    }\n\n");
    code.push('}');

    render_file(
        &model.namespace,
        &[HTTP_REQUEST_IMPORT.to_string()],
        &code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::models::{ClientFacade, ErrorType, GroupHandle};
    use pretty_assertions::assert_eq;

    fn model(groups: Vec<GroupHandle>, snippets: Vec<String>) -> ClientModel {
        ClientModel {
            api_name: "Shop".into(),
            namespace: "org.shop".into(),
            client: ClientFacade {
                name: "ShopClient".into(),
                error_type: "ShopException".into(),
                groups,
                snippets,
            },
            error: ErrorType {
                name: "ShopException".into(),
            },
            schemas: vec![],
            responses: vec![],
            groups: vec![],
        }
    }

    #[test]
    fn test_client_with_groups_and_snippets() {
        let code = render_client(&model(
            vec![GroupHandle {
                type_name: "OrdersTag".into(),
                accessor: "orders".into(),
            }],
            vec!["public int retries = 3;".into(), "".into(), "// tail".into()],
        ));
        assert!(code.starts_with("package org.shop;\n\nimport org.javawebstack.httpclient.HTTPClient;\nimport org.javawebstack.httpclient.HTTPRequest;\nimport org.shop.tags.*;\n\n"));
        assert!(code.contains("public class ShopClient extends HTTPClient {\n\n    private final OrdersTag orders;\n\n"));
        assert!(code.contains("        this.orders = new OrdersTag(this);\n"));
        assert!(code.contains("            return null;\n        try {\n"));
        assert!(code.contains("    public OrdersTag orders() {\n        return orders;\n    }\n"));
        assert!(code.ends_with("    public int retries = 3;\n\n    // tail\n\n}\n"));
    }

    #[test]
    fn test_client_without_groups_skips_tag_import() {
        let code = render_client(&model(vec![], vec![]));
        assert!(!code.contains(".tags.*"));
        assert!(code.contains("    public ShopClient() {\n    }\n"));
    }

    #[test]
    fn test_error_type() {
        let code = render_error(&model(vec![], vec![]));
        assert!(code.starts_with(
            "package org.shop;\n\nimport org.javawebstack.httpclient.HTTPRequest;\n\npublic class ShopException extends Exception {"
        ));
        assert!(code.contains("    public ShopException(HTTPRequest request, Throwable parent) {\n"));
        assert!(code.contains("request.status()"));
        assert!(code.contains("request.string()"));
        assert_eq!(code.matches("this.request = request;").count(), 2);
    }
}
