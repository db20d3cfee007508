//! Builds a [`Catalog`] from a discovery document
//!
//! Ingestion is permissive: missing fields become empty, values of the wrong
//! shape are skipped, and a document without a `routes` object simply has no
//! routes.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::catalog::error::CatalogError;
use crate::catalog::model::{Catalog, CatalogMeta, Endpoint, ParamType, ParameterSchema, RouteEntry};

/// Build a catalog from an already-parsed document
pub fn ingest(raw: Value) -> Catalog {
    let meta = CatalogMeta {
        name: string_field(&raw, "name"),
        description: string_field(&raw, "description"),
        url: string_field(&raw, "url"),
        namespaces: string_list(raw.get("namespaces")),
        authentication: auth_list(raw.get("authentication")),
        timezone: string_field(&raw, "timezone_string"),
    };

    let mut routes = IndexMap::new();
    if let Some(route_map) = raw.get("routes").and_then(|r| r.as_object()) {
        for (path, details) in route_map {
            if let Some(details) = details.as_object() {
                routes.insert(path.clone(), parse_route(path, details));
            }
        }
    }

    tracing::info!(routes = routes.len(), name = ?meta.name, "Catalog ingested");
    Catalog { meta, routes, raw }
}

/// Parse JSON text and build a catalog from it
pub fn ingest_str(text: &str) -> Result<Catalog, CatalogError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(ingest(raw))
}

/// Read a JSON file and build a catalog from it
pub fn ingest_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ingest_str(&content)
}

fn parse_route(path: &str, details: &Map<String, Value>) -> RouteEntry {
    let mut entry = RouteEntry::new(path);
    entry.namespace = details
        .get("namespace")
        .and_then(|v| v.as_str())
        .map(String::from);
    entry.methods = method_list(details.get("methods"));

    if let Some(endpoints) = details.get("endpoints").and_then(|e| e.as_array()) {
        entry.endpoints = endpoints
            .iter()
            .filter_map(|e| e.as_object())
            .map(parse_endpoint)
            .collect();
    }

    entry
}

fn parse_endpoint(endpoint: &Map<String, Value>) -> Endpoint {
    let mut args = IndexMap::new();
    if let Some(arg_map) = endpoint.get("args").and_then(|a| a.as_object()) {
        for (name, schema) in arg_map {
            if let Some(schema) = schema.as_object() {
                args.insert(name.clone(), parse_parameter(schema));
            }
        }
    }

    Endpoint {
        methods: method_list(endpoint.get("methods")),
        args,
    }
}

fn parse_parameter(schema: &Map<String, Value>) -> ParameterSchema {
    let param_type = match schema.get("type") {
        Some(Value::String(name)) => Some(ParamType::Single(name.clone())),
        Some(Value::Array(names)) => Some(ParamType::Union(
            names.iter().filter_map(|n| n.as_str().map(String::from)).collect(),
        )),
        _ => None,
    };

    ParameterSchema {
        description: schema
            .get("description")
            .and_then(|v| v.as_str())
            .filter(|d| !d.is_empty())
            .map(String::from),
        param_type,
        required: schema.get("required").and_then(|v| v.as_bool()).unwrap_or(false),
        default: schema.get("default").cloned(),
        allowed_values: schema.get("enum").and_then(|v| v.as_array()).cloned(),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(String::from)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// `authentication` is a list in some documents and an object keyed by
/// scheme name in others
fn auth_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Object(schemes)) => schemes.keys().cloned().collect(),
        other => string_list(other),
    }
}

fn method_list(value: Option<&Value>) -> Vec<String> {
    let mut methods: Vec<String> = Vec::new();
    for method in string_list(value) {
        let method = method.to_uppercase();
        if !methods.contains(&method) {
            methods.push(method);
        }
    }
    methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingest_full_document() {
        let raw = json!({
            "name": "Example",
            "description": "An example site",
            "url": "https://example.com",
            "namespaces": ["wp/v2", "oembed/1.0"],
            "authentication": ["cookie"],
            "timezone_string": "Europe/Paris",
            "routes": {
                "/wp/v2/posts": {
                    "namespace": "wp/v2",
                    "methods": ["GET", "post"],
                    "endpoints": [{
                        "methods": ["GET"],
                        "args": {
                            "context": {
                                "description": "Scope",
                                "type": "string",
                                "enum": ["view", "edit"],
                                "default": "view"
                            },
                            "status": { "type": ["string", "array"], "required": true }
                        }
                    }]
                },
                "/oembed/1.0/embed": { "namespace": "oembed/1.0", "methods": ["GET"] }
            }
        });

        let catalog = ingest(raw);
        assert_eq!(catalog.display_name(), "Example");
        assert_eq!(catalog.meta.timezone.as_deref(), Some("Europe/Paris"));
        let paths: Vec<&str> = catalog.iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/wp/v2/posts", "/oembed/1.0/embed"]);

        let posts = catalog.lookup("/wp/v2/posts").unwrap();
        assert_eq!(posts.methods, vec!["GET", "POST"]);
        let args = &posts.endpoints[0].args;
        let context = &args["context"];
        assert_eq!(context.default, Some(json!("view")));
        assert_eq!(context.allowed_values.as_ref().map(|v| v.len()), Some(2));
        assert!(!context.required);
        let status = &args["status"];
        assert!(status.required);
        assert_eq!(status.param_type.as_ref().unwrap().to_string(), "string | array");

        let embed = catalog.lookup("/oembed/1.0/embed").unwrap();
        assert!(embed.endpoints.is_empty());
    }

    #[test]
    fn test_document_without_routes_has_zero_routes() {
        let catalog = ingest(json!({ "name": "Bare" }));
        assert!(catalog.is_empty());
        assert!(catalog.meta.namespaces.is_empty());

        let catalog = ingest(json!({ "routes": ["not", "a", "map"] }));
        assert!(catalog.is_empty());

        let catalog = ingest(json!("just a string"));
        assert!(catalog.is_empty());
        assert_eq!(catalog.display_name(), "WordPress REST API");
    }

    #[test]
    fn test_route_order_follows_document() {
        let text = r#"{"routes": {"/z": {}, "/a": {}, "/m": {}}}"#;
        let catalog = ingest_str(text).unwrap();
        let paths: Vec<&str> = catalog.iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/z", "/a", "/m"]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(ingest_str("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_ingest_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(ingest_file(&missing), Err(CatalogError::Io { .. })));

        let present = dir.path().join("api.json");
        fs::write(&present, r#"{"routes": {"/wp/v2": {"namespace": "wp/v2"}}}"#).unwrap();
        let catalog = ingest_file(&present).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_authentication_object_form() {
        let catalog = ingest(json!({ "authentication": { "oauth1": {}, "application-passwords": {} } }));
        assert_eq!(catalog.meta.authentication, vec!["oauth1", "application-passwords"]);
        assert_eq!(catalog.metadata_summary().auth_method_count, 2);
    }
}
