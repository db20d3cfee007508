//! Built-in sample API description for trying the explorer without a live site

use serde_json::{json, Value};

use crate::catalog::ingest::ingest;
use crate::catalog::model::Catalog;

fn context_arg(with_default: bool) -> Value {
    let mut arg = json!({
        "description": "Scope under which the request is made; determines fields present in response.",
        "type": "string",
        "enum": ["view", "embed", "edit"]
    });
    if with_default {
        arg["default"] = json!("view");
    }
    arg
}

/// The raw demo document
pub fn demo_document() -> Value {
    json!({
        "name": "Demo WordPress Site",
        "description": "A demonstration WordPress REST API",
        "url": "https://demo.wp-api.org/wp-json/",
        "namespaces": ["wp/v2", "wp/v1", "oembed/1.0"],
        "authentication": ["cookie"],
        "timezone_string": "UTC",
        "routes": {
            "/wp/v2/posts": {
                "namespace": "wp/v2",
                "methods": ["GET", "POST"],
                "endpoints": [{
                    "methods": ["GET", "POST"],
                    "args": {
                        "context": context_arg(true),
                        "page": {
                            "description": "Current page of the collection.",
                            "type": "integer",
                            "default": 1
                        },
                        "per_page": {
                            "description": "Maximum number of items to be returned in result set.",
                            "type": "integer",
                            "default": 10
                        },
                        "search": {
                            "description": "Limit results to those matching a string.",
                            "type": "string"
                        }
                    }
                }]
            },
            "/wp/v2/posts/(?P<id>[\\d]+)": {
                "namespace": "wp/v2",
                "methods": ["GET", "POST", "PUT", "PATCH", "DELETE"],
                "endpoints": [{
                    "methods": ["GET", "POST", "PUT", "PATCH", "DELETE"],
                    "args": {
                        "id": {
                            "description": "Unique identifier for the post.",
                            "type": "integer",
                            "required": true
                        },
                        "context": context_arg(false)
                    }
                }]
            },
            "/wp/v2/pages": {
                "namespace": "wp/v2",
                "methods": ["GET", "POST"],
                "endpoints": [{
                    "methods": ["GET", "POST"],
                    "args": { "context": context_arg(true) }
                }]
            },
            "/wp/v2/media": {
                "namespace": "wp/v2",
                "methods": ["GET", "POST"],
                "endpoints": [{
                    "methods": ["GET", "POST"],
                    "args": {
                        "context": {
                            "description": "Scope under which the request is made; determines fields present in response.",
                            "type": "string"
                        }
                    }
                }]
            },
            "/wp/v2/users": {
                "namespace": "wp/v2",
                "methods": ["GET", "POST"],
                "endpoints": [{ "methods": ["GET", "POST"], "args": {} }]
            }
        }
    })
}

/// The demo document as a catalog
pub fn demo_catalog() -> Catalog {
    ingest(demo_document())
}
