//! Export formats generated from a loaded catalog

use serde_json::{json, Value};

use crate::catalog::Catalog;

/// Supported export formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
    Postman,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Markdown,
        ExportFormat::Postman,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "api.json",
            ExportFormat::Csv => "api-routes.csv",
            ExportFormat::Markdown => "api-docs.md",
            ExportFormat::Postman => "api-postman.json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Postman => "Postman",
        }
    }
}

/// Render `catalog` in the given format
pub fn export(catalog: &Catalog, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => to_json(catalog),
        ExportFormat::Csv => to_csv(catalog),
        ExportFormat::Markdown => to_markdown(catalog),
        ExportFormat::Postman => serde_json::to_string_pretty(&to_postman(catalog))
            .unwrap_or_else(|_| String::from("{}")),
    }
}

/// The ingested document, pretty-printed
pub fn to_json(catalog: &Catalog) -> String {
    serde_json::to_string_pretty(&catalog.raw).unwrap_or_else(|_| catalog.raw.to_string())
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn to_csv(catalog: &Catalog) -> String {
    let mut csv = String::from("Route,Methods,Namespace\n");
    for (path, entry) in catalog.iter() {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_field(path),
            csv_field(&entry.methods.join(";")),
            csv_field(entry.namespace.as_deref().unwrap_or(""))
        ));
    }
    csv
}

pub fn to_markdown(catalog: &Catalog) -> String {
    let meta = &catalog.meta;
    let mut md = format!("# {}\n\n", catalog.display_name());
    md.push_str(&format!("{}\n\n", meta.description.as_deref().unwrap_or("")));
    md.push_str(&format!("**Base URL:** {}\n\n", meta.url.as_deref().unwrap_or("")));
    md.push_str("## Namespaces\n\n");
    for ns in &meta.namespaces {
        md.push_str(&format!("- {}\n", ns));
    }
    md.push_str("\n## Endpoints\n\n");

    for (path, entry) in catalog.iter() {
        md.push_str(&format!("### {}\n\n", path));
        md.push_str(&format!("**Methods:** {}\n\n", entry.methods.join(", ")));
        md.push_str(&format!(
            "**Namespace:** {}\n\n",
            entry.namespace.as_deref().unwrap_or("N/A")
        ));

        for endpoint in entry.endpoints.iter().filter(|e| !e.args.is_empty()) {
            md.push_str("**Parameters:**\n\n");
            for (name, arg) in &endpoint.args {
                md.push_str(&format!(
                    "- `{}`{}: {}\n",
                    name,
                    if arg.required { " (required)" } else { "" },
                    arg.description.as_deref().unwrap_or("")
                ));
            }
            md.push('\n');
        }

        md.push_str("---\n\n");
    }
    md
}

/// Host part of a base URL: no scheme, nothing after the first `/`
fn host_of(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

/// Postman v2.1 collection with one item per (route, method)
pub fn to_postman(catalog: &Catalog) -> Value {
    let base_url = catalog.meta.url.as_deref().unwrap_or("");
    let mut items = Vec::new();

    for (path, entry) in catalog.iter() {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        for method in &entry.methods {
            items.push(json!({
                "name": format!("{} {}", method, path),
                "request": {
                    "method": method,
                    "header": [],
                    "url": {
                        "raw": format!("{}{}", base_url, path),
                        "host": [host_of(base_url)],
                        "path": segments,
                    }
                }
            }));
        }
    }

    json!({
        "info": {
            "name": catalog.display_name(),
            "description": catalog.meta.description.as_deref().unwrap_or(""),
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "item": items
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{demo_catalog, ingest};

    #[test]
    fn test_csv_rows_follow_catalog_order() {
        let catalog = ingest(json!({
            "routes": {
                "/wp/v2/posts": { "namespace": "wp/v2", "methods": ["GET", "POST"] },
                "/say \"hi\"": { "methods": ["GET"] }
            }
        }));
        let csv = to_csv(&catalog);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Route,Methods,Namespace");
        assert_eq!(lines[1], r#""/wp/v2/posts","GET;POST","wp/v2""#);
        assert_eq!(lines[2], r#""/say ""hi""","GET","""#);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_markdown_lists_parameters() {
        let md = to_markdown(&demo_catalog());
        assert!(md.starts_with("# Demo WordPress Site\n\n"));
        assert!(md.contains("**Base URL:** https://demo.wp-api.org/wp-json/"));
        assert!(md.contains("- wp/v2\n"));
        assert!(md.contains("### /wp/v2/users\n\n**Methods:** GET, POST\n\n**Namespace:** wp/v2\n\n---"));
        assert!(md.contains("- `id` (required): Unique identifier for the post.\n"));
        assert!(md.contains("- `page`: Current page of the collection.\n"));
    }

    #[test]
    fn test_postman_has_item_per_route_method() {
        let collection = to_postman(&demo_catalog());
        let items = collection["item"].as_array().unwrap();
        // 2 + 5 + 2 + 2 + 2
        assert_eq!(items.len(), 13);
        assert_eq!(items[0]["name"], "GET /wp/v2/posts");
        assert_eq!(items[0]["request"]["url"]["raw"], "https://demo.wp-api.org/wp-json//wp/v2/posts");
        assert_eq!(items[0]["request"]["url"]["host"][0], "demo.wp-api.org");
        assert_eq!(items[0]["request"]["url"]["path"], json!(["wp", "v2", "posts"]));
        assert_eq!(collection["info"]["name"], "Demo WordPress Site");
    }

    #[test]
    fn test_json_export_passes_document_through() {
        let catalog = demo_catalog();
        let parsed: Value = serde_json::from_str(&export(&catalog, ExportFormat::Json)).unwrap();
        assert_eq!(parsed, catalog.raw);
    }
}
