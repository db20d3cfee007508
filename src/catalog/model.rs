//! Data models for an ingested API description

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::ops::Range;
use std::sync::OnceLock;

use crate::constants::{DEFAULT_API_NAME, DEFAULT_TIMEZONE};

/// Declared type of a parameter
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamType {
    Single(String),
    /// The parameter accepts any of several types
    Union(Vec<String>),
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamType::Single(name) => f.write_str(name),
            ParamType::Union(names) => f.write_str(&names.join(" | ")),
        }
    }
}

/// Schema of one endpoint argument
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParameterSchema {
    pub description: Option<String>,
    pub param_type: Option<ParamType>,
    pub required: bool,
    pub default: Option<Value>,
    pub allowed_values: Option<Vec<Value>>,
}

/// One method-set variant of a route
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Endpoint {
    pub methods: Vec<String>,
    pub args: IndexMap<String, ParameterSchema>,
}

/// A route exposed by the described API
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub namespace: Option<String>,
    pub methods: Vec<String>,
    pub endpoints: Vec<Endpoint>,
}

fn group_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\?P<(\w+)>").expect("valid regex"))
}

/// Byte offset just past the `)` that closes a group whose body starts at
/// `start`. Escapes, character classes and nested groups are skipped.
fn group_end(path: &str, start: usize) -> Option<usize> {
    let bytes = path.as_bytes();
    let mut depth = 1usize;
    let mut in_class = false;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b']' if in_class => in_class = false,
            _ if in_class => {}
            b'[' => in_class = true,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// `(range, name)` of every named capture group in `path`; unterminated
/// groups are ignored
fn placeholders(path: &str) -> Vec<(Range<usize>, &str)> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(caps) = group_open_regex().captures_at(path, from) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        match group_end(path, open.end()) {
            Some(end) => {
                found.push((open.start()..end, name.as_str()));
                from = end;
            }
            None => from = open.end(),
        }
    }
    found
}

impl RouteEntry {
    pub fn new(path: impl Into<String>) -> Self {
        RouteEntry {
            path: path.into(),
            namespace: None,
            methods: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn supports(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Names of the regex placeholders embedded in the path
    pub fn path_params(&self) -> Vec<String> {
        placeholders(&self.path)
            .into_iter()
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// The path with placeholders rendered as `{name}`
    pub fn display_path(&self) -> String {
        let mut out = String::with_capacity(self.path.len());
        let mut last = 0;
        for (range, name) in placeholders(&self.path) {
            out.push_str(&self.path[last..range.start]);
            out.push('{');
            out.push_str(name);
            out.push('}');
            last = range.end;
        }
        out.push_str(&self.path[last..]);
        out
    }
}

/// Top-level metadata of an API description
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CatalogMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub namespaces: Vec<String>,
    pub authentication: Vec<String>,
    pub timezone: Option<String>,
}

/// Aggregate numbers shown in the explorer header
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataSummary {
    pub route_count: usize,
    pub namespace_count: usize,
    pub auth_method_count: usize,
    pub timezone: String,
    /// Number of routes declaring each method, in first-seen order
    pub method_counts: IndexMap<String, usize>,
}

impl MetadataSummary {
    pub fn count_for(&self, method: &str) -> usize {
        self.method_counts.get(method).copied().unwrap_or(0)
    }
}

/// Normalized, queryable route table built from one API description.
///
/// Route order is the order routes appeared in the document. A catalog is
/// never merged with another; loading a new description replaces it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub meta: CatalogMeta,
    pub routes: IndexMap<String, RouteEntry>,
    /// The document as ingested, kept for JSON export
    pub raw: Value,
}

impl Catalog {
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.routes.iter().map(|(path, entry)| (path.as_str(), entry))
    }

    pub fn display_name(&self) -> &str {
        self.meta.name.as_deref().unwrap_or(DEFAULT_API_NAME)
    }

    pub fn metadata_summary(&self) -> MetadataSummary {
        let mut method_counts: IndexMap<String, usize> = IndexMap::new();
        for entry in self.routes.values() {
            let mut seen: Vec<&str> = Vec::with_capacity(entry.methods.len());
            for method in &entry.methods {
                if seen.contains(&method.as_str()) {
                    continue;
                }
                seen.push(method);
                *method_counts.entry(method.clone()).or_insert(0) += 1;
            }
        }

        MetadataSummary {
            route_count: self.routes.len(),
            namespace_count: self.meta.namespaces.len(),
            auth_method_count: self.meta.authentication.len(),
            timezone: self
                .meta
                .timezone
                .clone()
                .filter(|tz| !tz.is_empty())
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            method_counts,
        }
    }
}
