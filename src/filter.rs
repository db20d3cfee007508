//! Route filtering - search, method and namespace predicates over a catalog

use crate::catalog::{Catalog, RouteEntry};
use crate::constants::{ALL, FILTER_METHODS};

/// Either no restriction or exactly one accepted value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parses a UI value, treating the `ALL` sentinel as no restriction
    pub fn from_value(value: &str) -> Choice {
        if value == ALL {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(value) => value,
        }
    }

    fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// Step to the value after this one in `[ALL, options..]`, wrapping
    fn cycle<'a>(&self, options: impl Iterator<Item = &'a str>) -> Choice {
        let values: Vec<&str> = std::iter::once(ALL).chain(options).collect();
        let current = values.iter().position(|v| *v == self.as_str());
        let next = match current {
            Some(i) => values[(i + 1) % values.len()],
            None => ALL,
        };
        Choice::from_value(next)
    }
}

/// Transient filter state driven by the UI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub method: Choice,
    pub namespace: Choice,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, method: &str, namespace: &str) -> Self {
        FilterCriteria {
            search: search.into(),
            method: Choice::from_value(&method.to_uppercase()),
            namespace: Choice::from_value(namespace),
        }
    }

    pub fn matches(&self, path: &str, entry: &RouteEntry) -> bool {
        let search = self.search.to_lowercase();
        path.to_lowercase().contains(&search)
            && match &self.method {
                Choice::All => true,
                Choice::Only(method) => entry.supports(method),
            }
            && self.namespace.accepts(entry.namespace.as_deref())
    }

    pub fn cycle_method(&mut self) {
        self.method = self.method.cycle(FILTER_METHODS[1..].iter().copied());
    }

    pub fn cycle_namespace(&mut self, catalog: &Catalog) {
        self.namespace = self
            .namespace
            .cycle(catalog.meta.namespaces.iter().map(String::as_str));
    }
}

/// The routes of `catalog` passing `criteria`, in catalog order
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<(&'a str, &'a RouteEntry)> {
    let visible: Vec<(&str, &RouteEntry)> = catalog
        .iter()
        .filter(|(path, entry)| criteria.matches(path, entry))
        .collect();
    tracing::debug!(
        search = %criteria.search,
        method = criteria.method.as_str(),
        namespace = criteria.namespace.as_str(),
        visible = visible.len(),
        "Filtered routes"
    );
    visible
}
