//! Explorer context - the single owner of catalog, filters and persisted stores

use crate::catalog::{Catalog, MetadataSummary, RouteEntry};
use crate::export::{export, ExportFormat};
use crate::filter::{filter, Choice, FilterCriteria};
use crate::models::HistoryRecord;
use crate::network::{RequestError, TestResponse};
use crate::storage::{
    FavoritesStore, HistoryStore, Settings, SettingsPatch, SettingsStore, SharedStore, StorageError,
    Theme,
};

/// Owns one instance of every core component.
///
/// All mutation goes through the methods below; nothing here is global.
pub struct ExplorerContext {
    catalog: Option<Catalog>,
    criteria: FilterCriteria,
    favorites: FavoritesStore,
    history: HistoryStore,
    settings: SettingsStore,
}

impl ExplorerContext {
    pub fn new(store: SharedStore) -> Self {
        ExplorerContext {
            catalog: None,
            criteria: FilterCriteria::default(),
            favorites: FavoritesStore::load(store.clone()),
            history: HistoryStore::load(store.clone()),
            settings: SettingsStore::load(store),
        }
    }

    // ========================
    // Catalog
    // ========================

    /// Replace the catalog wholesale
    pub fn load_catalog(&mut self, catalog: Catalog) {
        if let Choice::Only(ns) = &self.criteria.namespace {
            if !catalog.meta.namespaces.contains(ns) {
                self.criteria.namespace = Choice::All;
            }
        }
        self.catalog = Some(catalog);
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn summary(&self) -> Option<MetadataSummary> {
        self.catalog.as_ref().map(Catalog::metadata_summary)
    }

    pub fn export(&self, format: ExportFormat) -> Option<String> {
        self.catalog.as_ref().map(|c| export(c, format))
    }

    // ========================
    // Filtering
    // ========================

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn cycle_method_filter(&mut self) {
        self.criteria.cycle_method();
    }

    pub fn cycle_namespace_filter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.criteria.cycle_namespace(catalog);
        }
    }

    /// Visible routes under the current criteria; empty before a load
    pub fn visible_routes(&self) -> Vec<(&str, &RouteEntry)> {
        match &self.catalog {
            Some(catalog) => filter(catalog, &self.criteria),
            None => Vec::new(),
        }
    }

    // ========================
    // Favorites
    // ========================

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn toggle_favorite(&mut self, path: &str) -> Result<bool, StorageError> {
        self.favorites.toggle(path)
    }

    pub fn clear_favorites(&mut self) -> Result<(), StorageError> {
        self.favorites.clear()
    }

    /// All favorites, each with its route in the loaded catalog if present
    pub fn favorite_routes(&self) -> Vec<(&str, Option<&RouteEntry>)> {
        self.favorites.resolve(self.catalog.as_ref())
    }

    // ========================
    // History
    // ========================

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Log a finished tester request when history saving is on.
    ///
    /// Requests rejected before reaching the network are not logged. Returns
    /// the stored record, if any.
    pub fn record_outcome(
        &mut self,
        method: &str,
        url: &str,
        result: &Result<TestResponse, RequestError>,
    ) -> Result<Option<HistoryRecord>, StorageError> {
        if !self.settings.get().save_history {
            return Ok(None);
        }
        let (status, duration) = match result {
            Ok(resp) => (Some(resp.status), resp.duration_ms),
            Err(e) => match e.duration_ms() {
                Some(duration) => (e.status(), duration),
                None => return Ok(None),
            },
        };
        let record = HistoryRecord::new(method, url, status, duration);
        self.history.record(record.clone())?;
        Ok(Some(record))
    }

    pub fn delete_history(&mut self, index: usize) -> Result<Option<HistoryRecord>, StorageError> {
        self.history.delete_at(index)
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.history.clear()
    }

    // ========================
    // Settings
    // ========================

    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<&Settings, StorageError> {
        self.settings.update(patch)
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let theme = self.settings.theme().toggled();
        self.settings.set_theme(theme)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{demo_catalog, ingest};
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn ok_response(status: u16) -> Result<TestResponse, RequestError> {
        Ok(TestResponse {
            status,
            status_text: "OK".into(),
            body: json!({}),
            duration_ms: 42,
        })
    }

    #[test]
    fn test_nothing_visible_before_load() {
        let mut ctx = ExplorerContext::new(MemoryStore::shared());
        assert!(!ctx.is_loaded());
        assert!(ctx.visible_routes().is_empty());
        assert!(ctx.summary().is_none());
        assert!(ctx.export(ExportFormat::Csv).is_none());
        // Favorites work without a catalog
        assert!(ctx.toggle_favorite("/wp/v2/posts").unwrap());
        assert_eq!(ctx.favorite_routes(), vec![("/wp/v2/posts", None)]);
    }

    #[test]
    fn test_reload_replaces_catalog_and_keeps_stale_favorites() {
        let mut ctx = ExplorerContext::new(MemoryStore::shared());
        ctx.load_catalog(demo_catalog());
        ctx.toggle_favorite("/wp/v2/media").unwrap();
        ctx.cycle_namespace_filter();
        assert_eq!(ctx.criteria().namespace.as_str(), "wp/v2");

        ctx.load_catalog(ingest(json!({
            "namespaces": ["custom/v1"],
            "routes": { "/custom/v1/things": { "namespace": "custom/v1", "methods": ["GET"] } }
        })));
        assert_eq!(ctx.catalog().unwrap().len(), 1);
        assert!(ctx.catalog().unwrap().lookup("/wp/v2/posts").is_none());
        assert_eq!(ctx.criteria().namespace, Choice::All);
        assert!(ctx.favorites().contains("/wp/v2/media"));
        assert_eq!(ctx.favorite_routes(), vec![("/wp/v2/media", None)]);
    }

    #[test]
    fn test_record_outcome_follows_setting_and_failure_kind() {
        let mut ctx = ExplorerContext::new(MemoryStore::shared());

        let stored = ctx.record_outcome("GET", "https://a", &ok_response(200)).unwrap().unwrap();
        assert_eq!(stored.status, Some(200));
        assert_eq!(stored.duration, 42);

        let timeout = Err(RequestError::Timeout { timeout_secs: 1, duration_ms: 1001 });
        let stored = ctx.record_outcome("GET", "https://b", &timeout).unwrap().unwrap();
        assert_eq!(stored.status, None);
        assert_eq!(stored.duration, 1001);

        let input = Err(RequestError::Input("Please enter an endpoint URL".into()));
        assert!(ctx.record_outcome("GET", "", &input).unwrap().is_none());
        assert_eq!(ctx.history().len(), 2);
        assert_eq!(ctx.history().get(0).unwrap().endpoint, "https://b");

        ctx.update_settings(SettingsPatch { save_history: Some(false), ..Default::default() })
            .unwrap();
        assert!(ctx.record_outcome("GET", "https://c", &ok_response(200)).unwrap().is_none());
        assert_eq!(ctx.history().len(), 2);
    }

    #[test]
    fn test_visible_routes_follow_criteria() {
        let mut ctx = ExplorerContext::new(MemoryStore::shared());
        ctx.load_catalog(demo_catalog());
        assert_eq!(ctx.visible_routes().len(), 5);
        ctx.set_search("USERS");
        let visible: Vec<&str> = ctx.visible_routes().into_iter().map(|(p, _)| p).collect();
        assert_eq!(visible, vec!["/wp/v2/users"]);
        ctx.set_search("");
        ctx.cycle_method_filter();
        ctx.cycle_method_filter();
        ctx.cycle_method_filter();
        ctx.cycle_method_filter();
        ctx.cycle_method_filter();
        assert_eq!(ctx.criteria().method.as_str(), "DELETE");
        assert_eq!(ctx.visible_routes().len(), 1);
    }
}
