//! Starred routes, keyed purely by path string

use crate::catalog::{Catalog, RouteEntry};
use crate::storage::{keys, load_json, save_json, SharedStore, StorageError};

/// Persisted, insertion-ordered set of favorite route paths.
///
/// Paths are never checked against the loaded catalog: a favorite whose route
/// disappeared after a reload stays in the set and is just skipped when
/// resolved.
pub struct FavoritesStore {
    paths: Vec<String>,
    store: SharedStore,
}

impl FavoritesStore {
    pub fn load(store: SharedStore) -> Self {
        let paths: Vec<String> = load_json(store.as_ref(), keys::FAVORITES).unwrap_or_default();
        FavoritesStore { paths, store }
    }

    /// Adds the path if absent, removes it if present; returns the new membership
    pub fn toggle(&mut self, path: &str) -> Result<bool, StorageError> {
        let now_favorite = match self.paths.iter().position(|p| p == path) {
            Some(index) => {
                self.paths.remove(index);
                false
            }
            None => {
                self.paths.push(path.to_string());
                true
            }
        };
        self.persist()?;
        tracing::info!(path, favorite = now_favorite, "Favorite toggled");
        Ok(now_favorite)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn list(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.paths.clear();
        self.persist()
    }

    /// Every favorite in favorites order, paired with its route when
    /// `catalog` has one. Unresolved paths stay listed so they can be removed.
    pub fn resolve<'a>(&'a self, catalog: Option<&'a Catalog>) -> Vec<(&'a str, Option<&'a RouteEntry>)> {
        self.paths
            .iter()
            .map(|path| (path.as_str(), catalog.and_then(|c| c.lookup(path))))
            .collect()
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), keys::FAVORITES, &self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ingest;
    use crate::storage::{KeyValueStore, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let backing = MemoryStore::shared();
        let mut favorites = FavoritesStore::load(backing.clone());
        favorites.toggle("/wp/v2/posts").unwrap();
        let persisted_before = backing.get(keys::FAVORITES).unwrap();

        assert!(favorites.toggle("/wp/v2/users").unwrap());
        assert!(!favorites.toggle("/wp/v2/users").unwrap());

        assert_eq!(favorites.list(), ["/wp/v2/posts"]);
        assert_eq!(backing.get(keys::FAVORITES).unwrap(), persisted_before);
    }

    #[test]
    fn test_re_added_path_moves_to_end() {
        let mut favorites = FavoritesStore::load(MemoryStore::shared());
        favorites.toggle("/a").unwrap();
        favorites.toggle("/b").unwrap();
        favorites.toggle("/a").unwrap();
        favorites.toggle("/a").unwrap();
        assert_eq!(favorites.list(), ["/b", "/a"]);
        assert!(favorites.contains("/a"));
        assert!(!favorites.contains("/c"));
    }

    #[test]
    fn test_favorites_survive_reload_and_clear() {
        let backing = MemoryStore::shared();
        {
            let mut favorites = FavoritesStore::load(backing.clone());
            favorites.toggle("/wp/v2/media").unwrap();
        }
        let mut favorites = FavoritesStore::load(backing.clone());
        assert_eq!(favorites.list(), ["/wp/v2/media"]);

        favorites.clear().unwrap();
        assert!(favorites.is_empty());
        assert!(FavoritesStore::load(backing).is_empty());
    }

    #[test]
    fn test_resolve_keeps_stale_paths_unresolved() {
        let catalog = ingest(json!({ "routes": { "/wp/v2/posts": { "methods": ["GET"] } } }));
        let mut favorites = FavoritesStore::load(Arc::new(MemoryStore::new()));
        favorites.toggle("/gone").unwrap();
        favorites.toggle("/wp/v2/posts").unwrap();

        let resolved: Vec<(&str, bool)> = favorites
            .resolve(Some(&catalog))
            .into_iter()
            .map(|(p, entry)| (p, entry.is_some()))
            .collect();
        assert_eq!(resolved, vec![("/gone", false), ("/wp/v2/posts", true)]);
        assert!(favorites.resolve(None).iter().all(|(_, entry)| entry.is_none()));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_corrupt_favorites_load_empty() {
        let backing = MemoryStore::shared();
        backing.set(keys::FAVORITES, "{oops").unwrap();
        assert!(FavoritesStore::load(backing).is_empty());
    }
}
