//! Command handlers - business logic for processing UI events

use std::path::PathBuf;

use crate::app::state::{clamp_index, SETTING_ROWS};
use crate::app::AppState;
use crate::catalog::{demo_catalog, ingest_file, Catalog};
use crate::curl;
use crate::export::ExportFormat;
use crate::messages::render::{Notification, ResponseView};
use crate::messages::ui_events::{AppTab, InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{HttpMethod, TestRequest};
use crate::network::{RequestError, TestResponse};
use crate::storage::{SettingsPatch, StorageError};

/// Where a catalog is loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Demo,
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// Classify user input; `None` when there is nothing to load
    pub fn parse(input: &str) -> Option<CatalogSource> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input == "demo" || input == "--demo" {
            return Some(CatalogSource::Demo);
        }
        if input.starts_with("http://") || input.starts_with("https://") {
            return Some(CatalogSource::Url(input.to_string()));
        }

        // Expand ~ to home directory
        let expanded = match (input.strip_prefix('~'), dirs::home_dir()) {
            (Some(rest), Some(home)) => format!("{}{}", home.to_string_lossy(), rest),
            _ => input.to_string(),
        };
        Some(CatalogSource::File(PathBuf::from(expanded)))
    }
}

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
    }

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn select_prev(&mut self) {
        match self.active_tab {
            AppTab::Routes => self.selected_route = self.selected_route.saturating_sub(1),
            AppTab::Tester => self.response_scroll = self.response_scroll.saturating_sub(1),
            AppTab::History => self.selected_history = self.selected_history.saturating_sub(1),
            AppTab::Favorites => self.selected_favorite = self.selected_favorite.saturating_sub(1),
            AppTab::Docs => self.docs_scroll = self.docs_scroll.saturating_sub(1),
            AppTab::Settings => self.selected_setting = self.selected_setting.saturating_sub(1),
        }
    }

    pub fn select_next(&mut self) {
        match self.active_tab {
            AppTab::Routes => {
                let len = self.ctx.visible_routes().len();
                self.selected_route = clamp_index(self.selected_route + 1, len);
            }
            AppTab::Tester => self.response_scroll = self.response_scroll.saturating_add(1),
            AppTab::History => {
                let len = self.ctx.history().len();
                self.selected_history = clamp_index(self.selected_history + 1, len);
            }
            AppTab::Favorites => {
                let len = self.ctx.favorite_routes().len();
                self.selected_favorite = clamp_index(self.selected_favorite + 1, len);
            }
            AppTab::Docs => self.docs_scroll = self.docs_scroll.saturating_add(1),
            AppTab::Settings => {
                self.selected_setting = clamp_index(self.selected_setting + 1, SETTING_ROWS);
            }
        }
    }

    /// Enter on the active tab
    pub fn activate(&mut self) {
        match self.active_tab {
            AppTab::Routes => {
                if let Some(path) = self.selected_route_path() {
                    self.open_in_tester(&path);
                }
            }
            AppTab::History => self.replay_history(),
            AppTab::Favorites => {
                let Some(path) = self.selected_favorite_path() else {
                    return;
                };
                if self.ctx.catalog().and_then(|c| c.lookup(&path)).is_some() {
                    self.open_in_tester(&path);
                } else {
                    self.notify(Notification::error(format!("{} is not part of the loaded API", path)));
                }
            }
            AppTab::Settings => self.toggle_setting(),
            AppTab::Tester | AppTab::Docs => {}
        }
    }

    fn selected_route_path(&self) -> Option<String> {
        let routes = self.ctx.visible_routes();
        let index = clamp_index(self.selected_route, routes.len());
        routes.get(index).map(|(path, _)| path.to_string())
    }

    fn selected_favorite_path(&self) -> Option<String> {
        let favorites = self.ctx.favorite_routes();
        let index = clamp_index(self.selected_favorite, favorites.len());
        favorites.get(index).map(|(path, _)| path.to_string())
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        let len = self.current_input().len();
        if self.current_input_mut().is_some() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = len;
        }
    }

    pub fn start_search(&mut self) {
        self.switch_tab(AppTab::Routes);
        self.start_editing();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
        self.sync_search();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        let Some(input) = self.current_input_mut() else {
            return;
        };
        let prev_pos = input[..cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.sync_search();
    }

    /// Push the edited search text into the filter criteria
    fn sync_search(&mut self) {
        if self.active_tab == AppTab::Routes {
            self.ctx.set_search(self.search_input.clone());
            self.selected_route = 0;
        }
    }

    // ========================
    // Route filters and favorites
    // ========================

    pub fn cycle_method_filter(&mut self) {
        self.ctx.cycle_method_filter();
        self.selected_route = 0;
    }

    pub fn cycle_namespace_filter(&mut self) {
        self.ctx.cycle_namespace_filter();
        self.selected_route = 0;
    }

    pub fn toggle_favorite(&mut self) {
        let Some(path) = self.selected_route_path() else {
            return;
        };
        match self.ctx.toggle_favorite(&path) {
            Ok(true) => self.notify(Notification::success(format!("Added {} to favorites", path))),
            Ok(false) => self.notify(Notification::info(format!("Removed {} from favorites", path))),
            Err(e) => self.storage_failed(e),
        }
    }

    /// Pre-fill the tester with a route's first method and its URL
    pub fn open_in_tester(&mut self, path: &str) {
        let Some(catalog) = self.ctx.catalog() else {
            return;
        };
        let Some(entry) = catalog.lookup(path) else {
            return;
        };
        let base = catalog.meta.url.as_deref().unwrap_or("").trim_end_matches('/');
        let url = format!("{}{}", base, entry.display_path());
        let method = entry.methods.first().map(|m| HttpMethod::parse(m));

        self.request.url = url;
        if let Some(method) = method {
            self.request.method = method;
        }
        self.active_panel = Panel::Url;
        self.cursor_position = self.request.url.len();
        self.switch_tab(AppTab::Tester);
    }

    // ========================
    // History and favorites lists
    // ========================

    pub fn replay_history(&mut self) {
        let Some(record) = self.ctx.history().get(self.selected_history) else {
            return;
        };
        self.request.method = HttpMethod::parse(&record.method);
        self.request.url = record.endpoint.clone();
        self.active_panel = Panel::Url;
        self.cursor_position = self.request.url.len();
        self.switch_tab(AppTab::Tester);
        self.notify(Notification::info("Request loaded in tester"));
    }

    pub fn delete_selected(&mut self) {
        match self.active_tab {
            AppTab::History => match self.ctx.delete_history(self.selected_history) {
                Ok(_) => {
                    self.selected_history = clamp_index(self.selected_history, self.ctx.history().len());
                }
                Err(e) => self.storage_failed(e),
            },
            AppTab::Favorites => {
                if let Some(path) = self.selected_favorite_path() {
                    if let Err(e) = self.ctx.toggle_favorite(&path) {
                        self.storage_failed(e);
                    }
                }
            }
            _ => {}
        }
    }

    pub fn clear_all(&mut self) {
        let result = match self.active_tab {
            AppTab::History => self.ctx.clear_history().map(|_| "History cleared"),
            AppTab::Favorites => self.ctx.clear_favorites().map(|_| "Favorites cleared"),
            _ => return,
        };
        match result {
            Ok(message) => {
                self.selected_history = 0;
                self.selected_favorite = 0;
                self.notify(Notification::success(message));
            }
            Err(e) => self.storage_failed(e),
        }
    }

    // ========================
    // Settings and theme
    // ========================

    pub fn toggle_setting(&mut self) {
        let current = self.ctx.settings().clone();
        let patch = match self.selected_setting {
            0 => SettingsPatch { auto_format_json: Some(!current.auto_format_json), ..Default::default() },
            1 => SettingsPatch { save_history: Some(!current.save_history), ..Default::default() },
            2 => SettingsPatch { show_line_numbers: Some(!current.show_line_numbers), ..Default::default() },
            4 => return self.toggle_theme(),
            _ => return,
        };
        self.apply_settings(patch);
    }

    pub fn adjust_timeout(&mut self, delta: i64) {
        let current = self.ctx.settings().request_timeout;
        let timeout = current.saturating_add_signed(delta);
        self.apply_settings(SettingsPatch { request_timeout: Some(timeout), ..Default::default() });
    }

    fn apply_settings(&mut self, patch: SettingsPatch) {
        if let Err(e) = self.ctx.update_settings(patch) {
            self.storage_failed(e);
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.ctx.toggle_theme() {
            Ok(theme) => self.notify(Notification::info(format!("Switched to {} theme", theme.as_str()))),
            Err(e) => self.storage_failed(e),
        }
    }

    // ========================
    // Tester
    // ========================

    pub fn cycle_method(&mut self) {
        self.request.method = self.request.method.next();
    }

    /// Start a tester request. Earlier requests keep running and are still
    /// logged; the response pane follows the latest one.
    pub fn send_request(&mut self) -> Option<NetworkCommand> {
        self.stop_editing();

        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.response = ResponseView {
            body: String::from("Sending request..."),
            ..Default::default()
        };
        self.response_scroll = 0;

        Some(NetworkCommand::ExecuteRequest {
            id,
            request: self.request.clone(),
            timeout_secs: self.ctx.settings().request_timeout,
        })
    }

    /// Cancel the current pending request
    pub fn cancel_request(&mut self) -> Option<NetworkCommand> {
        self.pending_request_id.map(NetworkCommand::CancelRequest)
    }

    pub fn show_curl(&mut self) {
        self.response = ResponseView {
            body: curl::to_curl(&self.request),
            ..Default::default()
        };
        self.response_scroll = 0;
        self.notify(Notification::info("cURL command generated"));
    }

    pub fn clear_request(&mut self) {
        self.request = TestRequest::default();
        self.response = ResponseView::default();
        self.response_scroll = 0;
        self.cursor_position = 0;
    }

    // ========================
    // Catalog loading
    // ========================

    pub fn open_load_input(&mut self) {
        self.show_load_input = true;
    }

    pub fn load_input_char(&mut self, c: char) {
        self.load_input.push(c);
    }

    pub fn load_input_backspace(&mut self) {
        self.load_input.pop();
    }

    pub fn cancel_load_input(&mut self) {
        self.show_load_input = false;
        self.load_input.clear();
    }

    pub fn submit_load(&mut self) -> Option<NetworkCommand> {
        let input = std::mem::take(&mut self.load_input);
        self.show_load_input = false;
        self.load_from(&input)
    }

    /// Load a catalog from a file, a site URL or the demo.
    ///
    /// Remote loads return the command to hand to the network actor.
    pub fn load_from(&mut self, input: &str) -> Option<NetworkCommand> {
        match CatalogSource::parse(input) {
            None => {
                self.notify(Notification::error("Please enter a URL or file path"));
                None
            }
            Some(CatalogSource::Demo) => {
                self.apply_catalog(demo_catalog(), "demo");
                None
            }
            Some(CatalogSource::File(path)) => {
                match ingest_file(&path) {
                    Ok(catalog) => self.apply_catalog(catalog, &path.display().to_string()),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load API description");
                        self.notify(Notification::error(format!("Error loading API: {}", e)));
                    }
                }
                None
            }
            Some(CatalogSource::Url(url)) => {
                let id = self.next_id();
                self.pending_catalog_id = Some(id);
                self.notify(Notification::info(format!("Loading {}...", url)));
                Some(NetworkCommand::LoadCatalog { id, url })
            }
        }
    }

    fn apply_catalog(&mut self, catalog: Catalog, source: &str) {
        let count = catalog.len();
        tracing::info!(source, routes = count, "API description loaded");
        self.ctx.load_catalog(catalog);
        self.selected_route = 0;
        self.selected_favorite = 0;
        self.docs_scroll = 0;
        self.notify(Notification::success(format!("Loaded {} routes from {}", count, source)));
    }

    // ========================
    // Export
    // ========================

    pub fn export(&mut self, format: ExportFormat) {
        let Some(content) = self.ctx.export(format) else {
            self.notify(Notification::error("Load an API before exporting"));
            return;
        };
        let path = self.export_dir.join(format.file_name());
        match std::fs::write(&path, content) {
            Ok(()) => {
                tracing::info!(path = %path.display(), format = format.label(), "Exported catalog");
                self.notify(Notification::success(format!(
                    "Exported {} to {}",
                    format.label(),
                    path.display()
                )));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Export failed");
                self.notify(Notification::error(format!("Export failed: {}", e)));
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::RequestFinished { id, method, url, result } => {
                if let Err(e) = self.ctx.record_outcome(&method, &url, &result) {
                    self.storage_failed(e);
                }
                if self.pending_request_id == Some(id) {
                    self.pending_request_id = None;
                    self.show_result(result);
                }
            }
            NetworkResponse::CatalogLoaded { id, catalog } => {
                if self.pending_catalog_id == Some(id) {
                    self.pending_catalog_id = None;
                    let source = catalog.meta.url.clone().unwrap_or_else(|| String::from("remote site"));
                    self.apply_catalog(*catalog, &source);
                }
            }
            NetworkResponse::CatalogFailed { id, message } => {
                if self.pending_catalog_id == Some(id) {
                    self.pending_catalog_id = None;
                    self.notify(Notification::error(format!("Error loading API: {}", message)));
                }
            }
        }
    }

    fn show_result(&mut self, result: Result<TestResponse, RequestError>) {
        self.response_scroll = 0;
        match result {
            Ok(resp) => {
                let body = if self.ctx.settings().auto_format_json {
                    serde_json::to_string_pretty(&resp.body).unwrap_or_else(|_| resp.body.to_string())
                } else {
                    resp.body.to_string()
                };
                self.notify(Notification::success(format!("Request completed in {}ms", resp.duration_ms)));
                self.response = ResponseView {
                    status: Some(resp.status),
                    status_text: resp.status_text.clone(),
                    is_error: !resp.is_success(),
                    body,
                    time_ms: resp.duration_ms,
                };
            }
            Err(e) => {
                self.notify(Notification::error(e.to_string()));
                self.response = ResponseView {
                    status: e.status(),
                    status_text: String::new(),
                    body: format!("Error: {}", e),
                    time_ms: e.duration_ms().unwrap_or(0),
                    is_error: true,
                };
            }
        }
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn storage_failed(&mut self, e: StorageError) {
        tracing::warn!(error = %e, "Failed to persist state");
        self.notify(Notification::error(format!("Could not save: {}", e)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::NotificationKind;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(MemoryStore::shared())
    }

    fn finished(id: u64, result: Result<TestResponse, RequestError>) -> NetworkResponse {
        NetworkResponse::RequestFinished {
            id,
            method: "GET".into(),
            url: "https://example.com/wp-json/wp/v2/posts".into(),
            result,
        }
    }

    #[test]
    fn test_catalog_source_classification() {
        assert_eq!(CatalogSource::parse("  "), None);
        assert_eq!(CatalogSource::parse("--demo"), Some(CatalogSource::Demo));
        assert_eq!(
            CatalogSource::parse("https://example.com"),
            Some(CatalogSource::Url("https://example.com".into()))
        );
        assert_eq!(
            CatalogSource::parse("./api.json"),
            Some(CatalogSource::File(PathBuf::from("./api.json")))
        );
    }

    #[test]
    fn test_open_route_in_tester_prefills_request() {
        let mut state = state();
        state.load_from("demo");
        state.selected_route = 1;
        state.activate();

        assert_eq!(state.active_tab, AppTab::Tester);
        assert_eq!(state.request.method, HttpMethod::GET);
        assert_eq!(state.request.url, "https://demo.wp-api.org/wp-json/wp/v2/posts/{id}");
    }

    #[test]
    fn test_search_editing_filters_routes() {
        let mut state = state();
        state.load_from("demo");
        state.start_search();
        for c in "users".chars() {
            state.enter_char(c);
        }
        let render = state.to_render_state();
        assert_eq!(render.routes.len(), 1);
        assert_eq!(render.routes[0].path, "/wp/v2/users");

        state.delete_char();
        assert_eq!(state.ctx.criteria().search, "user");
    }

    #[test]
    fn test_send_request_uses_timeout_setting() {
        let mut state = state();
        state.selected_setting = 3;
        state.adjust_timeout(-100);
        assert_eq!(state.ctx.settings().request_timeout, 1);

        state.request.url = "https://example.com".into();
        match state.send_request() {
            Some(NetworkCommand::ExecuteRequest { timeout_secs, .. }) => assert_eq!(timeout_secs, 1),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(matches!(state.cancel_request(), Some(NetworkCommand::CancelRequest(1))));
    }

    #[test]
    fn test_overlapping_requests_all_reach_history() {
        let mut state = state();
        state.request.url = "https://example.com/wp-json/wp/v2/posts".into();
        let Some(NetworkCommand::ExecuteRequest { id: first, .. }) = state.send_request() else {
            panic!("expected a request command");
        };
        state.request.method = HttpMethod::POST;
        let Some(NetworkCommand::ExecuteRequest { id: second, .. }) = state.send_request() else {
            panic!("expected a second request command");
        };
        assert_ne!(first, second);
        assert!(matches!(state.cancel_request(), Some(NetworkCommand::CancelRequest(id)) if id == second));

        let ok = |status: u16, duration_ms: u64| {
            Ok(TestResponse {
                status,
                status_text: String::new(),
                body: json!({}),
                duration_ms,
            })
        };
        state.handle_response(NetworkResponse::RequestFinished {
            id: second,
            method: "POST".into(),
            url: "https://example.com/wp-json/wp/v2/posts".into(),
            result: ok(201, 5),
        });
        assert!(!state.is_loading());
        assert_eq!(state.response.status, Some(201));

        state.handle_response(finished(first, ok(200, 90)));
        // The earlier request does not take over the response pane
        assert_eq!(state.response.status, Some(201));

        let history = state.ctx.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().status, Some(200));
        assert_eq!(history.get(1).unwrap().status, Some(201));
        assert_eq!(history.get(1).unwrap().method, "POST");
    }

    #[test]
    fn test_stale_favorite_can_be_removed() {
        let mut state = state();
        state.ctx.toggle_favorite("/gone/v1/thing").unwrap();
        state.load_from("demo");
        state.ctx.toggle_favorite("/wp/v2/posts").unwrap();

        let render = state.to_render_state();
        assert_eq!(render.favorites.len(), 2);
        assert!(render.favorites[0].stale);
        assert!(!render.favorites[1].stale);

        state.switch_tab(AppTab::Favorites);
        state.activate();
        assert_eq!(state.active_tab, AppTab::Favorites);
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Error);

        state.delete_selected();
        assert!(!state.ctx.favorites().contains("/gone/v1/thing"));
        assert_eq!(state.ctx.favorites().list(), ["/wp/v2/posts"]);
    }

    #[test]
    fn test_finished_request_updates_response_and_history() {
        let mut state = state();
        state.request.url = "https://example.com/wp-json/wp/v2/posts".into();
        let Some(NetworkCommand::ExecuteRequest { id, .. }) = state.send_request() else {
            panic!("expected a request command");
        };

        state.handle_response(finished(
            id,
            Ok(TestResponse {
                status: 404,
                status_text: "Not Found".into(),
                body: json!({ "code": "rest_no_route" }),
                duration_ms: 12,
            }),
        ));

        assert!(!state.is_loading());
        assert_eq!(state.response.status, Some(404));
        assert!(state.response.is_error);
        assert!(state.response.body.contains("rest_no_route"));
        assert_eq!(state.ctx.history().len(), 1);
        assert_eq!(state.ctx.history().get(0).unwrap().status, Some(404));
    }

    #[test]
    fn test_failed_request_shows_error() {
        let mut state = state();
        state.request.url = "https://example.com".into();
        let Some(NetworkCommand::ExecuteRequest { id, .. }) = state.send_request() else {
            panic!("expected a request command");
        };
        state.handle_response(finished(id, Err(RequestError::Timeout { timeout_secs: 1, duration_ms: 1002 })));

        assert_eq!(state.response.status, None);
        assert_eq!(state.response.body, "Error: Request timed out after 1s");
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Error);
        assert_eq!(state.ctx.history().get(0).unwrap().status, None);
    }

    #[test]
    fn test_remote_failure_keeps_previous_catalog() {
        let mut state = state();
        state.load_from("demo");
        let Some(NetworkCommand::LoadCatalog { id, url }) = state.load_from("https://example.com") else {
            panic!("expected a catalog command");
        };
        assert_eq!(url, "https://example.com");
        assert!(state.to_render_state().loading_catalog);

        state.handle_response(NetworkResponse::CatalogFailed { id, message: "HTTP error 500".into() });
        assert!(!state.to_render_state().loading_catalog);
        assert_eq!(state.ctx.catalog().unwrap().display_name(), "Demo WordPress Site");
        assert_eq!(state.notification.as_ref().unwrap().message, "Error loading API: HTTP error 500");
    }

    #[test]
    fn test_history_replay_and_delete() {
        let mut state = state();
        state.ctx.record_outcome("DELETE", "https://a/1", &Err(RequestError::Cancelled { duration_ms: 3 })).unwrap();
        state.ctx.record_outcome("POST", "https://a/2", &Err(RequestError::Cancelled { duration_ms: 4 })).unwrap();

        state.switch_tab(AppTab::History);
        state.select_next();
        state.activate();
        assert_eq!(state.active_tab, AppTab::Tester);
        assert_eq!(state.request.method, HttpMethod::DELETE);
        assert_eq!(state.request.url, "https://a/1");

        state.switch_tab(AppTab::History);
        state.delete_selected();
        assert_eq!(state.ctx.history().len(), 1);
        assert_eq!(state.selected_history, 0);
        assert_eq!(state.ctx.history().get(0).unwrap().endpoint, "https://a/2");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state();
        state.export_dir = dir.path().to_path_buf();

        state.export(ExportFormat::Csv);
        assert_eq!(state.notification.as_ref().unwrap().kind, NotificationKind::Error);

        state.load_from("demo");
        state.export(ExportFormat::Csv);
        let csv = std::fs::read_to_string(dir.path().join("api-routes.csv")).unwrap();
        assert!(csv.starts_with("Route,Methods,Namespace\n"));
    }

    #[test]
    fn test_settings_rows_toggle() {
        let mut state = state();
        state.switch_tab(AppTab::Settings);
        state.activate();
        assert!(!state.ctx.settings().auto_format_json);
        state.select_next();
        state.select_next();
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_setting, SETTING_ROWS - 1);
        state.activate();
        assert_eq!(state.ctx.theme(), crate::storage::Theme::Dark);
    }
}
