//! App state - the explorer context plus terminal UI state

use std::path::PathBuf;

use crate::app::context::ExplorerContext;
use crate::export::ExportFormat;
use crate::messages::render::{Notification, ResponseView, RouteRow};
use crate::messages::ui_events::{AppTab, InputMode, Panel};
use crate::messages::RenderState;
use crate::models::TestRequest;
use crate::storage::SharedStore;

/// Rows of the settings tab, in display order
pub const SETTING_ROWS: usize = 5;

/// Main application state
pub struct AppState {
    pub ctx: ExplorerContext,

    // Tab navigation
    pub active_tab: AppTab,

    // Input
    pub input_mode: InputMode,
    pub cursor_position: usize,
    /// Search text being edited; mirrored into the filter criteria
    pub search_input: String,

    // Selections
    pub selected_route: usize,
    pub selected_history: usize,
    pub selected_favorite: usize,
    pub selected_setting: usize,

    // Tester
    pub request: TestRequest,
    pub active_panel: Panel,
    pub response: ResponseView,
    pub response_scroll: u16,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Catalog loading
    pub pending_catalog_id: Option<u64>,

    // Docs and export
    pub docs_scroll: u16,
    /// Directory export files are written to
    pub export_dir: PathBuf,

    // Popups
    pub show_help: bool,
    pub show_load_input: bool,
    pub load_input: String,
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        AppState {
            ctx: ExplorerContext::new(store),
            active_tab: AppTab::Routes,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            search_input: String::new(),
            selected_route: 0,
            selected_history: 0,
            selected_favorite: 0,
            selected_setting: 0,
            request: TestRequest::default(),
            active_panel: Panel::Url,
            response: ResponseView::default(),
            response_scroll: 0,
            next_request_id: 1,
            pending_request_id: None,
            pending_catalog_id: None,
            docs_scroll: 0,
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            show_help: false,
            show_load_input: false,
            load_input: String::new(),
            notification: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request_id.is_some()
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_tab {
            AppTab::Routes => &self.search_input,
            AppTab::Tester => match self.active_panel {
                Panel::Url => &self.request.url,
                Panel::Headers => &self.request.headers,
                Panel::Body => &self.request.body,
                Panel::Response => "",
            },
            _ => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.active_tab {
            AppTab::Routes => Some(&mut self.search_input),
            AppTab::Tester => match self.active_panel {
                Panel::Url => Some(&mut self.request.url),
                Panel::Headers => Some(&mut self.request.headers),
                Panel::Body => Some(&mut self.request.body),
                Panel::Response => None,
            },
            _ => None,
        }
    }

    fn route_rows(&self) -> Vec<RouteRow> {
        let favorites = self.ctx.favorites();
        self.ctx
            .visible_routes()
            .into_iter()
            .map(|(path, entry)| RouteRow::new(path, entry, favorites.contains(path)))
            .collect()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let routes = self.route_rows();
        let selected_route = clamp_index(self.selected_route, routes.len());
        let route_detail = routes
            .get(selected_route)
            .and_then(|row| self.ctx.catalog()?.lookup(&row.path).cloned());
        let detail_favorite = routes.get(selected_route).is_some_and(|row| row.favorite);

        let favorites: Vec<RouteRow> = self
            .ctx
            .favorite_routes()
            .into_iter()
            .map(|(path, entry)| match entry {
                Some(entry) => RouteRow::new(path, entry, true),
                None => RouteRow::stale(path),
            })
            .collect();
        let history: Vec<_> = self.ctx.history().list().cloned().collect();

        let (api_name, api_description, api_url) = match self.ctx.catalog() {
            Some(catalog) => (
                catalog.display_name().to_string(),
                catalog.meta.description.clone().unwrap_or_default(),
                catalog.meta.url.clone().unwrap_or_default(),
            ),
            None => Default::default(),
        };

        // Markdown is only rendered while the Docs tab is showing
        let docs = if self.active_tab == AppTab::Docs {
            self.ctx.export(ExportFormat::Markdown).unwrap_or_default()
        } else {
            String::new()
        };

        let criteria = self.ctx.criteria();

        RenderState {
            active_tab: self.active_tab,
            theme: self.ctx.theme(),
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            catalog_loaded: self.ctx.is_loaded(),
            loading_catalog: self.pending_catalog_id.is_some(),
            api_name,
            api_description,
            api_url,
            summary: self.ctx.summary(),
            search: self.search_input.clone(),
            method_filter: criteria.method.as_str().to_string(),
            namespace_filter: criteria.namespace.as_str().to_string(),
            selected_route,
            route_detail,
            detail_favorite,
            routes,
            request: self.request.clone(),
            active_panel: self.active_panel,
            response: self.response.clone(),
            response_scroll: self.response_scroll,
            is_loading: self.is_loading(),
            selected_history: clamp_index(self.selected_history, history.len()),
            history,
            selected_favorite: clamp_index(self.selected_favorite, favorites.len()),
            favorites,
            favorite_count: self.ctx.favorites().len(),
            docs,
            docs_scroll: self.docs_scroll,
            settings: self.ctx.settings().clone(),
            selected_setting: self.selected_setting,
            show_help: self.show_help,
            show_load_input: self.show_load_input,
            load_input: self.load_input.clone(),
            notification: self.notification.clone(),
        }
    }
}

/// Keep a selection inside a list of `len` items
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
