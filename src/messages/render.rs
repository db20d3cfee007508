//! Render state - data structure sent from App layer to UI for rendering

use crate::catalog::{MetadataSummary, RouteEntry};
use crate::messages::ui_events::{AppTab, InputMode, Panel};
use crate::models::{HistoryRecord, TestRequest};
use crate::storage::{Settings, Theme};

/// One row of the route list or the favorites list
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRow {
    pub path: String,
    pub methods: Vec<String>,
    pub namespace: Option<String>,
    pub favorite: bool,
    /// Saved favorite that the loaded catalog does not contain
    pub stale: bool,
}

impl RouteRow {
    pub fn new(path: &str, entry: &RouteEntry, favorite: bool) -> Self {
        RouteRow {
            path: path.to_string(),
            methods: entry.methods.clone(),
            namespace: entry.namespace.clone(),
            favorite,
            stale: false,
        }
    }

    pub fn stale(path: &str) -> Self {
        RouteRow {
            path: path.to_string(),
            methods: Vec::new(),
            namespace: None,
            favorite: true,
            stale: true,
        }
    }
}

/// Tester response as displayed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseView {
    pub status: Option<u16>,
    pub status_text: String,
    pub body: String,
    pub time_ms: u64,
    pub is_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Transient status line message
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification { message: message.into(), kind: NotificationKind::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification { message: message.into(), kind: NotificationKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification { message: message.into(), kind: NotificationKind::Error }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Tab and appearance
    pub active_tab: AppTab,
    pub theme: Theme,

    // Input
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Catalog
    pub catalog_loaded: bool,
    pub loading_catalog: bool,
    pub api_name: String,
    pub api_description: String,
    pub api_url: String,
    pub summary: Option<MetadataSummary>,

    // Filters
    pub search: String,
    pub method_filter: String,
    pub namespace_filter: String,

    // Routes
    pub routes: Vec<RouteRow>,
    pub selected_route: usize,
    pub route_detail: Option<RouteEntry>,
    pub detail_favorite: bool,

    // Tester
    pub request: TestRequest,
    pub active_panel: Panel,
    pub response: ResponseView,
    pub response_scroll: u16,
    pub is_loading: bool,

    // History
    pub history: Vec<HistoryRecord>,
    pub selected_history: usize,

    // Favorites
    pub favorites: Vec<RouteRow>,
    /// Saved paths, including those absent from the current catalog
    pub favorite_count: usize,
    pub selected_favorite: usize,

    // Docs
    pub docs: String,
    pub docs_scroll: u16,

    // Settings
    pub settings: Settings,
    pub selected_setting: usize,

    // Popups
    pub show_help: bool,
    pub show_load_input: bool,
    pub load_input: String,
    pub notification: Option<Notification>,
}
