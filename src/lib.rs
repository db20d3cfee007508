//! # routescope
//!
//! A terminal explorer and tester for WordPress-style REST APIs.
//!
//! ## Features
//! - Load an API description from a JSON file, a live site (`/wp-json`) or a built-in demo
//! - Browse routes with search, method and namespace filters
//! - Inspect endpoint parameters: type, required flag, default and allowed values
//! - Favorites and a bounded request history, persisted between runs
//! - Live request tester with timeout and cancellation
//! - Export as JSON, CSV, Markdown or a Postman collection; copy requests as cURL
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (explorer context + UI state machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod catalog;
pub mod constants;
pub mod curl;
pub mod export;
pub mod filter;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use app::{AppActor, AppState, ExplorerContext};
pub use catalog::{Catalog, CatalogError, RouteEntry};
pub use curl::to_curl;
pub use export::ExportFormat;
pub use filter::{filter, FilterCriteria};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{HistoryRecord, HttpMethod, TestRequest};
pub use network::{NetworkActor, RequestError, TestResponse};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
