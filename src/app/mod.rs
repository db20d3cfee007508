//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses, applies them to
//! the explorer context, and emits network commands and render state.

pub mod actor;
pub mod commands;
pub mod context;
pub mod state;

pub use actor::AppActor;
pub use context::ExplorerContext;
pub use state::AppState;
