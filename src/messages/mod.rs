//! Messages passed between the terminal, the app actor and the network actor.
//!
//! Key presses become [`UiEvent`]s, the app actor turns them into calls on the
//! explorer context or [`NetworkCommand`]s, and every state change is sent back
//! to the terminal as a [`RenderState`] snapshot.

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::UiEvent;
