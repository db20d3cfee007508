//! Network layer - tester request execution and remote catalog loading
//!
//! The Network actor receives commands and sends back responses.

pub mod actor;
pub mod client;
mod error;

pub use actor::NetworkActor;
pub use client::{execute, execute_with_cancel, prepare, TestResponse};
pub use error::RequestError;
