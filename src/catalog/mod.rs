//! Route catalog - the normalized route table built from an API description

pub mod demo;
pub mod error;
pub mod ingest;
pub mod model;
pub mod remote;

pub use demo::demo_catalog;
pub use error::CatalogError;
pub use ingest::{ingest, ingest_file, ingest_str};
pub use model::*;
pub use remote::{discovery_url, fetch_catalog};
