//! Network messages - communication between App and Network layers

use crate::catalog::Catalog;
use crate::models::TestRequest;
use crate::network::{RequestError, TestResponse};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute a tester request with a hard timeout
    ExecuteRequest {
        id: u64,
        request: TestRequest,
        timeout_secs: u64,
    },
    /// Abort a pending tester request
    CancelRequest(u64),
    /// Fetch an API description from a site URL
    LoadCatalog { id: u64, url: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A tester request finished, successfully or not
    RequestFinished {
        id: u64,
        method: String,
        url: String,
        result: Result<TestResponse, RequestError>,
    },
    /// Remote ingestion succeeded
    CatalogLoaded { id: u64, catalog: Box<Catalog> },
    /// Remote ingestion failed
    CatalogFailed { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::RequestFinished { id, .. } => *id,
            NetworkResponse::CatalogLoaded { id, .. } => *id,
            NetworkResponse::CatalogFailed { id, .. } => *id,
        }
    }
}
