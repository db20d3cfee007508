use thiserror::Error;

/// Failures of a single tester request.
///
/// `Input` and `Parse` are raised before any network activity; every other
/// variant carries the elapsed wall-clock time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("{0}")]
    Input(String),

    #[error("Invalid JSON in {0}")]
    Parse(String),

    #[error("{message}")]
    Network { message: String, duration_ms: u64 },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, duration_ms: u64 },

    #[error("Request cancelled")]
    Cancelled { duration_ms: u64 },

    #[error("Response is not valid JSON: {message}")]
    Decode {
        status: u16,
        message: String,
        duration_ms: u64,
    },
}

impl RequestError {
    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            RequestError::Input(_) | RequestError::Parse(_) => None,
            RequestError::Network { duration_ms, .. }
            | RequestError::Timeout { duration_ms, .. }
            | RequestError::Cancelled { duration_ms }
            | RequestError::Decode { duration_ms, .. } => Some(*duration_ms),
        }
    }

    /// Status code, when a response arrived before the failure
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request was actually sent
    pub fn reached_network(&self) -> bool {
        self.duration_ms().is_some()
    }
}
