use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP method used by the request tester
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    /// Any other token an API description declares (e.g. `OPTIONS`)
    Other(String),
}

impl HttpMethod {
    /// Parses a method token, case-insensitively for the common five
    pub fn parse(token: &str) -> HttpMethod {
        match token.trim().to_uppercase().as_str() {
            "GET" => HttpMethod::GET,
            "POST" => HttpMethod::POST,
            "PUT" => HttpMethod::PUT,
            "PATCH" => HttpMethod::PATCH,
            "DELETE" => HttpMethod::DELETE,
            other => HttpMethod::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::Other(token) => token,
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::GET => HttpMethod::POST,
            HttpMethod::POST => HttpMethod::PUT,
            HttpMethod::PUT => HttpMethod::PATCH,
            HttpMethod::PATCH => HttpMethod::DELETE,
            HttpMethod::DELETE | HttpMethod::Other(_) => HttpMethod::GET,
        }
    }

    /// Methods whose body is parsed and sent as JSON
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One executed test request, as kept in the history log.
///
/// Records are never mutated after creation; deleting and clearing are the
/// only ways they leave the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub method: String,
    pub endpoint: String,
    /// Absent when the request failed before a response arrived
    pub status: Option<u16>,
    pub timestamp: DateTime<Utc>,
    /// Wall-clock duration in milliseconds
    pub duration: u64,
}

impl HistoryRecord {
    pub fn new(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        status: Option<u16>,
        duration: u64,
    ) -> Self {
        HistoryRecord {
            method: method.into(),
            endpoint: endpoint.into(),
            status,
            timestamp: Utc::now(),
            duration,
        }
    }
}

/// Request being composed in the tester panel
#[derive(Clone, Debug, PartialEq)]
pub struct TestRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Headers as JSON object text, empty for none
    pub headers: String,
    /// Body as JSON text, empty for none
    pub body: String,
}

impl Default for TestRequest {
    fn default() -> Self {
        TestRequest {
            method: HttpMethod::GET,
            url: String::new(),
            headers: String::new(),
            body: String::new(),
        }
    }
}
