//! HTTP client wrapper - validates and executes tester requests

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::models::HttpMethod;
use crate::network::error::RequestError;

/// Successful exchange; non-2xx statuses are still a response
#[derive(Clone, Debug, PartialEq)]
pub struct TestResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
    pub duration_ms: u64,
}

impl TestResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A validated request, ready to send
#[derive(Debug)]
pub struct PreparedRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Parse headers text into a flat header map
fn parse_headers(text: &str) -> Result<HeaderMap, RequestError> {
    let invalid = || RequestError::Parse("headers".to_string());

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let text = text.trim();
    if text.is_empty() {
        return Ok(headers);
    }

    let parsed: Value = serde_json::from_str(text).map_err(|_| invalid())?;
    let Value::Object(map) = parsed else {
        return Err(invalid());
    };
    for (name, value) in map {
        let value = value.as_str().ok_or_else(invalid)?;
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        // Caller headers replace the defaults
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Validate tester input without touching the network
pub fn prepare(
    method: &HttpMethod,
    url: &str,
    headers: &str,
    body: &str,
) -> Result<PreparedRequest, RequestError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(RequestError::Input("Please enter an endpoint URL".to_string()));
    }

    let reqwest_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .map_err(|_| RequestError::Input(format!("Invalid HTTP method: {}", method)))?;

    let headers = parse_headers(headers)?;

    let body = body.trim();
    let body = if method.has_body() && !body.is_empty() {
        Some(serde_json::from_str(body).map_err(|_| RequestError::Parse("request body".to_string()))?)
    } else {
        None
    };

    Ok(PreparedRequest {
        method: reqwest_method,
        url: url.to_string(),
        headers,
        body,
    })
}

/// Execute a tester request with a hard timeout
pub async fn execute(
    client: &reqwest::Client,
    method: &HttpMethod,
    url: &str,
    headers: &str,
    body: &str,
    timeout_secs: u64,
) -> Result<TestResponse, RequestError> {
    execute_with_cancel(client, method, url, headers, body, timeout_secs, None).await
}

/// Execute a tester request that can also be aborted through `cancel_rx`.
///
/// The exchange, the deadline and the cancel signal race; whichever finishes
/// first decides the result and the others are dropped. Exactly one attempt
/// is made.
pub async fn execute_with_cancel(
    client: &reqwest::Client,
    method: &HttpMethod,
    url: &str,
    headers: &str,
    body: &str,
    timeout_secs: u64,
    cancel_rx: Option<oneshot::Receiver<()>>,
) -> Result<TestResponse, RequestError> {
    let prepared = prepare(method, url, headers, body)?;

    let mut req_builder = client
        .request(prepared.method, &prepared.url)
        .headers(prepared.headers);
    if let Some(body) = &prepared.body {
        req_builder = req_builder.body(body.to_string());
    }

    let start = Instant::now();
    let elapsed = || start.elapsed().as_millis() as u64;

    let exchange = async {
        let resp = req_builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        Ok::<_, reqwest::Error>((status, text))
    };

    let cancelled = async {
        match cancel_rx {
            // A dropped sender is not a cancellation
            Some(rx) => {
                if rx.await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = exchange => {
            let duration_ms = elapsed();
            match result {
                Ok((status, text)) => match serde_json::from_str::<Value>(&text) {
                    Ok(body) => Ok(TestResponse {
                        status: status.as_u16(),
                        status_text: status.canonical_reason().unwrap_or("").to_string(),
                        body,
                        duration_ms,
                    }),
                    Err(e) => Err(RequestError::Decode {
                        status: status.as_u16(),
                        message: e.to_string(),
                        duration_ms,
                    }),
                },
                Err(e) => {
                    let message = if e.is_connect() {
                        format!("Connection failed: {}", e)
                    } else {
                        format!("Request failed: {}", e)
                    };
                    Err(RequestError::Network { message, duration_ms })
                }
            }
        }
        _ = tokio::time::sleep(Duration::from_secs(timeout_secs)) => {
            Err(RequestError::Timeout { timeout_secs, duration_ms: elapsed() })
        }
        _ = cancelled => {
            Err(RequestError::Cancelled { duration_ms: elapsed() })
        }
    }
}

/// Create an HTTP client with default configuration.
///
/// No client-level timeout: each tester request carries its own deadline.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("routescope/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client, http_response, serve_once, serve_silent};

    #[test]
    fn test_prepare_rejects_empty_url() {
        let err = prepare(&HttpMethod::GET, "   ", "", "").unwrap_err();
        assert!(matches!(err, RequestError::Input(_)));
        assert!(!err.reached_network());
    }

    #[test]
    fn test_prepare_rejects_bad_headers() {
        for headers in ["{not json", "[1, 2]", r#"{"X-Count": 3}"#, r#"{"bad header": "v"}"#] {
            let err = prepare(&HttpMethod::GET, "http://localhost", headers, "").unwrap_err();
            assert_eq!(err, RequestError::Parse("headers".to_string()), "headers {:?}", headers);
        }
    }

    #[test]
    fn test_prepare_body_only_parsed_for_body_methods() {
        let err = prepare(&HttpMethod::POST, "http://localhost", "", "{oops").unwrap_err();
        assert_eq!(err, RequestError::Parse("request body".to_string()));

        let prepared = prepare(&HttpMethod::GET, "http://localhost", "", "{oops").unwrap();
        assert!(prepared.body.is_none());

        let prepared = prepare(&HttpMethod::PATCH, "http://localhost", "", r#"{"a": 1}"#).unwrap();
        assert_eq!(prepared.body, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn test_caller_headers_override_default_content_type() {
        let prepared = prepare(
            &HttpMethod::GET,
            "http://localhost",
            r#"{"content-type": "text/plain", "X-Trace": "abc"}"#,
            "",
        )
        .unwrap();
        assert_eq!(prepared.headers[CONTENT_TYPE], "text/plain");
        assert_eq!(prepared.headers["x-trace"], "abc");
        assert_eq!(prepared.headers.len(), 2);
    }

    #[tokio::test]
    async fn test_execute_success_sends_json_body() {
        let (addr, request) = serve_once(http_response(201, "Created", r#"{"id": 7}"#)).await;
        let url = format!("http://{}/wp/v2/posts", addr);

        let response = execute(&client(), &HttpMethod::POST, &url, "", r#"{"title": "hi"}"#, 5)
            .await
            .unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.status_text, "Created");
        assert_eq!(response.body["id"], 7);
        assert!(response.is_success());

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("post /wp/v2/posts http/1.1"));
        assert!(request.contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"title":"hi"}"#));
    }

    #[tokio::test]
    async fn test_execute_non_success_status_is_still_a_response() {
        let (addr, _request) = serve_once(http_response(404, "Not Found", r#"{"code": "rest_no_route"}"#)).await;
        let response = execute(&client(), &HttpMethod::GET, &format!("http://{}", addr), "", "", 5)
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_execute_non_json_body_is_decode_error() {
        let (addr, _request) = serve_once(http_response(200, "OK", "<html></html>")).await;
        let err = execute(&client(), &HttpMethod::GET, &format!("http://{}", addr), "", "", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Decode { status: 200, .. }));
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn test_execute_times_out() {
        let addr = serve_silent().await;
        let start = Instant::now();
        let err = execute(&client(), &HttpMethod::GET, &format!("http://{}", addr), "", "", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Timeout { timeout_secs: 1, .. }));
        assert!(err.duration_ms().unwrap() >= 900);
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_execute_can_be_cancelled() {
        let addr = serve_silent().await;
        let (cancel_tx, cancel_rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = cancel_tx.send(());
        });
        let err = execute_with_cancel(
            &client(),
            &HttpMethod::GET,
            &format!("http://{}", addr),
            "",
            "",
            30,
            Some(cancel_rx),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RequestError::Cancelled { .. }));
    }

    #[tokio::test]
    async fn test_execute_connection_refused_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = execute(&client(), &HttpMethod::GET, &format!("http://{}", addr), "", "", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Network { .. }));
        assert_eq!(err.status(), None);
        assert!(err.reached_network());
    }
}
