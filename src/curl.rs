//! cURL snippet for the request composed in the tester

use serde_json::Value;

use crate::models::TestRequest;

fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "'\\''"))
}

/// Format the tester request as a cURL command.
///
/// Headers and body that do not parse as JSON are left out rather than
/// reported; validation happens when the request is sent.
pub fn to_curl(request: &TestRequest) -> String {
    let mut parts = vec![format!(
        "curl -X {} {}",
        request.method.as_str(),
        shell_quote(request.url.trim())
    )];

    if let Ok(Value::Object(headers)) = serde_json::from_str::<Value>(request.headers.trim()) {
        for (key, value) in headers {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            parts.push(format!("-H {}", shell_quote(&format!("{}: {}", key, value))));
        }
    }

    if request.method.has_body() {
        if let Ok(body) = serde_json::from_str::<Value>(request.body.trim()) {
            parts.push(format!("-d {}", shell_quote(&body.to_string())));
        }
    }

    parts.join(" \\\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;

    #[test]
    fn test_simple_get() {
        let request = TestRequest {
            url: "https://example.com/wp-json/wp/v2/posts".into(),
            ..Default::default()
        };
        assert_eq!(to_curl(&request), "curl -X GET 'https://example.com/wp-json/wp/v2/posts'");
    }

    #[test]
    fn test_post_with_headers_and_body() {
        let request = TestRequest {
            method: HttpMethod::POST,
            url: "https://example.com/wp-json/wp/v2/posts".into(),
            headers: r#"{"Authorization": "Bearer abc"}"#.into(),
            body: r#"{"title": "it's here"}"#.into(),
        };
        let curl = to_curl(&request);
        assert!(curl.contains("-H 'Authorization: Bearer abc'"));
        assert!(curl.contains(r#"-d '{"title":"it'\''s here"}'"#));
    }

    #[test]
    fn test_body_ignored_for_get_and_bad_json_skipped() {
        let request = TestRequest {
            method: HttpMethod::GET,
            url: "https://example.com".into(),
            headers: "{broken".into(),
            body: r#"{"a": 1}"#.into(),
        };
        assert_eq!(to_curl(&request), "curl -X GET 'https://example.com'");
    }
}
