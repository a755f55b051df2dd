//! HTTP client for the RedLink JSON API with consistent timeouts and error
//! handling. Feature clients go through `ApiClient` so every call carries the
//! bearer token held by the `Session` at the moment the request is sent (not
//! when the client was built). Failures are returned as `AppError`; nothing is
//! retried here.

use super::{config::AppConfig, errors::AppError, session::Session};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, to_string};
use std::future::Future;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Fully prepared request handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }
}

/// Sends prepared requests. The browser build uses `BrowserTransport`;
/// tests swap in a recording fake.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
        timeout_ms: u32,
    ) -> impl Future<Output = Result<HttpResponse, AppError>>;
}

/// Authenticated client for the RedLink API.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    timeout_ms: u32,
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &AppConfig, session: Session, transport: T) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
            session,
            transport,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends one request and returns the raw response for 2xx statuses.
    /// Non-2xx statuses become `AppError::Http` with a sanitized message.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, AppError> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        let body = match body {
            Some(body) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(to_string(body).map_err(|err| {
                    AppError::Serialization(format!("Failed to encode request: {err}"))
                })?)
            }
            None => None,
        };
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method,
            url: build_url(&self.base_url, path),
            headers,
            body,
        };
        let response = self
            .transport
            .send(request, self.timeout_ms)
            .await
            .inspect_err(|err| log::warn!("{} {path} failed: {err}", method.as_str()))?;

        if response.ok() {
            Ok(response)
        } else {
            log::debug!("{} {path} returned {}", method.as_str(), response.status);
            Err(AppError::Http {
                status: response.status,
                message: error_message(&response.body),
            })
        }
    }

    /// GETs and decodes a JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        self.request::<()>(Method::Get, path, None).await?.json()
    }

    /// Sends a JSON body and decodes the JSON response.
    pub async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        self.request(method, path, Some(body)).await?.json()
    }

    /// Sends a JSON body and ignores whatever the API answers on success.
    pub async fn send_empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        self.request(method, path, Some(body)).await.map(|_| ())
    }

    /// Posts without a body, used for logout.
    pub async fn post_empty(&self, path: &str) -> Result<(), AppError> {
        self.request::<()>(Method::Post, path, None).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.request::<()>(Method::Delete, path, None)
            .await
            .map(|_| ())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Validates and escapes an id used as a single path segment.
pub fn path_id(id: &str) -> Result<String, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Id is required.".to_string()));
    }
    let mut url = url::Url::parse("http://segment.invalid/")
        .map_err(|err| AppError::Config(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| AppError::Config("Id cannot be escaped.".to_string()))?
        .pop_if_empty()
        .push(trimmed);
    Ok(url.path().trim_start_matches('/').to_string())
}

/// Appends `pairs` as a query string, skipping blank values.
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        let value = value.trim();
        if !value.is_empty() {
            query.append_pair(key, value);
            any = true;
        }
    }

    if any {
        format!("{path}?{}", query.finish())
    } else {
        path.to_string()
    }
}

/// Picks the API's own `message`/`error` field when the body is JSON,
/// otherwise the trimmed body, truncated for display.
fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });
    sanitize_body(from_json.as_deref().unwrap_or(body))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{HttpRequest, HttpResponse, Method, Transport};
    use crate::app_lib::errors::AppError;
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    /// `fetch`-based transport with an abort timeout.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTransport;

    impl Transport for BrowserTransport {
        async fn send(
            &self,
            request: HttpRequest,
            timeout_ms: u32,
        ) -> Result<HttpResponse, AppError> {
            let controller = AbortController::new().map_err(|_| {
                AppError::Config("Failed to initialize request timeout.".to_string())
            })?;
            let signal = controller.signal();
            let timeout_controller = controller.clone();
            let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .abort_signal(Some(&signal));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

            let response = built.send().await.map_err(map_request_error)?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;

            Ok(HttpResponse { status, body })
        }
    }

    /// Maps network errors into user-facing `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Method, build_url, error_message, path_id, with_query};
    use crate::app_lib::{
        errors::AppError,
        testing::{FakeTransport, client},
    };
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        ok: bool,
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url("https://api.test/api/", "/users"),
            "https://api.test/api/users"
        );
        assert_eq!(build_url("https://api.test/api", "users"), "https://api.test/api/users");
        assert_eq!(build_url("  ", "/users"), "/users");
    }

    #[test]
    fn path_id_rejects_blank_and_escapes() {
        assert_eq!(path_id(" 65f0a1 ").expect("id"), "65f0a1");
        assert_eq!(path_id("a/b").expect("id"), "a%2Fb");
        assert!(matches!(path_id("  "), Err(AppError::Config(_))));
    }

    #[test]
    fn path_id_uses_path_segment_escaping() {
        assert_eq!(path_id("a b").expect("id"), "a%20b");
        assert_eq!(path_id("a+b").expect("id"), "a+b");
        assert_eq!(path_id("r1?x#y").expect("id"), "r1%3Fx%23y");
    }

    #[test]
    fn with_query_skips_blank_values() {
        assert_eq!(
            with_query("/request", &[("page", "2"), ("name", " "), ("blood_type", "AB+")]),
            "/request?page=2&blood_type=AB%2B"
        );
        assert_eq!(with_query("/request", &[("name", "")]), "/request");
    }

    #[test]
    fn error_message_prefers_api_message_field() {
        assert_eq!(error_message(r#"{"message":"Email already taken"}"#), "Email already taken");
        assert_eq!(error_message(r#"{"error":"Invalid blood type"}"#), "Invalid blood type");
        assert_eq!(error_message("  plain failure  "), "plain failure");
        assert_eq!(error_message(""), "Request failed.");
        assert_eq!(error_message(&"x".repeat(500)).len(), 200);
    }

    #[tokio::test]
    async fn bearer_header_is_attached_when_token_present() {
        let transport = FakeTransport::new().respond(200, r#"{"ok":true}"#);
        let api = client(transport.clone(), Some("abc123"));

        let pong: Pong = api.get_json("/ping").await.expect("ping");

        assert_eq!(pong, Pong { ok: true });
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://api.test/api/ping");
        assert_eq!(sent[0].header("authorization"), Some("Bearer abc123"));
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn bearer_header_is_omitted_without_token() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), None);

        api.post_empty("/logout").await.expect("logout");

        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn token_is_read_at_call_time() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), None);

        api.session().set_token("fresh");
        api.delete("/user/7").await.expect("delete");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].header("Authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn json_body_is_serialized_with_content_type() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        api.send_empty(Method::Put, "/user/status/7", &json!({ "status": "inactive" }))
            .await
            .expect("status");

        let sent = transport.requests();
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"status":"inactive"}"#));
    }

    #[tokio::test]
    async fn non_success_status_becomes_http_error() {
        let transport = FakeTransport::new().respond(403, r#"{"message":"Account disabled"}"#);
        let api = client(transport.clone(), Some("t"));

        let err = api.get_json::<Pong>("/user").await.expect_err("forbidden");

        assert_eq!(
            err,
            AppError::Http {
                status: 403,
                message: "Account disabled".to_string()
            }
        );
    }

    #[tokio::test]
    async fn transport_errors_propagate_without_retry() {
        let transport =
            FakeTransport::new().fail(AppError::Network("Unable to reach the server".to_string()));
        let api = client(transport.clone(), Some("t"));

        let err = api.get_json::<Pong>("/users").await.expect_err("offline");

        assert!(matches!(err, AppError::Network(_)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn undecodable_body_is_a_parse_error() {
        let transport = FakeTransport::new().respond(200, "<html>");
        let api = client(transport, None);

        let err = api.get_json::<Pong>("/ping").await.expect_err("html");

        assert!(matches!(err, AppError::Parse(_)));
    }
}
