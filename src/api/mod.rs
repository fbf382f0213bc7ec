pub(crate) mod collection;
pub(crate) mod interceptor;

pub(crate) use collection::CollectionEndpoint;
pub(crate) use interceptor::InterceptorChain;

use crate::models::AccountInfo;
use crate::storage::{load_token, save_token};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Remote { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        ApiError::Parse(e.to_string())
    }

    /// Builds a remote error, lifting the backend's own message out of the body when present.
    pub(crate) fn remote(status: u16, body: &str) -> Self {
        ApiError::Remote {
            status,
            message: extract_error_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Remote { status: 401, .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Remote { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Remote { status, .. } => {
                format!("Something went wrong (HTTP {status}). Please try again.")
            }
            ApiError::Parse(_) => "The server sent a response we could not read.".to_string(),
        }
    }
}

fn extract_error_message(body: &str) -> String {
    let body = body.trim();
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        let msg = v
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| v.get("error").and_then(|e| e.as_str()))
            .or_else(|| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
            });
        return msg.unwrap_or_default().trim().to_string();
    }

    // Plain-text bodies are passed through; HTML error pages are not.
    if !body.starts_with('<') && body.len() <= 200 {
        return body.to_string();
    }
    String::new()
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginResponse {
    pub token: String,
    #[serde(default, alias = "admin")]
    pub user: Option<AccountInfo>,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
    interceptors: InterceptorChain,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            interceptors: InterceptorChain::new(),
        }
    }

    pub fn with_interceptors(mut self, interceptors: InterceptorChain) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Browser client: stored token plus the 401/logging interceptors.
    pub fn load_from_storage(base_url: &str) -> Self {
        let mut c = Self::new(base_url).with_interceptors(interceptor::browser_chain());
        c.token = load_token();
        c
    }

    pub fn save_to_storage(&self) {
        if let Some(token) = &self.token {
            save_token(token);
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn get_auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn logout(&mut self) {
        self.token = None;
        crate::storage::clear_session();
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        // A 401 here means bad credentials, not an expired session: skip the interceptors.
        self.send_once(Method::POST, "/api/auth/login", Some(&body))
            .await
    }

    /// `POST <collection>`
    pub async fn create(
        &self,
        collection: &str,
        body: &impl Serialize,
    ) -> ApiResult<serde_json::Value> {
        self.send(Method::POST, collection, Some(body)).await
    }

    /// `PUT <collection>/{id}`
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        body: &impl Serialize,
    ) -> ApiResult<serde_json::Value> {
        let path = format!("{collection}/{}", urlencoding::encode(id));
        self.send(Method::PUT, &path, Some(body)).await
    }

    /// `DELETE <collection>/{id}`
    pub async fn delete(&self, collection: &str, id: &str) -> ApiResult<serde_json::Value> {
        let path = format!("{collection}/{}", urlencoding::encode(id));
        self.send::<serde_json::Value>(Method::DELETE, &path, None::<&()>)
            .await
    }

    /// Single attempt, no retry. Failures go through the interceptor chain before
    /// being returned.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let result = self.send_once(method, path, body).await;
        if let Err(e) = &result {
            self.interceptors.on_error(e);
        }
        result
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");

        let mut req = client.request(method, url);
        if let Some(header) = self.get_auth_header() {
            req = req.header("Authorization", header);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();

        if status.is_success() {
            let text = res.text().await.map_err(ApiError::network)?;
            // 204 / empty bodies decode as JSON null.
            let text = if text.trim().is_empty() { "null" } else { text.as_str() };
            serde_json::from_str(text).map_err(ApiError::parse)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::remote(status.as_u16(), &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::interceptor::tests::{recording_chain, Recorder};
    use super::*;
    use crate::list::query::QueryState;
    use crate::models::{AppVersion, Subscription};
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use std::collections::HashMap;

    async fn list_subscriptions(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer t1" {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "Token expired" })),
            );
        }

        let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let search = params.get("search").cloned().unwrap_or_default();
        let status = params.get("status").cloned().unwrap_or_default();
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "subscriptions": [
                    { "id": "s1", "company_name": format!("{search}/{status}"), "amount": 99.5 },
                    { "_id": 7, "company_name": "numeric id" },
                    { "id": "s1", "company_name": "duplicate" },
                    "not an object"
                ],
                "total": 23,
                "page": page,
                "limit": 10
            })),
        )
    }

    async fn broken() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": { "message": "database unavailable" } })),
        )
    }

    async fn delete_version(Path(id): Path<String>) -> StatusCode {
        if id == "v 1" {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn create_version(
        Json(body): Json<serde_json::Value>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": "v9", "version": body["version"] })),
        )
    }

    async fn update_version(
        Path(id): Path<String>,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({ "id": id, "version": body["version"] }))
    }

    async fn login(Json(body): Json<serde_json::Value>) -> (StatusCode, Json<serde_json::Value>) {
        if body["password"] == "secret" {
            (
                StatusCode::OK,
                Json(serde_json::json!({ "token": "t1", "user": { "email": body["email"] } })),
            )
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "message": "Invalid credentials" })),
            )
        }
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/api/subscriptions", get(list_subscriptions))
            .route("/api/broken", get(broken))
            .route("/api/auth/login", post(login))
            .route("/api/app-versions", post(create_version))
            .route(
                "/api/app-versions/{id}",
                delete(delete_version).put(update_version),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn authed(base: &str, rec: &Recorder) -> ApiClient {
        let mut c = ApiClient::new(base).with_interceptors(recording_chain(rec));
        c.set_token("t1".to_string());
        c
    }

    #[tokio::test]
    async fn test_fetch_collection_sends_query_and_parses_page() {
        let base = spawn_backend().await;
        let rec = Recorder::default();
        let client = authed(&base, &rec);

        let mut q = QueryState::new(10);
        q.page = 2;
        q.search_text = "acme".to_string();
        q.filters.insert("status".to_string(), "active".to_string());

        let endpoint = CollectionEndpoint::new("/api/subscriptions", "subscriptions");
        let page = client
            .fetch_collection::<Subscription>(endpoint, &q)
            .await
            .expect("fetch should succeed");

        assert_eq!(page.total, 23);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 10);
        // The non-object entry is dropped; duplicates are left to the controller.
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].company_name, "acme/active");
        assert_eq!(page.items[0].amount, Some(99.5));
        assert_eq!(page.items[1].id, "7");
        assert!(rec.events().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_runs_interceptors() {
        let base = spawn_backend().await;
        let rec = Recorder::default();
        let client = ApiClient::new(&base).with_interceptors(recording_chain(&rec));

        let endpoint = CollectionEndpoint::new("/api/subscriptions", "subscriptions");
        let err = client
            .fetch_collection::<Subscription>(endpoint, &QueryState::new(10))
            .await
            .expect_err("missing token should be rejected");

        assert!(err.is_unauthorized());
        assert_eq!(rec.events(), vec!["invalidate", "redirect:/login"]);
    }

    #[tokio::test]
    async fn test_remote_error_carries_backend_message() {
        let base = spawn_backend().await;
        let rec = Recorder::default();
        let client = authed(&base, &rec);

        let err = client
            .send::<serde_json::Value>(Method::GET, "/api/broken", None::<&()>)
            .await
            .expect_err("503 should fail");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.user_message(), "database unavailable");
        assert!(rec.events().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_empty_body() {
        let base = spawn_backend().await;
        let client = authed(&base, &Recorder::default());

        let ok = client.delete("/api/app-versions", "v 1").await;
        assert_eq!(ok, Ok(serde_json::Value::Null));

        let missing = client
            .delete("/api/app-versions", "nope")
            .await
            .expect_err("unknown id should 404");
        assert_eq!(missing.status(), Some(404));
        assert_eq!(missing.user_message(), "Something went wrong (HTTP 404). Please try again.");
    }

    #[tokio::test]
    async fn test_create_and_update_send_json() {
        let base = spawn_backend().await;
        let client = authed(&base, &Recorder::default());
        let body = serde_json::json!({ "version": "3.4.0" });

        let created = client
            .create("/api/app-versions", &body)
            .await
            .expect("create should succeed");
        assert_eq!(created["id"], "v9");
        assert_eq!(created["version"], "3.4.0");

        let updated = client
            .update("/api/app-versions", "v9", &body)
            .await
            .expect("update should succeed");
        assert_eq!(updated, serde_json::json!({ "id": "v9", "version": "3.4.0" }));
    }

    #[tokio::test]
    async fn test_login_failure_skips_interceptors() {
        let base = spawn_backend().await;
        let rec = Recorder::default();
        let client = ApiClient::new(&base).with_interceptors(recording_chain(&rec));

        let err = client
            .login("ops@example.com", "wrong")
            .await
            .expect_err("bad password should be rejected");
        assert!(err.is_unauthorized());
        assert!(rec.events().is_empty());

        let ok = client
            .login("ops@example.com", "secret")
            .await
            .expect("good password should sign in");
        assert_eq!(ok.token, "t1");
        let user = ok.user.expect("user should be returned");
        assert_eq!(user.display_name(), "ops@example.com");
    }

    #[tokio::test]
    async fn test_network_error_when_backend_is_down() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}"));
        let endpoint = CollectionEndpoint::new("/api/app-versions", "data");
        let err = client
            .fetch_collection::<AppVersion>(endpoint, &QueryState::new(10))
            .await
            .expect_err("closed port should fail");
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.user_message().contains("Could not reach the server"));
    }

    #[test]
    fn test_extract_error_message_shapes() {
        assert_eq!(extract_error_message(r#"{"message":"Plan not found"}"#), "Plan not found");
        assert_eq!(extract_error_message(r#"{"error":"Bad filter"}"#), "Bad filter");
        assert_eq!(extract_error_message(r#"{"error":{"message":"nested"}}"#), "nested");
        assert_eq!(extract_error_message(r#"{"status":"fail"}"#), "");
        assert_eq!(extract_error_message("Gateway timeout"), "Gateway timeout");
        assert_eq!(extract_error_message("<html><body>502</body></html>"), "");
    }

    #[test]
    fn test_user_message_fallbacks() {
        let blank = ApiError::Remote {
            status: 500,
            message: " ".to_string(),
        };
        assert_eq!(blank.user_message(), "Something went wrong (HTTP 500). Please try again.");
        let expired = ApiError::remote(401, r#"{"message":"jwt expired"}"#);
        assert!(expired.is_unauthorized());
        assert!(expired.user_message().contains("sign in again"));
    }

    #[test]
    fn test_api_client_auth_header() {
        let mut client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
        assert!(client.get_auth_header().is_none());
        assert!(!client.is_authenticated());

        client.set_token("my-jwt-token".to_string());
        assert_eq!(client.get_auth_header().as_deref(), Some("Bearer my-jwt-token"));
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_login_response_contract_deserialize() {
        let json = r#"{ "token": "jwt-token", "user": {"id": 1, "email": "a@example.com"} }"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("login response should parse");
        assert_eq!(parsed.token, "jwt-token");
        assert!(parsed.user.expect("user").extra.is_object());

        let bare: LoginResponse =
            serde_json::from_str(r#"{ "token": "t" }"#).expect("user is optional");
        assert!(bare.user.is_none());
    }
}
