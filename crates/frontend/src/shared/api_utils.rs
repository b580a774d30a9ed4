//! API utilities for frontend-backend communication
//!
//! `ApiClient` is built from the session in `AuthContext` and passed to every
//! function that talks to the backend. All non-2xx responses are classified
//! into `ApiError` here, so call sites only match on the error kind.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

/// Port of the backend when the base URL is derived from the page location
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// `ENERGIE_API_BASE` set at build time wins. Otherwise the URL is built from
/// the current window location with the backend port, e.g.
/// "http://localhost:3000". Empty string if window is not available.
pub fn api_base() -> String {
    if let Some(base) = option_env!("ENERGIE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Join base and path; a path may or may not start with '/'
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Append a serialized query string, skipping it when empty
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: String, token: Option<String>) -> Self {
        Self { base, token }
    }

    /// Client without a session, used for the login request
    pub fn anonymous() -> Self {
        Self::new(api_base(), None)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&self.url(path)));
        let response = builder.send().await.map_err(network_error)?;
        decode(check(response).await?).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        self.get_json(&with_query(path, query)?).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        decode(check(response).await?).await
    }

    /// POST whose response body is not needed
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    /// POST without a body, e.g. "request data" or "pay invoice"
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.authorize(Request::post(&self.url(path)));
        let response = builder.send().await.map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.authorize(Request::put(&self.url(path)));
        let response = builder.send().await.map_err(network_error)?;
        check(response).await.map(|_| ())
    }

    /// Multipart upload; the browser sets the boundary header itself
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        decode(check(response).await?).await
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    log::warn!("request failed before a response arrived: {}", e);
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::debug!("{} answered {}", response.url(), status);
    Err(ApiError::from_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<&'static str>,
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000/", "/api/antraege"),
            "http://localhost:3000/api/antraege"
        );
        assert_eq!(join_url("", "api/x"), "/api/x");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(
            with_query("/api/rechnungen", &Filter { status: Some("Offen") }).unwrap(),
            "/api/rechnungen?status=Offen"
        );
        assert_eq!(
            with_query("/api/rechnungen", &Filter { status: None }).unwrap(),
            "/api/rechnungen"
        );
    }

    #[test]
    fn test_client_url() {
        let client = ApiClient::new("https://energie.example".into(), Some("t".into()));
        assert_eq!(client.url("/api/auth/me"), "https://energie.example/api/auth/me");
    }
}
