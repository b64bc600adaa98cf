//! HTTP API client for the coaching service.
//!
//! The client is bound to a fixed base URL and re-derives its
//! `Authorization: Bearer` header on every request from a [`TokenSource`],
//! so a login in one part of the app is picked up by every client instance
//! without mutating shared state.

use gloo_net::http::Response;
use serde::Deserialize;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Produces the current bearer token, if any. The frontend passes a closure
/// that reads the persisted session storage, so every request sees the
/// newest token.
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn delete(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// The coaching service wraps failures as `{"detail": "..."}`. Pull the
/// detail out when it is there so callers can show it verbatim; otherwise
/// hand back the raw body, or nothing if the body is unreadable.
async fn error_detail(response: Response) -> Option<String> {
    #[derive(Deserialize)]
    struct Detail {
        detail: serde_json::Value,
    }

    let body = response.text().await.ok()?;
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Detail>(&body) {
        Ok(payload) => Some(match payload.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        }),
        Err(_) => Some(body),
    }
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    match response.status() {
        200..=299 => Ok(response),
        400 => {
            let detail = error_detail(response)
                .await
                .unwrap_or_else(|| format!("Bad request to {endpoint}"));
            Err(ApiError::BadRequest(detail))
        }
        401 => Err(ApiError::UnauthorizedAccess),
        403 => Err(ApiError::ForbiddenAccess),
        404 => {
            let detail = error_detail(response)
                .await
                .unwrap_or_else(|| format!("{endpoint} not found"));
            Err(ApiError::NotFound(detail))
        }
        500..=599 => Err(ApiError::InternalServerError),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

// Combined function for the common pattern
async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    // Core request methods
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response>;

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize;

    // HTTP method implementations
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
    token_source: Option<TokenSource>,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
            token_source: None,
        }
    }

    /// Attach a token source consulted on every request.
    pub fn with_token_source(mut self, source: TokenSource) -> Self {
        self.token_source = Some(source);
        self
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    /// Static headers plus a freshly derived Authorization header. The token
    /// is read from the source per call, never cached on the client.
    fn request_headers(&self) -> ApiHeaders {
        let mut headers = self.headers.clone();
        if let Some(token) = self.token_source.as_ref().and_then(|source| source()) {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        headers
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
            _ => return Err(ApiError::UnexpectedStatusCode(405)), // Method not allowed for this function
        };

        request
            .headers(self.request_headers().into())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            _ => return Err(ApiError::UnexpectedStatusCode(405)), // Method not allowed for this function
        };

        request
            .headers(self.request_headers().into())
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response, endpoint).await
    }

    async fn delete<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Delete, endpoint).await?;
        handle_json_response(response, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn headers_without_token_source_carry_no_authorization() {
        let client = HttpApiClient::new("http://localhost:8000");
        assert!(client.request_headers().get("Authorization").is_none());
    }

    #[test]
    fn bearer_header_derived_from_token_source() {
        let client = HttpApiClient::new("http://localhost:8000")
            .with_token_source(Rc::new(|| Some("tok123".to_string())));

        let headers = client.request_headers();
        assert_eq!(headers.get("Authorization"), Some("Bearer tok123"));
    }

    #[test]
    fn token_source_consulted_per_request() {
        let token = Rc::new(RefCell::new(None::<String>));
        let source = {
            let token = token.clone();
            Rc::new(move || token.borrow().clone()) as TokenSource
        };
        let client = HttpApiClient::new("http://localhost:8000").with_token_source(source);

        assert!(client.request_headers().get("Authorization").is_none());

        // A later login updates storage; the same client must see it.
        *token.borrow_mut() = Some("fresh".to_string());
        assert_eq!(
            client.request_headers().get("Authorization"),
            Some("Bearer fresh")
        );
    }

    #[test]
    fn static_headers_survive_alongside_bearer() {
        let mut client = HttpApiClient::new("http://localhost:8000")
            .with_token_source(Rc::new(|| Some("tok".to_string())));
        client.set_header("Accept".to_string(), "application/json".to_string());

        let headers = client.request_headers();
        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("Authorization"), Some("Bearer tok"));
    }
}
