use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};

use super::error::{extract_error_message, ApiError};

/// Status and (if it was JSON) body of a backend response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a default HTTP client: {}", e);
                Client::new()
            });

        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client,
                token: RwLock::new(None),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = token;
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.inner.token.read().ok().and_then(|guard| guard.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.get_token() {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    pub async fn get_raw(&self, path: &str) -> Result<RawResponse, reqwest::Error> {
        let request = self.authorize(self.inner.client.get(self.url(path)));
        let response = request.send().await?;
        read_response(response).await
    }

    pub async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, reqwest::Error> {
        let request = self.authorize(self.inner.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        read_response(response).await
    }

    /// GET a plain JSON resource. `operation` names the call in error messages.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, operation: &str) -> Result<T, ApiError> {
        let raw = self.get_raw(path).await.map_err(|e| {
            tracing::error!("{} request failed: {}", operation, e);
            ApiError::Network(format!("{} failed: {}", operation, e))
        })?;

        if !raw.status.is_success() {
            let message = raw
                .body
                .as_ref()
                .and_then(extract_error_message)
                .unwrap_or_else(|| format!("{} failed: {}", operation, raw.status.as_u16()));
            tracing::error!("{} rejected ({}): {}", operation, raw.status, message);
            return Err(ApiError::Rejected { message, status: raw.status.as_u16() });
        }

        serde_json::from_value(raw.body.unwrap_or(Value::Null))
            .map_err(|e| ApiError::InvalidResponse(format!("{} failed: invalid response ({})", operation, e)))
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, reqwest::Error> {
    let status = response.status();
    let text = response.text().await?;

    Ok(RawResponse {
        status,
        body: serde_json::from_str(&text).ok(),
    })
}
