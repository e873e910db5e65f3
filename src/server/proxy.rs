//! `/api/*` pass-through to the backend.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use super::identity::{IdentityError, IdentityTokenSource};
use crate::config::ServerConfig;

pub const SERVERLESS_AUTHORIZATION: &str = "x-serverless-authorization";

/// Request headers relayed to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION];

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("Identity token unavailable: {0}")]
    Identity(#[from] IdentityError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!("Proxy error: {}", self);
        let body = json!({ "success": false, "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Shared by every proxied request; read-only after startup.
#[derive(Clone)]
pub struct ProxyState {
    client: Client,
    backend_url: String,
    identity: Option<IdentityTokenSource>,
}

impl ProxyState {
    pub fn new(config: &ServerConfig) -> Self {
        let client = Client::new();
        let identity = config
            .identity_audience
            .as_deref()
            .map(|audience| IdentityTokenSource::new(client.clone(), &config.metadata_url, audience));

        Self {
            client,
            backend_url: config.backend_url.clone(),
            identity,
        }
    }

    pub fn identity(&self) -> Option<&IdentityTokenSource> {
        self.identity.as_ref()
    }

    fn target(&self, uri: &Uri) -> String {
        let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
        format!("{}{}", self.backend_url, path)
    }
}

pub async fn forward(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let target = state.target(&uri);
    tracing::debug!("Proxying {} {}", method, target);

    let mut request = state.client.request(method, &target);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if let Some(identity) = &state.identity {
        let token = identity.fetch().await?;
        request = request.header(SERVERLESS_AUTHORIZATION, format!("Bearer {}", token));
    }

    let upstream = request.body(body).send().await?;

    let status = upstream.status();
    let mut relayed = HeaderMap::new();
    if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
        relayed.insert(header::CONTENT_TYPE, content_type.clone());
    }
    let bytes = upstream.bytes().await?;

    Ok((status, relayed, bytes).into_response())
}
