//! Cloud Run service-to-service identity tokens.

use reqwest::Client;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Metadata request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Metadata server responded with {0}")]
    Status(u16),
    #[error("Metadata server returned an empty token")]
    Empty,
}

/// Fetches identity tokens for one audience from the instance metadata
/// server. Tokens are fetched per request and not cached.
#[derive(Clone)]
pub struct IdentityTokenSource {
    client: Client,
    metadata_url: String,
    audience: String,
}

impl IdentityTokenSource {
    pub fn new(client: Client, metadata_url: &str, audience: &str) -> Self {
        Self {
            client,
            metadata_url: metadata_url.to_string(),
            audience: audience.to_string(),
        }
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub async fn fetch(&self) -> Result<String, IdentityError> {
        let response = self
            .client
            .get(&self.metadata_url)
            .query(&[("audience", self.audience.as_str())])
            .header("Metadata-Flavor", "Google")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IdentityError::Status(response.status().as_u16()));
        }

        let token = response.text().await?.trim().to_string();
        if token.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(token)
    }
}
