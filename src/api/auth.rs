use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::{extract_error_message, ApiClient, ApiError, RawResponse};
use crate::models::{
    IndividualRegistration, LoginRequest, LoginResponse, RegistrationResponse,
    SessionTokenResponse, TeamRegistration,
};

const REGISTER_INDIVIDUAL_PATH: &str = "/api/auth/register/individual";
const REGISTER_TEAM_PATH: &str = "/api/auth/register/team";
pub const LOGIN_PATH: &str = "/api/auth/login";

pub async fn register_individual(
    client: &ApiClient,
    registration: &IndividualRegistration,
) -> Result<RegistrationResponse, ApiError> {
    post_envelope(client, REGISTER_INDIVIDUAL_PATH, registration, "Registration").await
}

pub async fn register_team(
    client: &ApiClient,
    registration: &TeamRegistration,
) -> Result<RegistrationResponse, ApiError> {
    post_envelope(client, REGISTER_TEAM_PATH, registration, "Team registration").await
}

pub async fn login_user(client: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post_envelope(client, LOGIN_PATH, credentials, "Login").await
}

/// Ask the backend which token it currently considers valid.
pub async fn fetch_session_token(client: &ApiClient, path: &str) -> Result<Option<String>, ApiError> {
    let response: SessionTokenResponse = client.get(path, "Session check").await?;
    Ok(response.token)
}

async fn post_envelope<B, T>(client: &ApiClient, path: &str, body: &B, operation: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let raw = client.post_raw(path, body).await.map_err(|e| {
        tracing::error!("API error ({}): {}", operation, e);
        ApiError::Network(format!("{} failed: {}", operation, e))
    })?;

    let result = interpret_envelope(raw, operation);
    if let Err(e) = &result {
        tracing::error!("API error ({}): {}", operation, e);
    }
    result
}

/// Turn a `{ "success": bool, ... }` reply into the payload or an error.
///
/// A 2xx reply without `"success": true` is still a failure.
pub fn interpret_envelope<T: DeserializeOwned>(raw: RawResponse, operation: &str) -> Result<T, ApiError> {
    let succeeded = raw
        .body
        .as_ref()
        .and_then(|body| body.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if raw.status.is_success() && succeeded {
        let body = raw.body.unwrap_or(Value::Null);
        return serde_json::from_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("{} failed: invalid response ({})", operation, e)));
    }

    let message = raw
        .body
        .as_ref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| fallback_message(raw.status, operation));

    Err(ApiError::Rejected {
        message,
        status: raw.status.as_u16(),
    })
}

fn fallback_message(status: StatusCode, operation: &str) -> String {
    if status.is_success() {
        format!("{} failed: Unknown error", operation)
    } else {
        format!("{} failed: server responded with {}", operation, status.as_u16())
    }
}
