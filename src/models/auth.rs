use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The backend has sent user ids both as numbers and as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expertise: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    pub fn username(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.id.as_ref()).map(UserId::to_string)
    }
}

/// Reply of the session verification endpoint used by
/// [`crate::config::SessionTrust::Revalidate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}
