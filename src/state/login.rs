use crate::api::ApiError;
use crate::models::{LoginRequest, LoginResponse};

pub const MISSING_CREDENTIALS: &str = "Email and Password are required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
        self.error = None;
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
        self.error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.loading {
            return None;
        }
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }

        self.error = None;
        self.loading = true;
        Some(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Record the outcome; the reply is handed back on success so the
    /// caller can start the session.
    pub fn finish_submit(&mut self, result: Result<LoginResponse, ApiError>) -> Option<LoginResponse> {
        self.loading = false;
        match result {
            Ok(response) => Some(response),
            Err(e) => {
                self.error = Some(e.message().to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> LoginForm {
        let mut form = LoginForm::default();
        form.set_field(LoginField::Email, "ada@example.com".to_string());
        form.set_field(LoginField::Password, "pw".to_string());
        form
    }

    #[test]
    fn test_missing_credentials_blocks_submit() {
        let mut form = LoginForm::default();
        form.set_field(LoginField::Email, "ada@example.com".to_string());

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error.as_deref(), Some(MISSING_CREDENTIALS));
        assert!(!form.loading);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = LoginForm::default();
        form.begin_submit();
        assert!(form.error.is_some());

        form.set_field(LoginField::Password, "x".to_string());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_remember_me_is_not_sent() {
        let mut form = filled();
        form.set_remember_me(true);

        let request = form.begin_submit().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"email": "ada@example.com", "password": "pw"})
        );
        assert!(form.loading);
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn test_backend_error_is_shown_verbatim() {
        let mut form = filled();
        form.begin_submit();

        let outcome = form.finish_submit(Err(ApiError::Rejected {
            message: "Invalid credentials".to_string(),
            status: 401,
        }));

        assert!(outcome.is_none());
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        assert!(!form.loading);
    }

    #[test]
    fn test_success_hands_back_reply() {
        let mut form = filled();
        form.begin_submit();

        let reply: LoginResponse =
            serde_json::from_value(json!({"success": true, "access_token": "t", "user": {"id": 1, "name": "Ada"}}))
                .unwrap();
        let outcome = form.finish_submit(Ok(reply.clone()));

        assert_eq!(outcome, Some(reply));
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut form = LoginForm::default();
        assert_eq!(form.password_input_type(), "password");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");
    }
}
