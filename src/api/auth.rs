// Account endpoints: sign-up, sign-in, password change.
//
// Sign-in exchanges email/password for a JWT pair plus the user profile;
// the app layer persists all three in local storage.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, ApiError> {
        let body = SignInRequest {
            email: email.trim(),
            password: password.trim(),
        };
        self.execute(self.post_json("/api/signin/", &body)).await
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SessionTokens, ApiError> {
        self.execute(self.post_json("/api/signup/", request)).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        let body = ChangePasswordRequest {
            current_password,
            new_password,
        };
        self.execute_empty(self.post_json("/api/change-password/", &body))
            .await
    }
}
