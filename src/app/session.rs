//! Session operations: sign-in/out and building API clients that carry the
//! stored bearer token.

use crate::api::auth::{SignUpRequest, UserProfile};
use crate::api::ApiClient;

use super::{AppError, AppState};

pub async fn sign_in<F>(state: &AppState<F>, email: &str, password: &str) -> Result<UserProfile, AppError> {
    let client = ApiClient::new(&state.config.api_url)?;
    let tokens = client.sign_in(email, password).await?;
    state
        .store
        .set_session(&tokens.access, &tokens.refresh, &tokens.user)
        .await?;
    log::info!("Signed in as {}", tokens.user.email);
    Ok(tokens.user)
}

pub async fn sign_up<F>(state: &AppState<F>, request: &SignUpRequest) -> Result<UserProfile, AppError> {
    let client = ApiClient::new(&state.config.api_url)?;
    let tokens = client.sign_up(request).await?;
    state
        .store
        .set_session(&tokens.access, &tokens.refresh, &tokens.user)
        .await?;
    Ok(tokens.user)
}

pub async fn sign_out<F>(state: &AppState<F>) -> Result<(), AppError> {
    state.store.clear_session().await?;
    Ok(())
}

pub async fn current_user<F>(state: &AppState<F>) -> Option<UserProfile> {
    state.store.current_user().await
}

/// API client carrying the stored bearer token when one exists. Operations
/// that require auth will fail with `ApiError::Auth` when it does not.
pub async fn api_client<F>(state: &AppState<F>) -> Result<ApiClient, AppError> {
    let token = state.store.access_token().await?;
    Ok(ApiClient::new(&state.config.api_url)?.with_token(token))
}
