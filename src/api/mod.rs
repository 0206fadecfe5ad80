// SoloQuest backend API client
//
// Every sibling feature (auth, blogs, connections, itineraries, favourites)
// talks to the same JSON REST backend through this client. Authenticated
// endpoints carry the bearer token held in local storage; error responses
// are Django-style `{"error": "..."}` bodies.

pub mod auth;
pub mod blogs;
pub mod connections;
pub mod favourites;
pub mod itineraries;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

const USER_AGENT: &str = concat!("SoloQuest/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("you must be signed in to do that")]
    Auth,
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> RequestBuilder {
        self.post(path).json(body)
    }

    fn put_json<B: Serialize>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::PUT, path).json(body)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send a request and decode the JSON response body.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute_raw(builder).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request where the response body does not matter (deletes and
    /// empty 2xx responses).
    async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute_raw(builder).await.map(|_| ())
    }

    async fn execute_raw(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        Ok(body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pull the backend's `{"error": ...}` message out of a failure body, falling
/// back to the HTTP reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
