//! Operations layer
//!
//! Thin async operations over [`state::AppState`], one module per feature
//! area. These are what the shell binary calls; they own the side effects
//! (persisting sessions, mirroring successful advisory lookups).

pub mod advisory;
pub mod session;
pub mod state;

pub use state::AppState;

use thiserror::Error;

use crate::advisory::client::FetchError;
use crate::api::ApiError;
use crate::store::StoreError;

/// Failure of any app operation, folded into one printable error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}
