// Traveler connections: users, friends, friend requests and blocks.
//
// The backend returns flat relationship records; which side of a pending
// request the signed-in user is on (and therefore which actions apply) is
// derived client-side from the sender/receiver ids.

use serde::Deserialize;

use super::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FriendRequest {
    pub id: i64,
    pub sender: UserSummary,
    pub receiver: UserSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockedUser {
    pub id: i64,
    pub blocked: UserSummary,
}

/// Which end of a pending request the signed-in user occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDirection {
    /// I sent it: shown as "Pending", can only be cancelled.
    Outgoing,
    /// Sent to me: can be accepted or deleted.
    Incoming,
}

/// A pending request seen from the signed-in user's side.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request_id: i64,
    pub direction: RequestDirection,
    pub other: UserSummary,
}

/// Keep only the requests involving `me` and work out, for each, the
/// direction and the other party.
pub fn classify_requests(requests: Vec<FriendRequest>, me: i64) -> Vec<PendingRequest> {
    requests
        .into_iter()
        .filter(|req| req.sender.id == me || req.receiver.id == me)
        .map(|req| {
            let direction = if req.sender.id == me {
                RequestDirection::Outgoing
            } else {
                RequestDirection::Incoming
            };
            let other = match direction {
                RequestDirection::Outgoing => req.receiver,
                RequestDirection::Incoming => req.sender,
            };
            PendingRequest {
                request_id: req.id,
                direction,
                other,
            }
        })
        .collect()
}

/// Case-insensitive match against a user's name and email, used by the
/// people-search box. The signed-in user is never listed.
pub fn matches_search(user: &UserSummary, me: i64, term: &str) -> bool {
    if user.id == me {
        return false;
    }
    let haystack = format!("{} {} {}", user.first_name, user.last_name, user.email).to_lowercase();
    haystack.contains(&term.to_lowercase())
}

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.require_auth()?;
        self.execute(self.get("/api/users/")).await
    }

    pub async fn list_friends(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.require_auth()?;
        self.execute(self.get("/api/friends/")).await
    }

    pub async fn list_friend_requests(&self) -> Result<Vec<FriendRequest>, ApiError> {
        self.require_auth()?;
        self.execute(self.get("/api/friend-requests/")).await
    }

    pub async fn list_blocked_users(&self) -> Result<Vec<BlockedUser>, ApiError> {
        self.require_auth()?;
        self.execute(self.get("/api/blocked-users/")).await
    }

    pub async fn send_friend_request(&self, user_id: i64) -> Result<(), ApiError> {
        self.require_auth()?;
        self.execute_empty(self.post(&format!("/api/send-friend-request/{}/", user_id)))
            .await
    }

    pub async fn accept_friend_request(&self, request_id: i64) -> Result<(), ApiError> {
        self.require_auth()?;
        self.execute_empty(self.post(&format!("/api/accept-friend-request/{}/", request_id)))
            .await
    }

    pub async fn delete_friend_request(&self, request_id: i64) -> Result<(), ApiError> {
        self.require_auth()?;
        self.execute_empty(self.delete(&format!("/api/delete-friend-request/{}/", request_id)))
            .await
    }

    pub async fn block_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.require_auth()?;
        self.execute_empty(self.post(&format!("/api/block-user/{}/", user_id)))
            .await
    }

    pub async fn unblock_user(&self, blocked_id: i64) -> Result<(), ApiError> {
        self.require_auth()?;
        self.execute_empty(self.post(&format!("/api/unblock-user/{}/", blocked_id)))
            .await
    }

    fn require_auth(&self) -> Result<(), ApiError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::Auth)
        }
    }
}
