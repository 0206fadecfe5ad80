// Blog endpoints: posts, categories, likes and comments.
//
// Listing and liking are public; publishing and commenting require a signed-
// in session. A comment's `user` field is the author's email address.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// Author's email address.
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub category: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LikeResponse {
    pub likes_count: i64,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    content: &'a str,
}

impl ApiClient {
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.execute(self.get("/posts/")).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.execute(self.get("/categories/")).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<BlogPost, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.post_json("/posts/", post)).await
    }

    pub async fn like_post(&self, post_id: i64) -> Result<LikeResponse, ApiError> {
        self.execute(self.post(&format!("/posts/{}/like/", post_id)))
            .await
    }

    pub async fn add_comment(&self, post_id: i64, content: &str) -> Result<Comment, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.post_json(&format!("/posts/{}/comment/", post_id), &CommentBody { content }))
            .await
    }

    pub async fn edit_comment(&self, comment_id: i64, content: &str) -> Result<Comment, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute(self.put_json(&format!("/comments/{}/", comment_id), &CommentBody { content }))
            .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth);
        }
        self.execute_empty(self.delete(&format!("/comments/{}/", comment_id)))
            .await
    }
}

/// Whether the signed-in user may edit or delete a comment: authors manage
/// their own comments, the post's author moderates everything under it.
pub fn can_manage_comment(comment: &Comment, post: &BlogPost, user_email: &str) -> bool {
    comment.user == user_email || post.author_name.as_deref() == Some(user_email)
}
