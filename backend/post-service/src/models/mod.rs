/// Data models for post-service
///
/// - `Post`: a stored blog entry
/// - `CreatePostRequest` / `PostUpdate`: validated request bodies
/// - response envelopes for the welcome and delete routes
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A blog post held in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Generated on creation, never changes
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub published: bool,
}

impl Post {
    /// Build a new post with a fresh id from an already validated request
    pub fn from_request(req: CreatePostRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            author: req.author,
            content: req.content,
            created_at: Utc::now(),
            updated_at: None,
            published_at: req.published_at,
            published: req.published,
        }
    }

    /// Replace the caller-editable fields; `id` and `created_at` are kept.
    pub fn apply(&mut self, update: PostUpdate) {
        self.title = update.title;
        self.author = update.author;
        self.content = update.content;
        self.updated_at = Some(Utc::now());
    }
}

/// Body of `POST /posts/create`. Unknown fields such as `id` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.author = self.author.trim().to_string();
        self
    }
}

/// Body of `PUT /posts/update/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostUpdate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

impl PostUpdate {
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.author = self.author.trim().to_string();
        self
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[serde(rename = "Welcome")]
    pub welcome: String,
}

/// Confirmation returned by `DELETE /posts/delete/{id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletePostResponse {
    pub message: String,
    pub id: Uuid,
}
