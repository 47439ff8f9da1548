/// Post service - handles post creation, retrieval, and management
use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::metrics::posts::{record_operation, set_stored};
use crate::models::{CreatePostRequest, Post, PostUpdate};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct PostService {
    store: Arc<PostStore>,
}

impl PostService {
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<PostStore> {
        &self.store
    }

    /// All posts in creation order
    pub async fn list_posts(&self) -> Vec<Post> {
        let posts = self.store.list().await;
        record_operation("list", "ok");
        posts
    }

    /// Validate the request and store a new post under a fresh id
    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post> {
        let req = req.normalized();
        if let Err(errors) = req.validate() {
            record_operation("create", "invalid");
            return Err(errors.into());
        }

        let (post, stored) = self.store.insert(Post::from_request(req)).await;
        record_operation("create", "ok");
        set_stored(stored);

        tracing::info!(post_id = %post.id, author = %post.author, "post created");
        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        let id = parse_post_id(post_id)?;
        match self.store.find(id).await {
            Some(post) => {
                record_operation("get", "ok");
                Ok(post)
            }
            None => {
                record_operation("get", "not_found");
                Err(not_found(post_id))
            }
        }
    }

    /// Replace title, author and content of an existing post
    pub async fn update_post(&self, post_id: &str, update: PostUpdate) -> Result<Post> {
        let update = update.normalized();
        if let Err(errors) = update.validate() {
            record_operation("update", "invalid");
            return Err(errors.into());
        }

        let id = parse_post_id(post_id)?;
        match self.store.update(id, |post| post.apply(update)).await {
            Some(post) => {
                record_operation("update", "ok");
                tracing::info!(post_id = %post.id, "post updated");
                Ok(post)
            }
            None => {
                record_operation("update", "not_found");
                Err(not_found(post_id))
            }
        }
    }

    /// Remove a post, returning the removed record
    pub async fn delete_post(&self, post_id: &str) -> Result<Post> {
        let id = parse_post_id(post_id)?;
        match self.store.remove(id).await {
            Some((post, remaining)) => {
                record_operation("delete", "ok");
                set_stored(remaining);
                tracing::info!(post_id = %post.id, "post deleted");
                Ok(post)
            }
            None => {
                record_operation("delete", "not_found");
                Err(not_found(post_id))
            }
        }
    }
}

/// Ids that are not UUIDs can never match a stored post.
fn parse_post_id(post_id: &str) -> Result<Uuid> {
    Uuid::parse_str(post_id).map_err(|_| not_found(post_id))
}

fn not_found(post_id: &str) -> AppError {
    AppError::NotFound(format!("post '{}' does not exist", post_id))
}
