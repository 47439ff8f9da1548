use crate::models::Post;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory, insertion-ordered collection of posts.
///
/// Each method takes the lock exactly once, so individual operations never
/// interleave. Nothing is persisted.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All posts in insertion order
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Append a post, returning it with the collection size after the insert
    pub async fn insert(&self, post: Post) -> (Post, usize) {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        (post, posts.len())
    }

    pub async fn find(&self, post_id: Uuid) -> Option<Post> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.id == post_id)
            .cloned()
    }

    /// Mutate a post in place, returning the result, or `None` if absent
    pub async fn update<F>(&self, post_id: Uuid, apply: F) -> Option<Post>
    where
        F: FnOnce(&mut Post),
    {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == post_id)?;
        apply(post);
        Some(post.clone())
    }

    /// Remove a post, returning it with the remaining size, or `None` if absent
    pub async fn remove(&self, post_id: Uuid) -> Option<(Post, usize)> {
        let mut posts = self.posts.write().await;
        let index = posts.iter().position(|post| post.id == post_id)?;
        let removed = posts.remove(index);
        Some((removed, posts.len()))
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
