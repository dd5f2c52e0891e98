use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostUpdate};
use crate::error::RepoError;

/// Document store holding posts with their compound author field.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a single post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Bulk-insert posts, returning them in insertion order as written.
    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError>;

    /// Number of posts currently stored.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Find a post by its ID. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Any single post, or `None` when the store is empty.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    /// All posts in creation order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace the editable fields of an existing post.
    async fn replace(&self, id: Uuid, update: PostUpdate) -> Result<Post, RepoError>;

    /// Delete a post by its ID.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Remove every post. Returns how many were removed.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}
