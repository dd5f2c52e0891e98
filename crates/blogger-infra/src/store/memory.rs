//! In-memory document store - used when no database is configured, and by the test harness.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogger_core::domain::{Post, PostUpdate};
use blogger_core::error::RepoError;
use blogger_core::ports::PostStore;

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Documents are kept in insertion order, which is also creation order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        tracing::debug!(post_id = %post.id, "Inserting post");
        posts.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, batch: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        tracing::debug!(count = batch.len(), "Inserting posts");
        posts.extend(batch.iter().cloned());
        Ok(batch)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn replace(&self, id: Uuid, update: PostUpdate) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.replace(update);
        tracing::debug!(post_id = %id, "Replaced post");
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        tracing::debug!(post_id = %id, "Deleted post");
        Ok(())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        Ok(removed)
    }
}
