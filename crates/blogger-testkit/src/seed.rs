//! Store-level seed and teardown steps.
//!
//! Both take the store handle explicitly so every scenario works against the
//! store it was given and nothing else.

use blogger_core::domain::Post;
use blogger_core::error::RepoError;
use blogger_core::ports::PostStore;

use crate::fixtures::generate_seed_batch;

/// Insert `n` freshly generated posts and return them as the store holds them.
pub async fn seed_posts(store: &dyn PostStore, n: usize) -> Result<Vec<Post>, RepoError> {
    tracing::info!(count = n, "Seeding post data");

    let posts = generate_seed_batch(n)
        .into_iter()
        .map(Post::from_new)
        .collect();

    store.insert_many(posts).await
}

/// Delete every post. Returns the count observed afterwards, which is always 0
/// for a correctly behaving store.
pub async fn tear_down_store(store: &dyn PostStore) -> Result<u64, RepoError> {
    let removed = store.drop_all().await?;
    tracing::warn!(removed, "Deleted all posts");

    store.count().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogger_infra::InMemoryPostStore;

    #[tokio::test]
    async fn test_seed_inserts_batch() {
        let store = InMemoryPostStore::new();

        let seeded = seed_posts(&store, 10).await.unwrap();

        assert_eq!(seeded.len(), 10);
        assert_eq!(store.count().await.unwrap(), 10);
        let first = store.find_one().await.unwrap().unwrap();
        assert_eq!(first, seeded[0]);
    }

    #[tokio::test]
    async fn test_teardown_is_idempotent() {
        let store = InMemoryPostStore::new();
        seed_posts(&store, 25).await.unwrap();

        assert_eq!(tear_down_store(&store).await.unwrap(), 0);
        assert_eq!(tear_down_store(&store).await.unwrap(), 0);
    }
}
