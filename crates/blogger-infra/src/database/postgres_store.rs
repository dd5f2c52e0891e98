//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use blogger_core::domain::{Post, PostUpdate};
use blogger_core::error::RepoError;
use blogger_core::ports::PostStore;

use super::entity::post::{self, ActiveModel, Entity as PostEntity};

fn query_error(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// Post store over a SeaORM connection.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, "Inserting post");

        let model = ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(query_error)?;

        Ok(model.into())
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError> {
        // An empty insert is rejected by SeaORM.
        if posts.is_empty() {
            return Ok(posts);
        }

        // Rows are written as given: `Post::from_new` already truncated
        // `created` to the column's precision.
        tracing::debug!(count = posts.len(), "Inserting posts");
        PostEntity::insert_many(posts.iter().cloned().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(posts)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace(&self, id: Uuid, update: PostUpdate) -> Result<Post, RepoError> {
        let mut post = self.find_by_id(id).await?.ok_or(RepoError::NotFound)?;
        post.replace(update);

        let model = ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(post_id = %id, "Replaced post");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Deleted post");
        Ok(())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }
}
