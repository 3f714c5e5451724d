//! SeaORM implementation of the [`PostStore`] port.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::entity::post::{ActiveModel, Entity as PostEntity};

/// Post store backed by a SeaORM connection.
pub struct SeaOrmPostStore {
    db: DbConn,
}

impl SeaOrmPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(err: DbErr) -> StoreError {
    StoreError::Query(err.to_string())
}

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn insert(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(new_post);
        tracing::debug!(post_id = %post.id, "Inserting post");

        let active: ActiveModel = post.clone().into();
        PostEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(post)
    }

    async fn insert_many(&self, new_posts: Vec<NewPost>) -> Result<Vec<Post>, StoreError> {
        let posts: Vec<Post> = new_posts.into_iter().map(Post::new).collect();
        if posts.is_empty() {
            return Ok(posts);
        }
        tracing::debug!(count = posts.len(), "Inserting post batch");

        let models: Vec<ActiveModel> = posts.iter().cloned().map(Into::into).collect();
        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(posts)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let models = PostEntity::find()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_err)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(model.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<Post>, StoreError> {
        let model = PostEntity::find()
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(model.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut post: Post = model.into();
        post.apply_patch(patch);
        tracing::debug!(post_id = %post.id, "Updating post");

        let active: ActiveModel = post.clone().into();
        active.update(&self.db).await.map_err(query_err)?;

        Ok(Some(post))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        tracing::debug!(rows = result.rows_affected, "Dropped all posts");

        Ok(())
    }
}
