use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;

/// Persistence port for posts.
///
/// Missing records are values, not errors: `find_by_id` and `update_by_id`
/// return `None`, `delete_by_id` returns `false`. Every write must be
/// durable before the call returns.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a single post, assigning its id.
    async fn insert(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Persist a batch of posts, assigning ids. Used by test seeding.
    async fn insert_many(&self, new_posts: Vec<NewPost>) -> Result<Vec<Post>, StoreError>;

    /// Every persisted post. Order is not contractually fixed.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Number of persisted posts.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Look up a post by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// An arbitrary existing post, if any.
    async fn find_one(&self) -> Result<Option<Post>, StoreError>;

    /// Apply a partial update; returns the updated post, or `None` if the
    /// id does not exist.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError>;

    /// Delete a post by id; returns `false` if the id does not exist.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Remove every post. Used by the test harness between cases, never by
    /// request handling.
    async fn drop_all(&self) -> Result<(), StoreError>;
}
