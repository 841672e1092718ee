//! Post store - the five CRUD operations over posts.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::{DomainError, RepoError};
use crate::ports::{Clock, PostRepository};

/// CRUD service over posts.
///
/// Validation and timestamps live here; persistence is delegated to the
/// repository. Concurrent updates to the same post are last-write-wins.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

/// Parse a post identifier. Malformed ids are indistinguishable from unknown ones.
fn parse_id(id: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(id).map_err(|_| DomainError::post_not_found(id))
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all_newest_first().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        let uuid = parse_id(id)?;
        self.repo
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn create(&self, fields: NewPost) -> Result<Post, DomainError> {
        let post = Post::create(fields, self.clock.now())?;
        let saved = self.repo.insert(post).await?;
        tracing::debug!(post_id = %saved.id, "Post created");
        Ok(saved)
    }

    pub async fn update(&self, id: &str, changes: PostChanges) -> Result<Post, DomainError> {
        let existing = self.get(id).await?;
        let merged = existing.with_changes(changes, self.clock.now())?;

        let saved = self.repo.update(merged).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::debug!(post_id = %saved.id, "Post updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let uuid = parse_id(id)?;
        self.repo.delete(uuid).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })?;
        tracing::debug!(post_id = %uuid, "Post deleted");
        Ok(())
    }
}
