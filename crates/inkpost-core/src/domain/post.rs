use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{ValidationErrors, validate};

/// Post entity - a titled, authored block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a post. Missing fields fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Partial replacement applied by an update. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Post {
    /// Validate the fields and build a new post stamped with `now`.
    pub fn create(fields: NewPost, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
        validate(
            fields.title.as_deref(),
            fields.content.as_deref(),
            fields.author.as_deref(),
        )?;

        Ok(Self {
            id: Uuid::new_v4(),
            title: fields.title.unwrap_or_default().trim().to_string(),
            content: fields.content.unwrap_or_default(),
            author: fields.author.unwrap_or_default().trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge `changes` over this post and re-validate the result.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub fn with_changes(
        &self,
        changes: PostChanges,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationErrors> {
        let title = changes.title.unwrap_or_else(|| self.title.clone());
        let content = changes.content.unwrap_or_else(|| self.content.clone());
        let author = changes.author.unwrap_or_else(|| self.author.clone());

        validate(Some(&title), Some(&content), Some(&author))?;

        Ok(Self {
            id: self.id,
            title: title.trim().to_string(),
            content,
            author: author.trim().to_string(),
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        })
    }
}
