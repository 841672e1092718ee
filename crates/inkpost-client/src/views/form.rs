//! Create/edit form shared by both pages.

use inkpost_shared::dto::{CreatePostRequest, PostDto, UpdatePostRequest};

use crate::api::PostApi;
use crate::context::PostContext;
use crate::route::{Navigation, Route};
use crate::state::PostState;

/// Longest title the form accepts, in characters.
pub const TITLE_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Author,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    fn slot(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
            FormField::Author => &mut self.author,
        }
    }
}

/// What the form looks like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScreen {
    pub heading: &'static str,
    pub submit_label: &'static str,
    /// Server-side error from the last submit.
    pub api_error: Option<String>,
    pub values: FormFields,
    pub errors: FieldErrors,
}

/// Form state for creating or editing a post.
#[derive(Debug, Clone)]
pub struct PostForm {
    mode: FormMode,
    fields: FormFields,
    errors: FieldErrors,
}

impl PostForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            fields: FormFields::default(),
            errors: FieldErrors::default(),
        }
    }

    /// Form pre-filled from an existing post.
    pub fn edit(post: &PostDto) -> Self {
        Self {
            mode: FormMode::Edit {
                id: post.id.clone(),
            },
            fields: FormFields {
                title: post.title.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
            },
            errors: FieldErrors::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Keystroke in `field`: stores the value and clears both that field's
    /// error and any server error.
    pub fn change<A: PostApi>(
        &mut self,
        field: FormField,
        value: impl Into<String>,
        ctx: &mut PostContext<A>,
    ) {
        let value = value.into();
        match field {
            FormField::Title => self.fields.title = value,
            FormField::Content => self.fields.content = value,
            FormField::Author => self.fields.author = value,
        }

        self.errors.slot(field).take();

        if ctx.state().error.is_some() {
            ctx.clear_error();
        }
    }

    /// Run client-side checks, replacing the field errors. Returns `true` when valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();
        let title = self.fields.title.trim();

        if title.is_empty() {
            errors.title = Some("Title is required".to_string());
        } else if title.chars().count() > TITLE_LIMIT {
            errors.title = Some(format!(
                "Title cannot be more than {TITLE_LIMIT} characters"
            ));
        }

        if self.fields.content.trim().is_empty() {
            errors.content = Some("Content is required".to_string());
        }

        if self.fields.author.trim().is_empty() {
            errors.author = Some("Author is required".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate, then create or update. On success navigates to the post.
    pub async fn submit<A: PostApi>(&mut self, ctx: &mut PostContext<A>) -> Option<Navigation> {
        if !self.validate() {
            return None;
        }

        let fields = self.fields.clone();
        let result = match &self.mode {
            FormMode::Create => {
                ctx.create_post(CreatePostRequest {
                    title: Some(fields.title),
                    content: Some(fields.content),
                    author: Some(fields.author),
                })
                .await
            }
            FormMode::Edit { id } => {
                ctx.update_post(
                    id,
                    UpdatePostRequest::replace_all(fields.title, fields.content, fields.author),
                )
                .await
            }
        };

        // Failures are already in the context's error field
        result
            .ok()
            .map(|post| Navigation::To(Route::PostDetail(post.id)))
    }

    pub fn cancel(&self) -> Navigation {
        Navigation::Back
    }

    pub fn render(&self, state: &PostState) -> FormScreen {
        let (heading, submit_label) = match self.mode {
            FormMode::Create => ("Create New Post", "Create Post"),
            FormMode::Edit { .. } => ("Edit Post", "Update Post"),
        };

        FormScreen {
            heading,
            submit_label,
            api_error: state.error.clone(),
            values: self.fields.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl Default for PostForm {
    fn default() -> Self {
        Self::create()
    }
}
