//! Field validation shared by the create and update paths.

use std::fmt;

use serde::Serialize;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// A validated field of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostField {
    Title,
    Content,
    Author,
}

impl PostField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Content => "content",
            PostField::Author => "author",
        }
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single offending field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: PostField,
    pub message: String,
}

/// Every field error found in one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: PostField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<PostField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validate the three required post fields.
///
/// `None` means the field was not supplied at all; it is treated like an
/// empty value. Whitespace-only values are rejected.
pub fn validate(
    title: Option<&str>,
    content: Option<&str>,
    author: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    match title {
        _ if is_blank(title) => errors.push(PostField::Title, "Please provide title"),
        Some(t) if t.trim().chars().count() > TITLE_MAX_CHARS => errors.push(
            PostField::Title,
            format!("Title cannot be more than {TITLE_MAX_CHARS} characters"),
        ),
        _ => {}
    }

    if is_blank(content) {
        errors.push(PostField::Content, "Please provide content");
    }

    if is_blank(author) {
        errors.push(PostField::Author, "Please provide author");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
