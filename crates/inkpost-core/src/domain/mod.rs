//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{NewPost, Post, PostChanges};
pub use validation::{FieldError, PostField, TITLE_MAX_CHARS, ValidationErrors, validate};
