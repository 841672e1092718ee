//! Headless view components.
//!
//! Views read [`PostState`](crate::state::PostState), trigger context
//! operations on mount or user action, and answer with a render description
//! plus an optional [`Navigation`](crate::route::Navigation).

pub mod detail;
pub mod edit;
pub mod form;
pub mod list;

pub use detail::{DetailScreen, PostDetailView, PostPage};
pub use edit::{EditPostPage, EditScreen};
pub use form::{FieldErrors, FormField, FormFields, FormMode, FormScreen, PostForm};
pub use list::{ListScreen, PostListView, PostSummary, excerpt};

/// Dates are shown as `YYYY-MM-DD`.
pub(crate) fn display_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
