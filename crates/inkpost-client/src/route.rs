//! Client-side routes.

use std::fmt;

/// A page the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - the post list.
    Home,
    /// `/posts/new`
    NewPost,
    /// `/posts/{id}`
    PostDetail(String),
    /// `/posts/{id}/edit`
    EditPost(String),
    /// Anything else.
    NotFound,
}

impl Route {
    /// Parse a path, ignoring any query string and trailing slash.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["posts", "new"] => Route::NewPost,
            ["posts", id] => Route::PostDetail((*id).to_string()),
            ["posts", id, "edit"] => Route::EditPost((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::NewPost => "/posts/new".to_string(),
            Route::PostDetail(id) => format!("/posts/{id}"),
            Route::EditPost(id) => format!("/posts/{id}/edit"),
            Route::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A navigation request emitted by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(Route),
    Back,
}
