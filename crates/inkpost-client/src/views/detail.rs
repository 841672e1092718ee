//! Single post view with delete.

use crate::api::PostApi;
use crate::context::PostContext;
use crate::route::{Navigation, Route};
use crate::state::PostState;

use super::display_date;

/// Rendered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub title: String,
    pub author: String,
    pub created: String,
    /// Present only when the post was modified after creation.
    pub updated: Option<String>,
    pub paragraphs: Vec<String>,
    pub back_link: Route,
    pub edit_link: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailScreen {
    Loading,
    Error(String),
    NotFound,
    Post(PostPage),
}

/// Shows the post named by the route id.
#[derive(Debug, Clone)]
pub struct PostDetailView {
    id: String,
}

impl PostDetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn mount<A: PostApi>(&self, ctx: &mut PostContext<A>) {
        ctx.fetch_post(&self.id).await;
    }

    /// Follow a route change to another post; refetches only when the id differs.
    pub async fn set_id<A: PostApi>(&mut self, id: &str, ctx: &mut PostContext<A>) {
        if self.id != id {
            self.id = id.to_string();
            self.mount(ctx).await;
        }
    }

    pub fn render(&self, state: &PostState) -> DetailScreen {
        if state.is_loading {
            return DetailScreen::Loading;
        }
        if let Some(error) = &state.error {
            return DetailScreen::Error(error.clone());
        }
        let Some(post) = &state.current_post else {
            return DetailScreen::NotFound;
        };

        DetailScreen::Post(PostPage {
            title: post.title.clone(),
            author: post.author.clone(),
            created: display_date(&post.created_at),
            updated: (post.updated_at != post.created_at).then(|| display_date(&post.updated_at)),
            paragraphs: post.content.split('\n').map(String::from).collect(),
            back_link: Route::Home,
            edit_link: Route::EditPost(self.id.clone()),
        })
    }

    /// Delete after `confirm` agrees. Navigates home on success; failures
    /// stay in state.
    pub async fn delete<A, F>(&self, ctx: &mut PostContext<A>, confirm: F) -> Option<Navigation>
    where
        A: PostApi,
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return None;
        }

        match ctx.delete_post(&self.id).await {
            Ok(()) => Some(Navigation::To(Route::Home)),
            Err(e) => {
                tracing::debug!(post_id = %self.id, error = %e, "Delete failed");
                None
            }
        }
    }
}
