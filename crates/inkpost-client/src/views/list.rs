//! Post list view.

use inkpost_shared::dto::PostDto;

use crate::api::PostApi;
use crate::context::PostContext;
use crate::route::Route;
use crate::state::PostState;

use super::display_date;

/// Excerpt length, in characters.
pub const EXCERPT_CHARS: usize = 150;

/// First 150 characters of `content`, with `...` only when something was cut.
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// One card in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub excerpt: String,
    pub link: Route,
}

impl From<&PostDto> for PostSummary {
    fn from(post: &PostDto) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            byline: format!("By {} on {}", post.author, display_date(&post.created_at)),
            excerpt: excerpt(&post.content),
            link: Route::PostDetail(post.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    Loading,
    Error(String),
    /// No posts yet; offers a link to the create form.
    Empty { create_link: Route },
    Posts(Vec<PostSummary>),
}

/// Lists every post, newest first as served.
#[derive(Debug, Default)]
pub struct PostListView;

impl PostListView {
    pub async fn mount<A: PostApi>(&self, ctx: &mut PostContext<A>) {
        ctx.fetch_posts().await;
    }

    pub fn render(&self, state: &PostState) -> ListScreen {
        if state.is_loading {
            return ListScreen::Loading;
        }
        if let Some(error) = &state.error {
            return ListScreen::Error(error.clone());
        }
        if state.posts.is_empty() {
            return ListScreen::Empty {
                create_link: Route::NewPost,
            };
        }
        ListScreen::Posts(state.posts.iter().map(PostSummary::from).collect())
    }
}
