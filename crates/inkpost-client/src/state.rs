//! Client state store.
//!
//! A single state value changed only by [`reduce`]. Every API call produces a
//! `*Begin` transition followed by exactly one `*Success` or `*Error`, so
//! `is_loading` never stays set once a call settles.

use inkpost_shared::dto::PostDto;

/// Everything the views render from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostState {
    pub posts: Vec<PostDto>,
    pub current_post: Option<PostDto>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// The closed set of state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    FetchPostsBegin,
    FetchPostsSuccess(Vec<PostDto>),
    FetchPostsError(String),

    FetchPostBegin,
    FetchPostSuccess(PostDto),
    FetchPostError(String),

    CreatePostBegin,
    CreatePostSuccess(PostDto),
    CreatePostError(String),

    UpdatePostBegin,
    UpdatePostSuccess(PostDto),
    UpdatePostError(String),

    DeletePostBegin,
    /// Carries the id of the deleted post.
    DeletePostSuccess(String),
    DeletePostError(String),

    ClearError,
}

/// Apply one transition to the state.
pub fn reduce(state: &mut PostState, transition: Transition) {
    match transition {
        Transition::FetchPostsBegin
        | Transition::FetchPostBegin
        | Transition::CreatePostBegin
        | Transition::UpdatePostBegin
        | Transition::DeletePostBegin => {
            state.is_loading = true;
            state.error = None;
        }

        Transition::FetchPostsError(msg)
        | Transition::FetchPostError(msg)
        | Transition::CreatePostError(msg)
        | Transition::UpdatePostError(msg)
        | Transition::DeletePostError(msg) => {
            state.is_loading = false;
            state.error = Some(msg);
        }

        Transition::FetchPostsSuccess(posts) => {
            state.is_loading = false;
            state.posts = posts;
        }
        Transition::FetchPostSuccess(post) => {
            state.is_loading = false;
            state.current_post = Some(post);
        }
        Transition::CreatePostSuccess(post) => {
            state.is_loading = false;
            state.posts.insert(0, post);
        }
        Transition::UpdatePostSuccess(post) => {
            state.is_loading = false;
            if let Some(slot) = state.posts.iter_mut().find(|p| p.id == post.id) {
                *slot = post.clone();
            }
            state.current_post = Some(post);
        }
        Transition::DeletePostSuccess(id) => {
            state.is_loading = false;
            state.posts.retain(|p| p.id != id);
        }

        Transition::ClearError => state.error = None,
    }
}
