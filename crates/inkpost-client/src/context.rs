//! Post context - the state store bound to an API.
//!
//! Each operation dispatches its `Begin` transition, awaits the API and then
//! dispatches `Success` or `Error`. Nothing de-duplicates overlapping calls;
//! whichever settles last wins.

use inkpost_shared::dto::{CreatePostRequest, PostDto, UpdatePostRequest};

use crate::api::{ApiError, PostApi};
use crate::state::{PostState, Transition, reduce};

/// Owns the client state and the API it mirrors.
pub struct PostContext<A> {
    state: PostState,
    api: A,
}

impl<A: PostApi> PostContext<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: PostState::default(),
            api,
        }
    }

    pub fn state(&self) -> &PostState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Apply a transition. All state changes go through here.
    pub fn dispatch(&mut self, transition: Transition) {
        tracing::trace!(?transition, "dispatch");
        reduce(&mut self.state, transition);
    }

    pub async fn fetch_posts(&mut self) {
        self.dispatch(Transition::FetchPostsBegin);
        match self.api.list_posts().await {
            Ok(posts) => self.dispatch(Transition::FetchPostsSuccess(posts)),
            Err(e) => self.dispatch(Transition::FetchPostsError(e.user_message())),
        }
    }

    pub async fn fetch_post(&mut self, id: &str) {
        self.dispatch(Transition::FetchPostBegin);
        match self.api.get_post(id).await {
            Ok(post) => self.dispatch(Transition::FetchPostSuccess(post)),
            Err(e) => self.dispatch(Transition::FetchPostError(e.user_message())),
        }
    }

    /// Create a post; the error is recorded in state and also returned.
    pub async fn create_post(&mut self, req: CreatePostRequest) -> Result<PostDto, ApiError> {
        self.dispatch(Transition::CreatePostBegin);
        match self.api.create_post(&req).await {
            Ok(post) => {
                self.dispatch(Transition::CreatePostSuccess(post.clone()));
                Ok(post)
            }
            Err(e) => {
                self.dispatch(Transition::CreatePostError(e.user_message()));
                Err(e)
            }
        }
    }

    pub async fn update_post(
        &mut self,
        id: &str,
        req: UpdatePostRequest,
    ) -> Result<PostDto, ApiError> {
        self.dispatch(Transition::UpdatePostBegin);
        match self.api.update_post(id, &req).await {
            Ok(post) => {
                self.dispatch(Transition::UpdatePostSuccess(post.clone()));
                Ok(post)
            }
            Err(e) => {
                self.dispatch(Transition::UpdatePostError(e.user_message()));
                Err(e)
            }
        }
    }

    pub async fn delete_post(&mut self, id: &str) -> Result<(), ApiError> {
        self.dispatch(Transition::DeletePostBegin);
        match self.api.delete_post(id).await {
            Ok(()) => {
                self.dispatch(Transition::DeletePostSuccess(id.to_string()));
                Ok(())
            }
            Err(e) => {
                self.dispatch(Transition::DeletePostError(e.user_message()));
                Err(e)
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.dispatch(Transition::ClearError);
    }
}
