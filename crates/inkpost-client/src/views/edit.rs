//! Edit page: loads the post, then hands over to the form.

use crate::api::PostApi;
use crate::context::PostContext;
use crate::route::Route;
use crate::state::PostState;

use super::form::{FormScreen, PostForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditScreen {
    Loading,
    Error(String),
    /// Nothing to edit; go here instead.
    Redirect(Route),
    Form(FormScreen),
}

#[derive(Debug, Clone)]
pub struct EditPostPage {
    id: String,
    form: Option<PostForm>,
}

impl EditPostPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: None,
        }
    }

    /// Fetch the post and seed the form from it.
    pub async fn mount<A: PostApi>(&mut self, ctx: &mut PostContext<A>) {
        ctx.fetch_post(&self.id).await;
        self.form = ctx
            .state()
            .current_post
            .as_ref()
            .filter(|post| post.id == self.id)
            .map(PostForm::edit);
    }

    pub fn form_mut(&mut self) -> Option<&mut PostForm> {
        self.form.as_mut()
    }

    pub fn render(&self, state: &PostState) -> EditScreen {
        if state.is_loading {
            return EditScreen::Loading;
        }
        // Once the form is up, server errors render inline in it
        match (&self.form, &state.error) {
            (Some(form), _) => EditScreen::Form(form.render(state)),
            (None, Some(error)) => EditScreen::Error(error.clone()),
            (None, None) => EditScreen::Redirect(Route::Home),
        }
    }
}
