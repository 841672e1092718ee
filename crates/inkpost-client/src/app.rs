//! Client shell: maps routes to views and follows their navigation requests.

use crate::api::PostApi;
use crate::context::PostContext;
use crate::route::{Navigation, Route};
use crate::views::{
    DetailScreen, EditPostPage, EditScreen, FormField, FormScreen, ListScreen, PostDetailView,
    PostForm, PostListView,
};

/// The mounted view for the current route.
#[derive(Debug)]
enum Page {
    Home(PostListView),
    NewPost(PostForm),
    Detail(PostDetailView),
    Edit(EditPostPage),
    NotFound,
}

/// Render output of the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home(ListScreen),
    NewPost(FormScreen),
    Detail(DetailScreen),
    Edit(EditScreen),
    NotFound,
}

/// One viewer: a context, the current page and a back stack.
pub struct ClientApp<A> {
    ctx: PostContext<A>,
    route: Route,
    page: Page,
    history: Vec<Route>,
}

impl<A: PostApi> ClientApp<A> {
    pub fn new(ctx: PostContext<A>) -> Self {
        Self {
            ctx,
            route: Route::Home,
            page: Page::Home(PostListView),
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn context(&self) -> &PostContext<A> {
        &self.ctx
    }

    /// Navigate to `route`, remembering the current one for `Back`.
    pub async fn open(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.route, route.clone());
        self.history.push(previous);
        self.load(route).await;
    }

    pub async fn follow(&mut self, nav: Navigation) {
        match nav {
            Navigation::To(route) => self.open(route).await,
            Navigation::Back => {
                let route = self.history.pop().unwrap_or(Route::Home);
                self.route = route.clone();
                self.load(route).await;
            }
        }
    }

    async fn load(&mut self, route: Route) {
        tracing::debug!(route = %route, "Loading page");
        self.page = match route {
            Route::Home => {
                let view = PostListView;
                view.mount(&mut self.ctx).await;
                Page::Home(view)
            }
            Route::NewPost => Page::NewPost(PostForm::create()),
            Route::PostDetail(id) => {
                let view = PostDetailView::new(id);
                view.mount(&mut self.ctx).await;
                Page::Detail(view)
            }
            Route::EditPost(id) => {
                let mut page = EditPostPage::new(id);
                page.mount(&mut self.ctx).await;
                Page::Edit(page)
            }
            Route::NotFound => Page::NotFound,
        };
    }

    pub fn screen(&self) -> Screen {
        let state = self.ctx.state();
        match &self.page {
            Page::Home(view) => Screen::Home(view.render(state)),
            Page::NewPost(form) => Screen::NewPost(form.render(state)),
            Page::Detail(view) => Screen::Detail(view.render(state)),
            Page::Edit(page) => Screen::Edit(page.render(state)),
            Page::NotFound => Screen::NotFound,
        }
    }

    /// The active form, if any, alongside the context it dispatches to.
    fn form_and_context(&mut self) -> (Option<&mut PostForm>, &mut PostContext<A>) {
        let form = match &mut self.page {
            Page::NewPost(form) => Some(form),
            Page::Edit(page) => page.form_mut(),
            _ => None,
        };
        (form, &mut self.ctx)
    }

    /// Type into a form field on the create or edit page.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) {
        if let (Some(form), ctx) = self.form_and_context() {
            form.change(field, value, ctx);
        }
    }

    /// Submit the current form and follow the resulting navigation.
    pub async fn submit_form(&mut self) {
        let nav = match self.form_and_context() {
            (Some(form), ctx) => form.submit(ctx).await,
            (None, _) => None,
        };
        if let Some(nav) = nav {
            self.follow(nav).await;
        }
    }

    /// Leave the current form without saving.
    pub async fn cancel_form(&mut self) {
        let nav = match self.form_and_context() {
            (Some(form), _) => Some(form.cancel()),
            (None, _) => None,
        };
        if let Some(nav) = nav {
            self.follow(nav).await;
        }
    }

    /// Delete the post on the detail page once `confirm` agrees.
    pub async fn delete_post<F: FnOnce() -> bool>(&mut self, confirm: F) {
        let nav = match &self.page {
            Page::Detail(view) => view.delete(&mut self.ctx, confirm).await,
            _ => None,
        };
        if let Some(nav) = nav {
            self.follow(nav).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;

    fn app() -> ClientApp<FakeApi> {
        ClientApp::new(PostContext::new(FakeApi::default()))
    }

    #[tokio::test]
    async fn test_create_flow_lands_on_detail() {
        let mut app = app();
        app.open(Route::Home).await;
        assert!(matches!(app.screen(), Screen::Home(ListScreen::Empty { .. })));

        app.open(Route::NewPost).await;
        app.edit_field(FormField::Title, "Hello");
        app.edit_field(FormField::Content, "First line\nSecond line");
        app.edit_field(FormField::Author, "Ann");
        app.submit_form().await;

        assert!(matches!(app.route(), Route::PostDetail(_)));
        match app.screen() {
            Screen::Detail(DetailScreen::Post(page)) => {
                assert_eq!(page.title, "Hello");
                assert_eq!(page.paragraphs.len(), 2);
            }
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_stays_with_errors() {
        let mut app = app();
        app.open(Route::NewPost).await;
        app.edit_field(FormField::Title, "Only a title");
        app.submit_form().await;

        assert_eq!(app.route(), &Route::NewPost);
        match app.screen() {
            Screen::NewPost(screen) => {
                assert_eq!(screen.values.title, "Only a title");
                assert_eq!(screen.errors.content.as_deref(), Some("Content is required"));
            }
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_edit_then_delete_returns_home() {
        let mut app = app();
        let post = app.context().api().seed("Draft", "Body");

        app.open(Route::EditPost(post.id.clone())).await;
        app.edit_field(FormField::Title, "Final");
        app.submit_form().await;
        assert_eq!(app.route(), &Route::PostDetail(post.id.clone()));

        app.delete_post(|| true).await;
        assert_eq!(app.route(), &Route::Home);
        assert!(matches!(app.screen(), Screen::Home(ListScreen::Empty { .. })));
    }

    #[tokio::test]
    async fn test_cancel_goes_back() {
        let mut app = app();
        app.open(Route::Home).await;
        app.open(Route::NewPost).await;
        app.cancel_form().await;

        assert_eq!(app.route(), &Route::Home);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let mut app = app();
        app.open(Route::parse("/nowhere")).await;
        assert_eq!(app.screen(), Screen::NotFound);
    }
}
