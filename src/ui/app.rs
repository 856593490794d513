use std::cell::Ref;

use tracing::warn;

use crate::counter::{CounterSnapshot, CounterView};
use crate::posts::{FetchError, PostSource};
use crate::ui::mvi::Reducer;
use crate::ui::post_detail::{
    PostDetailIntent, PostDetailReducer, PostDetailState, POST_FETCH_FAILED_MESSAGE,
};
use crate::ui::posts::{PostsIntent, PostsReducer, PostsState, FETCH_FAILED_MESSAGE};
use crate::view::UiEvent;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    Posts,
    PostDetail,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Bound to the shared counter store.
    counter: CounterView,
    /// Posts panel state (MVI pattern, view-local).
    posts: PostsState,
    /// Single post opened from the panel.
    detail: PostDetailState,
    posts_source: Box<dyn PostSource>,
    last_error: Option<String>,
}

impl App {
    pub fn new(counter: CounterView, posts_source: Box<dyn PostSource>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Counter,
            counter,
            posts: PostsState::default(),
            detail: PostDetailState::default(),
            posts_source,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn slice_name(&self) -> &str {
        self.counter.store().name()
    }

    pub fn counter(&self) -> Ref<'_, CounterSnapshot> {
        self.counter.snapshot()
    }

    pub fn counter_render_count(&self) -> usize {
        self.counter.render_count()
    }

    /// Error from the last counter dispatch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Forward a UI event to the counter view.
    pub fn on_event(&mut self, event: UiEvent) {
        match self.counter.handle_event(&event) {
            Ok(Some(_)) => self.last_error = None,
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "counter dispatch failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn posts(&self) -> &PostsState {
        &self.posts
    }

    pub fn posts_open(&self) -> bool {
        self.focus != Focus::Counter
    }

    pub fn post_detail(&self) -> &PostDetailState {
        &self.detail
    }

    pub fn post_detail_open(&self) -> bool {
        self.focus == Focus::PostDetail
    }

    /// Open the posts panel and fetch its contents.
    pub fn open_posts(&mut self) {
        self.focus = Focus::Posts;
        self.dispatch_posts(PostsIntent::Load);
        let intent = match self.posts_source.all_posts() {
            Ok(posts) => PostsIntent::Loaded(posts),
            Err(err) => {
                warn!(error = %err, "posts fetch failed");
                PostsIntent::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };
        self.dispatch_posts(intent);
    }

    pub fn close_posts(&mut self) {
        self.focus = Focus::Counter;
        self.dispatch_detail(PostDetailIntent::Close);
        self.dispatch_posts(PostsIntent::Close);
    }

    /// Fetch and show the post selected in the panel. No-op without a
    /// selection.
    pub fn open_selected_post(&mut self) {
        let Some(id) = self.posts.selected_post().map(|p| p.id) else {
            return;
        };
        self.focus = Focus::PostDetail;
        self.dispatch_detail(PostDetailIntent::Open { id });
        let intent = match self.posts_source.post(id) {
            Ok(post) => PostDetailIntent::Loaded(post),
            Err(FetchError::NotFound { .. }) => PostDetailIntent::NotFound,
            Err(err) => {
                warn!(id, error = %err, "post fetch failed");
                PostDetailIntent::Failed(POST_FETCH_FAILED_MESSAGE.to_string())
            }
        };
        self.dispatch_detail(intent);
    }

    /// Back to the list, keeping its selection.
    pub fn close_post_detail(&mut self) {
        if self.focus == Focus::PostDetail {
            self.focus = Focus::Posts;
        }
        self.dispatch_detail(PostDetailIntent::Close);
    }

    pub fn toggle_posts(&mut self) {
        if self.posts_open() {
            self.close_posts();
        } else {
            self.open_posts();
        }
    }

    pub fn select_next_post(&mut self) {
        self.dispatch_posts(PostsIntent::SelectNext);
    }

    pub fn select_prev_post(&mut self) {
        self.dispatch_posts(PostsIntent::SelectPrev);
    }

    fn dispatch_posts(&mut self, intent: PostsIntent) {
        dispatch_mvi!(self, posts, PostsReducer, intent);
    }

    fn dispatch_detail(&mut self, intent: PostDetailIntent) {
        dispatch_mvi!(self, detail, PostDetailReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{counter_slice, CounterState};
    use crate::posts::{InMemoryPostSource, NewPost, Post};
    use crate::store::Store;
    use crate::view::{Button, RenderPolicy};
    use std::rc::Rc;

    fn make_app(initial: i64, source: InMemoryPostSource) -> App {
        let store = Rc::new(Store::new(counter_slice(CounterState::new(initial))));
        App::new(
            CounterView::attach(&store, RenderPolicy::OnChange),
            Box::new(source),
        )
    }

    #[test]
    fn events_drive_counter() {
        let mut app = make_app(0, InMemoryPostSource::sample());
        app.on_event(UiEvent::Click(Button::Increment));
        app.on_event(UiEvent::Key('+'));
        assert_eq!(app.counter().value, 2);
        assert_eq!(app.counter().label, "Counter: 2");
        assert!(app.last_error().is_none());
    }

    #[test]
    fn overflow_is_reported_and_cleared() {
        let mut app = make_app(i64::MAX, InMemoryPostSource::sample());
        app.on_event(UiEvent::Click(Button::Increment));
        assert!(app.last_error().is_some_and(|e| e.contains("overflow")));
        assert_eq!(app.counter().value, i64::MAX);

        app.on_event(UiEvent::Click(Button::Reset));
        assert!(app.last_error().is_none());
        assert_eq!(app.counter().value, 0);
    }

    #[test]
    fn opening_posts_loads_them() {
        let mut app = make_app(0, InMemoryPostSource::sample());
        app.open_posts();
        assert!(app.posts_open());
        assert_eq!(app.focus(), Focus::Posts);
        assert!(matches!(app.posts(), PostsState::Loaded { posts, selected: 0 } if posts.len() == 3));
    }

    #[test]
    fn failed_fetch_shows_error_message() {
        let mut app = make_app(0, InMemoryPostSource::failing("offline"));
        app.open_posts();
        assert_eq!(
            app.posts(),
            &PostsState::Failed {
                message: FETCH_FAILED_MESSAGE.to_string()
            }
        );
        assert!(app.last_error().is_none());
    }

    /// Lists the sample posts; single-post lookups fail with `error`.
    struct LookupFails {
        error: fn(u64) -> FetchError,
    }

    impl PostSource for LookupFails {
        fn all_posts(&self) -> Result<Vec<Post>, FetchError> {
            InMemoryPostSource::sample().all_posts()
        }

        fn post(&self, id: u64) -> Result<Post, FetchError> {
            Err((self.error)(id))
        }

        fn create_post(&mut self, _post: NewPost) -> Result<Post, FetchError> {
            Err(FetchError::Unavailable("read-only".into()))
        }
    }

    fn app_with_source(source: impl PostSource + 'static) -> App {
        let store = Rc::new(Store::new(counter_slice(CounterState::default())));
        App::new(
            CounterView::attach(&store, RenderPolicy::OnChange),
            Box::new(source),
        )
    }

    #[test]
    fn opening_selected_post_fetches_it() {
        let mut app = make_app(0, InMemoryPostSource::sample());
        app.open_posts();
        app.select_next_post();
        app.open_selected_post();

        assert_eq!(app.focus(), Focus::PostDetail);
        assert!(app.posts_open());
        let post = app.post_detail().post().unwrap();
        assert_eq!(post.id, 2);
        assert_eq!(post.title, "Dispatching actions");
    }

    #[test]
    fn missing_post_is_reported_as_not_found() {
        let mut app = app_with_source(LookupFails {
            error: |id| FetchError::NotFound { id },
        });
        app.open_posts();
        app.open_selected_post();
        assert_eq!(app.post_detail(), &PostDetailState::NotFound { id: 1 });
    }

    #[test]
    fn failed_post_fetch_shows_fixed_message() {
        let mut app = app_with_source(LookupFails {
            error: |_| FetchError::Unavailable("timeout".into()),
        });
        app.open_posts();
        app.open_selected_post();
        assert_eq!(
            app.post_detail(),
            &PostDetailState::Failed {
                message: "Failed to fetch post".to_string()
            }
        );
    }

    #[test]
    fn open_selected_post_without_list_does_nothing() {
        let mut app = make_app(0, InMemoryPostSource::failing("offline"));
        app.open_posts();
        app.open_selected_post();
        assert_eq!(app.focus(), Focus::Posts);
        assert!(!app.post_detail().is_open());
    }

    #[test]
    fn closing_detail_keeps_list_selection() {
        let mut app = make_app(0, InMemoryPostSource::sample());
        app.open_posts();
        app.select_next_post();
        app.select_next_post();
        app.open_selected_post();
        app.close_post_detail();

        assert_eq!(app.focus(), Focus::Posts);
        assert_eq!(app.post_detail(), &PostDetailState::Closed);
        assert_eq!(app.posts().selected_post().map(|p| p.id), Some(3));
    }

    #[test]
    fn toggle_closes_posts() {
        let mut app = make_app(0, InMemoryPostSource::sample());
        app.toggle_posts();
        app.toggle_posts();
        assert!(!app.posts_open());
        assert_eq!(app.posts(), &PostsState::Idle);
    }
}
