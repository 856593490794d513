use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostsIntent;
use crate::ui::posts::state::PostsState;

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::Load => PostsState::Loading,
            PostsIntent::Loaded(posts) => match state {
                PostsState::Loading => PostsState::Loaded { posts, selected: 0 },
                // Panel was closed or reloaded before the result arrived
                other => other,
            },
            PostsIntent::Failed(message) => match state {
                PostsState::Loading => PostsState::Failed { message },
                other => other,
            },
            PostsIntent::SelectNext => match state {
                PostsState::Loaded { posts, selected } => {
                    let selected = if selected + 1 >= posts.len() {
                        0
                    } else {
                        selected + 1
                    };
                    PostsState::Loaded { posts, selected }
                }
                other => other,
            },
            PostsIntent::SelectPrev => match state {
                PostsState::Loaded { posts, selected } => {
                    let selected = if selected == 0 {
                        posts.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    PostsState::Loaded { posts, selected }
                }
                other => other,
            },
            PostsIntent::Close => PostsState::Idle,
        }
    }
}
