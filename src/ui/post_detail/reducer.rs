use crate::ui::mvi::Reducer;
use crate::ui::post_detail::intent::PostDetailIntent;
use crate::ui::post_detail::state::PostDetailState;

pub struct PostDetailReducer;

impl Reducer for PostDetailReducer {
    type State = PostDetailState;
    type Intent = PostDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostDetailIntent::Open { id } => PostDetailState::Loading { id },
            PostDetailIntent::Loaded(post) => match state {
                PostDetailState::Loading { id } if id == post.id => {
                    PostDetailState::Loaded { post }
                }
                // A different post was requested in the meantime
                other => other,
            },
            PostDetailIntent::NotFound => match state {
                PostDetailState::Loading { id } => PostDetailState::NotFound { id },
                other => other,
            },
            PostDetailIntent::Failed(message) => match state {
                PostDetailState::Loading { .. } => PostDetailState::Failed { message },
                other => other,
            },
            PostDetailIntent::Close => PostDetailState::Closed,
        }
    }
}
