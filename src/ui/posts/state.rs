use crate::posts::Post;
use crate::ui::mvi::UiState;

/// Message shown in place of the list when a fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch posts";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostsState {
    #[default]
    Idle,
    Loading,
    Loaded {
        posts: Vec<Post>,
        selected: usize,
    },
    Failed {
        message: String,
    },
}

impl UiState for PostsState {}

impl PostsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match self {
            Self::Loaded { posts, selected } => posts.get(*selected),
            _ => None,
        }
    }
}
