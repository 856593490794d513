use crate::posts::Post;
use crate::ui::mvi::UiState;

/// Shown when fetching a single post fails.
pub const POST_FETCH_FAILED_MESSAGE: &str = "Failed to fetch post";

/// Shown when the source has no post with the requested id.
pub const POST_NOT_FOUND_MESSAGE: &str = "No post found";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostDetailState {
    #[default]
    Closed,
    Loading {
        id: u64,
    },
    Loaded {
        post: Post,
    },
    NotFound {
        id: u64,
    },
    Failed {
        message: String,
    },
}

impl UiState for PostDetailState {}

impl PostDetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn post(&self) -> Option<&Post> {
        match self {
            Self::Loaded { post } => Some(post),
            _ => None,
        }
    }
}
