use crate::posts::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A fetch was started.
    Load,
    /// The fetch returned posts. Ignored unless a fetch is in flight.
    Loaded(Vec<Post>),
    /// The fetch failed. Ignored unless a fetch is in flight.
    Failed(String),
    SelectNext,
    SelectPrev,
    Close,
}

impl Intent for PostsIntent {}
