use crate::posts::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostDetailIntent {
    /// Fetching post `id` started.
    Open { id: u64 },
    /// The fetch returned a post. Ignored unless that id is being fetched.
    Loaded(Post),
    /// The source has no post with the requested id.
    NotFound,
    /// The fetch failed. Ignored unless a fetch is in flight.
    Failed(String),
    Close,
}

impl Intent for PostDetailIntent {}
