//! Post data source used by the posts panel.
//!
//! The store never sees fetch failures: the panel turns them into its own
//! error state (see [`crate::ui::posts`]).

mod source;

pub use source::{InMemoryPostSource, JsonFilePostSource};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A post in the JSONPlaceholder shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Fields supplied when creating a post; the source assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to read posts from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write posts to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse posts from '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Post {id} not found")]
    NotFound { id: u64 },

    #[error("Post source unavailable: {0}")]
    Unavailable(String),
}

/// Remote data fetcher. Any call may fail; callers own loading and error
/// state.
pub trait PostSource {
    fn all_posts(&self) -> Result<Vec<Post>, FetchError>;

    fn post(&self, id: u64) -> Result<Post, FetchError> {
        self.all_posts()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(FetchError::NotFound { id })
    }

    fn create_post(&mut self, post: NewPost) -> Result<Post, FetchError>;
}

pub(crate) fn next_post_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
