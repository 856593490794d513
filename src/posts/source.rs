use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::posts::{next_post_id, FetchError, NewPost, Post, PostSource};

/// Posts held in memory. Used for the built-in demo data and in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostSource {
    posts: Vec<Post>,
    failure: Option<String>,
}

impl InMemoryPostSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            failure: None,
        }
    }

    /// A source whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            posts: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn sample() -> Self {
        let posts = [
            (1, "Getting started with slices", "A slice owns one value and a table of mutators."),
            (1, "Dispatching actions", "Every action names the mutator that should run."),
            (2, "Subscribing views", "Views re-read the store after each notification."),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (user_id, title, body))| Post {
            user_id,
            id: i as u64 + 1,
            title: title.to_string(),
            body: body.to_string(),
        })
        .collect();
        Self::new(posts)
    }

    fn check(&self) -> Result<(), FetchError> {
        match &self.failure {
            Some(message) => Err(FetchError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl PostSource for InMemoryPostSource {
    fn all_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.check()?;
        Ok(self.posts.clone())
    }

    fn create_post(&mut self, post: NewPost) -> Result<Post, FetchError> {
        self.check()?;
        let created = Post {
            user_id: post.user_id,
            id: next_post_id(&self.posts),
            title: post.title,
            body: post.body,
        };
        self.posts.push(created.clone());
        Ok(created)
    }
}

/// Posts stored as a JSON array on disk. Created posts are written back.
#[derive(Debug, Clone)]
pub struct JsonFilePostSource {
    path: PathBuf,
}

impl JsonFilePostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for JsonFilePostSource {
    fn all_posts(&self) -> Result<Vec<Post>, FetchError> {
        let content = fs::read_to_string(&self.path).map_err(|e| FetchError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let posts: Vec<Post> = serde_json::from_str(&content).map_err(|e| FetchError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), count = posts.len(), "posts loaded");
        Ok(posts)
    }

    fn create_post(&mut self, post: NewPost) -> Result<Post, FetchError> {
        let mut posts = if self.path.exists() {
            self.all_posts()?
        } else {
            Vec::new()
        };
        let created = Post {
            user_id: post.user_id,
            id: next_post_id(&posts),
            title: post.title,
            body: post.body,
        };
        posts.push(created.clone());

        let content = serde_json::to_string_pretty(&posts).map_err(|e| FetchError::Write {
            path: self.path.clone(),
            source: e.into(),
        })?;
        fs::write(&self.path, content).map_err(|e| FetchError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), id = created.id, "post created");
        Ok(created)
    }
}
