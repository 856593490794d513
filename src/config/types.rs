use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::view::RenderPolicy;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub posts: PostsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Starting value of the counter slice (default: 0).
    #[serde(default)]
    pub initial: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Re-render policy for bound views (default: "on-change").
    #[serde(default)]
    pub render_policy: RenderPolicy,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostsConfig {
    /// JSON file backing the posts panel. Built-in sample posts when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            render_policy: RenderPolicy::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
