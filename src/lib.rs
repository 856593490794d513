//! A single-slice state container with a terminal front end.
//!
//! - [`store`]: the slice, its mutators, dispatch and subscriptions
//! - [`view`]: render bindings that follow a store
//! - [`counter`]: the counter slice and its view
//! - [`posts`]: the post data source shown in the posts panel
//! - [`ui`]: ratatui front end

pub mod config;
pub mod counter;
pub mod logging;
pub mod posts;
pub mod store;
pub mod ui;
pub mod view;
