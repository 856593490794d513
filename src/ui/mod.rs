pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod post_detail;
pub mod posts;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
