//! Single-post view opened from the posts panel.
//!
//! Like the list, it owns its loading and error state; fetch failures never
//! reach the counter store.

mod intent;
mod reducer;
mod state;

pub use intent::PostDetailIntent;
pub use reducer::PostDetailReducer;
pub use state::{PostDetailState, POST_FETCH_FAILED_MESSAGE, POST_NOT_FOUND_MESSAGE};
