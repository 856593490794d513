mod intent;
mod reducer;
mod state;

pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::{PostsState, FETCH_FAILED_MESSAGE};
