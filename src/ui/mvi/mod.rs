//! Model-View-Intent primitives for view-local state.
//!
//! State that only one view cares about (popup contents, selection) does
//! not go through the shared [`Store`](crate::store::Store). It is held by
//! the view and driven by a [`Reducer`]:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
