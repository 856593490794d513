/// Marker trait for view-local state.
///
/// `PartialEq` lets the view skip redraws when a reduction changed nothing;
/// `Default` gives the starting state and the placeholder used while the
/// current value is moved into the reducer.
pub trait UiState: Clone + PartialEq + Default + 'static {}
