/// Marker trait for view-local intents (key presses, fetch results).
pub trait Intent: 'static {}
