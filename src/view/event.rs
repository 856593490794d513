/// Clickable controls a view can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increment,
    Decrement,
    Reset,
    /// A control with no handler wired up. Maps to no action.
    Placeholder,
}

/// User input delivered to a view. Each view decides which action, if
/// any, an event becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(Button),
    Key(char),
}
