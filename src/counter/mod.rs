//! Counter slice: a single integer with `increment`, `decrement` and `reset`.

mod view;

pub use view::{CounterSnapshot, CounterView};

use serde::{Deserialize, Serialize};

use crate::store::{Action, MutatorError, Slice};

pub const SLICE_NAME: &str = "counter";

pub const INCREMENT: &str = "increment";
pub const DECREMENT: &str = "decrement";
pub const RESET: &str = "reset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

/// Typed counter vocabulary. Converts into the untyped [`Action`] the
/// store routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub fn kind(self) -> &'static str {
        match self {
            CounterAction::Increment => INCREMENT,
            CounterAction::Decrement => DECREMENT,
            CounterAction::Reset => RESET,
        }
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        Action::new(action.kind())
    }
}

pub fn increment() -> Action {
    CounterAction::Increment.into()
}

pub fn decrement() -> Action {
    CounterAction::Decrement.into()
}

pub fn reset() -> Action {
    CounterAction::Reset.into()
}

/// Build the counter slice starting at `initial`.
pub fn counter_slice(initial: CounterState) -> Slice<CounterState> {
    Slice::builder(SLICE_NAME, initial)
        .try_mutator(INCREMENT, |state: &CounterState, _| {
            state
                .value
                .checked_add(1)
                .map(CounterState::new)
                .ok_or(MutatorError::Overflow)
        })
        .try_mutator(DECREMENT, |state: &CounterState, _| {
            state
                .value
                .checked_sub(1)
                .map(CounterState::new)
                .ok_or(MutatorError::Overflow)
        })
        .mutator(RESET, |_, _| CounterState::default())
        .build()
}
