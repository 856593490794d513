use std::cell::Ref;
use std::rc::Rc;

use crate::counter::{CounterAction, CounterState};
use crate::store::{Dispatched, Store, StoreError};
use crate::view::{Button, RenderPolicy, UiEvent, ViewBinding};

/// What the counter panel displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub value: i64,
    pub label: String,
}

impl CounterSnapshot {
    fn from_state(state: &CounterState) -> Self {
        Self {
            value: state.value,
            label: format!("Counter: {}", state.value),
        }
    }
}

pub struct CounterView {
    binding: ViewBinding<CounterState, CounterSnapshot>,
}

impl CounterView {
    pub fn attach(store: &Rc<Store<CounterState>>, policy: RenderPolicy) -> Self {
        Self {
            binding: ViewBinding::attach(store, policy, CounterSnapshot::from_state),
        }
    }

    pub fn snapshot(&self) -> Ref<'_, CounterSnapshot> {
        self.binding.output()
    }

    pub fn render_count(&self) -> usize {
        self.binding.render_count()
    }

    pub fn store(&self) -> &Rc<Store<CounterState>> {
        self.binding.store()
    }

    /// Map a UI event to a counter action and dispatch it.
    ///
    /// Returns `Ok(None)` for events the counter does not react to.
    pub fn handle_event(&self, event: &UiEvent) -> Result<Option<Dispatched>, StoreError> {
        let Some(action) = Self::action_for(event) else {
            return Ok(None);
        };
        self.binding.emit(action.into()).map(Some)
    }

    pub fn action_for(event: &UiEvent) -> Option<CounterAction> {
        match event {
            UiEvent::Click(Button::Increment) | UiEvent::Key('+') => Some(CounterAction::Increment),
            UiEvent::Click(Button::Decrement) | UiEvent::Key('-') => Some(CounterAction::Decrement),
            UiEvent::Click(Button::Reset) | UiEvent::Key('r') | UiEvent::Key('0') => {
                Some(CounterAction::Reset)
            }
            UiEvent::Click(Button::Placeholder) | UiEvent::Key(_) => None,
        }
    }
}
