use std::collections::BTreeMap;

use crate::store::action::Action;
use crate::store::error::MutatorError;

/// Pure state transition: `(current, action) -> new`.
pub type Mutator<S> = Box<dyn Fn(&S, &Action) -> Result<S, MutatorError>>;

/// A named slice definition: initial value plus its mutator table.
///
/// The table is fixed once [`SliceBuilder::build`] returns.
pub struct Slice<S> {
    name: String,
    initial: S,
    mutators: BTreeMap<String, Mutator<S>>,
}

impl<S: 'static> Slice<S> {
    pub fn builder(name: impl Into<String>, initial: S) -> SliceBuilder<S> {
        SliceBuilder {
            name: name.into(),
            initial,
            mutators: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Registered action types in sorted order.
    pub fn action_types(&self) -> Vec<&str> {
        self.mutators.keys().map(String::as_str).collect()
    }

    pub(crate) fn into_parts(self) -> (String, S, BTreeMap<String, Mutator<S>>) {
        (self.name, self.initial, self.mutators)
    }
}

pub struct SliceBuilder<S> {
    name: String,
    initial: S,
    mutators: BTreeMap<String, Mutator<S>>,
}

impl<S: 'static> SliceBuilder<S> {
    /// Register an infallible mutator. A later registration for the same
    /// action type replaces the earlier one.
    pub fn mutator<F>(self, kind: impl Into<String>, mutate: F) -> Self
    where
        F: Fn(&S, &Action) -> S + 'static,
    {
        self.try_mutator(kind, move |state, action| Ok(mutate(state, action)))
    }

    /// Register a mutator that may reject the action.
    pub fn try_mutator<F>(mut self, kind: impl Into<String>, mutate: F) -> Self
    where
        F: Fn(&S, &Action) -> Result<S, MutatorError> + 'static,
    {
        self.mutators.insert(kind.into(), Box::new(mutate));
        self
    }

    pub fn build(self) -> Slice<S> {
        Slice {
            name: self.name,
            initial: self.initial,
            mutators: self.mutators,
        }
    }
}
