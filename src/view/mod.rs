//! Binding between a [`Store`] and a render function.
//!
//! A [`ViewBinding`] renders once on attach, then again whenever the store
//! notifies, subject to its [`RenderPolicy`]. The binding unsubscribes
//! itself when dropped.

mod event;

pub use event::{Button, UiEvent};

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::store::{Action, Dispatched, Store, StoreError, SubscriptionId};

/// When a notified view re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderPolicy {
    /// Render on every notification, even if the slice compares equal.
    Always,
    /// Skip notifications whose slice equals the last rendered one.
    #[default]
    OnChange,
}

struct Rendered<S, O> {
    render: Box<dyn FnMut(&S) -> O>,
    policy: RenderPolicy,
    last: Rc<S>,
    output: O,
    renders: usize,
}

impl<S: PartialEq, O> Rendered<S, O> {
    fn refresh(&mut self, next: Rc<S>) {
        if self.policy == RenderPolicy::OnChange
            && (Rc::ptr_eq(&self.last, &next) || *self.last == *next)
        {
            trace!("slice unchanged, render skipped");
            return;
        }
        self.output = (self.render)(&*next);
        self.last = next;
        self.renders += 1;
    }
}

pub struct ViewBinding<S: 'static, O: 'static> {
    store: Rc<Store<S>>,
    rendered: Rc<RefCell<Rendered<S, O>>>,
    subscription: SubscriptionId,
}

impl<S: PartialEq + 'static, O: 'static> ViewBinding<S, O> {
    /// Render the current slice and subscribe for further changes.
    pub fn attach<F>(store: &Rc<Store<S>>, policy: RenderPolicy, mut render: F) -> Self
    where
        F: FnMut(&S) -> O + 'static,
    {
        let current = store.state();
        let output = render(&*current);
        let rendered = Rc::new(RefCell::new(Rendered {
            render: Box::new(render),
            policy,
            last: current,
            output,
            renders: 1,
        }));

        let weak_store = Rc::downgrade(store);
        let weak_rendered = Rc::downgrade(&rendered);
        let subscription = store.subscribe(move || {
            let (Some(store), Some(rendered)) = (weak_store.upgrade(), weak_rendered.upgrade())
            else {
                return;
            };
            rendered.borrow_mut().refresh(store.state());
        });

        Self {
            store: Rc::clone(store),
            rendered,
            subscription,
        }
    }

    /// Latest render output.
    pub fn output(&self) -> Ref<'_, O> {
        Ref::map(self.rendered.borrow(), |r| &r.output)
    }

    pub fn render_count(&self) -> usize {
        self.rendered.borrow().renders
    }

    pub fn policy(&self) -> RenderPolicy {
        self.rendered.borrow().policy
    }

    pub fn store(&self) -> &Rc<Store<S>> {
        &self.store
    }

    pub fn emit(&self, action: Action) -> Result<Dispatched, StoreError> {
        self.store.dispatch(&action)
    }
}

impl<S: 'static, O: 'static> Drop for ViewBinding<S, O> {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
