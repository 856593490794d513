mod common;

use common::counter_store;
use slicebox::counter::{increment, reset, CounterView};
use slicebox::store::Action;
use slicebox::view::{Button, RenderPolicy, UiEvent, ViewBinding};

#[test]
fn renders_current_value_on_attach() {
    let store = counter_store(7);
    let view = ViewBinding::attach(&store, RenderPolicy::OnChange, |s| s.value * 10);
    assert_eq!(*view.output(), 70);
    assert_eq!(view.render_count(), 1);
}

#[test]
fn re_renders_after_each_change() {
    let store = counter_store(0);
    let view = ViewBinding::attach(&store, RenderPolicy::OnChange, |s| s.value);

    store.dispatch(&increment()).unwrap();
    store.dispatch(&increment()).unwrap();

    assert_eq!(*view.output(), 2);
    assert_eq!(view.render_count(), 3);
}

#[test]
fn on_change_skips_equal_slice() {
    let store = counter_store(0);
    let view = ViewBinding::attach(&store, RenderPolicy::OnChange, |s| s.value);

    // reset at zero produces an equal slice
    store.dispatch(&reset()).unwrap();

    assert_eq!(view.render_count(), 1);
}

#[test]
fn always_policy_renders_equal_slice() {
    let store = counter_store(0);
    let view = ViewBinding::attach(&store, RenderPolicy::Always, |s| s.value);

    store.dispatch(&reset()).unwrap();

    assert_eq!(view.render_count(), 2);
    assert_eq!(view.policy(), RenderPolicy::Always);
}

#[test]
fn ignored_action_does_not_render() {
    let store = counter_store(0);
    let view = ViewBinding::attach(&store, RenderPolicy::Always, |s| s.value);

    view.emit(Action::new("noop")).unwrap();

    assert_eq!(view.render_count(), 1);
}

#[test]
fn dropping_binding_unsubscribes() {
    let store = counter_store(0);
    let view = ViewBinding::attach(&store, RenderPolicy::OnChange, |s| s.value);
    assert_eq!(store.subscriber_count(), 1);

    drop(view);

    assert_eq!(store.subscriber_count(), 0);
    store.dispatch(&increment()).unwrap();
    assert_eq!(store.state().value, 1);
}

#[test]
fn two_views_share_one_store() {
    let store = counter_store(0);
    let first = CounterView::attach(&store, RenderPolicy::OnChange);
    let second = CounterView::attach(&store, RenderPolicy::OnChange);

    first.handle_event(&UiEvent::Click(Button::Increment)).unwrap();
    second.handle_event(&UiEvent::Click(Button::Increment)).unwrap();

    assert_eq!(first.snapshot().label, "Counter: 2");
    assert_eq!(second.snapshot().label, "Counter: 2");
}
