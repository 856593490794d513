//! Shared test utilities.

#![allow(dead_code)]

use slicebox::counter::{counter_slice, CounterState};
use slicebox::store::Store;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Fresh counter store starting at `initial`.
pub fn counter_store(initial: i64) -> Rc<Store<CounterState>> {
    Rc::new(Store::new(counter_slice(CounterState::new(initial))))
}

/// Subscribe a call counter to `store`.
pub fn count_notifications<S: 'static>(store: &Rc<Store<S>>) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move || counter.set(counter.get() + 1));
    calls
}

/// Write `content` to a file named `name` inside a new temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
