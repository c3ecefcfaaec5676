// Host-side tests for the frame loop registry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod tickers {
        include!("../src/core/tickers.rs");
    }
}

use fx::tickers::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct CountingLoop {
    running: Cell<bool>,
    starts: Cell<u32>,
    disposed: Cell<bool>,
}

impl FrameLoop for CountingLoop {
    fn start(&self) {
        if self.disposed.get() || self.running.get() {
            return;
        }
        self.running.set(true);
        self.starts.set(self.starts.get() + 1);
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn dispose(&self) {
        self.stop();
        self.disposed.set(true);
    }
}

fn registry_with_two() -> (Rc<LoopRegistry<CountingLoop>>, Rc<CountingLoop>, Rc<CountingLoop>) {
    let registry = LoopRegistry::new();
    let cursor = Rc::new(CountingLoop::default());
    let card = Rc::new(CountingLoop::default());
    registry.add_continuous(cursor.clone());
    registry.add_on_demand(card.clone());
    (registry, cursor, card)
}

#[test]
fn hidden_tab_stops_every_loop() {
    let (registry, cursor, card) = registry_with_two();
    cursor.start();
    card.start();
    registry.suspend();
    assert!(!cursor.running.get());
    assert!(!card.running.get());
}

#[test]
fn visible_tab_restarts_hover_loops_cut_off_mid_settle() {
    let (registry, cursor, card) = registry_with_two();
    cursor.start();
    card.start();
    registry.suspend();
    registry.resume();
    assert!(cursor.running.get());
    assert!(card.running.get(), "a settling card must get its frames back");
    assert_eq!(card.starts.get(), 2);
}

#[test]
fn resume_does_not_double_start_running_loops() {
    let (registry, cursor, _card) = registry_with_two();
    cursor.start();
    registry.resume();
    assert_eq!(cursor.starts.get(), 1);
}

#[test]
fn teardown_disposes_and_forgets_everything() {
    let (registry, cursor, card) = registry_with_two();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.dispose_all(), 2);
    assert!(cursor.disposed.get());
    assert!(card.disposed.get());
    assert!(registry.is_empty());

    registry.resume();
    assert!(!cursor.running.get());
    assert_eq!(registry.dispose_all(), 0);
}
