use slotted::*;
mod common;
use common::{Journal, init_tracing};
use std::cell::Cell;
use std::rc::Rc;

/// Owns a signal and re-emits it from inside its own slot until `limit` is hit
struct Echo {
    depth: Cell<u32>,
    limit: u32,
    journal: Journal,
    echoed: Signal<(u32,)>,
}

impl Echo {
    fn on_echo(&self, n: u32) {
        self.journal.record(format!("enter {n}"));
        if self.depth.get() < self.limit {
            self.depth.set(self.depth.get() + 1);
            self.echoed.emit(n + 1);
        }
        self.journal.record(format!("leave {n}"));
    }
}

#[test]
fn test_nested_emit_of_same_signal_runs_to_completion() {
    init_tracing();
    let journal = Journal::new();
    let echo = Rc::new(Echo { depth: Cell::new(0), limit: 2, journal: journal.clone(), echoed: Signal::new() });
    echo.echoed.connect(&echo, Echo::on_echo);

    echo.echoed.emit(0);

    assert_eq!(journal.take(), ["enter 0", "enter 1", "enter 2", "leave 2", "leave 1", "leave 0"]);
}

#[test]
fn test_nested_emit_visits_later_bindings_before_outer_continues() {
    init_tracing();
    let journal = Journal::new();
    let first = Rc::new(Signal::<()>::new());
    let second = Signal::<()>::new();

    {
        let journal = journal.clone();
        let first = Rc::downgrade(&first);
        second.connect_fn(move || {
            journal.record("second: a");
            if let Some(first) = first.upgrade() {
                first.emit();
            }
        });
    }
    {
        let journal = journal.clone();
        second.connect_fn(move || journal.record("second: b"));
    }
    {
        let journal = journal.clone();
        first.connect_fn(move || journal.record("first"));
    }

    second.emit();
    assert_eq!(journal.take(), ["second: a", "first", "second: b"]);
}

#[test]
fn test_binding_added_during_emit_waits_for_next_emit() {
    init_tracing();
    let journal = Journal::new();
    let signal = Rc::new(Signal::<(i32,)>::new());

    {
        let journal = journal.clone();
        let weak = Rc::downgrade(&signal);
        let connected = Cell::new(false);
        signal.connect_fn(move |x: i32| {
            journal.record(format!("original {x}"));
            if connected.replace(true) {
                return;
            }
            if let Some(signal) = weak.upgrade() {
                let journal = journal.clone();
                signal.connect_fn(move |x: i32| journal.record(format!("late {x}")));
            }
        });
    }

    signal.emit(1);
    assert_eq!(journal.take(), ["original 1"]);
    assert_eq!(signal.len(), 2);

    signal.emit(2);
    assert_eq!(journal.take(), ["original 2", "late 2"]);
}

#[test]
#[should_panic(expected = "receiver failed")]
fn test_panicking_receiver_propagates() {
    fn explode() { panic!("receiver failed") }
    fn never_reached() { unreachable!("bindings after a panicking receiver are not visited") }

    let signal = Signal::<()>::new();
    signal.connect_fn(explode);
    signal.connect_fn(never_reached);
    signal.emit();
}
