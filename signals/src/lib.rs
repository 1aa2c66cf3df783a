/*!
Typed signal/slot broadcasting

A sender exposes one [`Signal`] per event it can raise. Any number of receivers,
of any types, bind one of their methods to that signal. The sender never learns
who is listening.

# Design requirements:
- Receivers need no common trait or base type - only a method whose parameters match the signal
- Mismatched methods are compile errors, never runtime errors
- The signal does not own its receivers - it holds weak handles and skips receivers that are gone
- Dispatch is synchronous and in registration order
- Bindings are append-only; there is no disconnect
- Single-threaded: `Signal` is `!Send` and `!Sync`

# Basic usage

```rust
use slotted::Signal;
use std::rc::Rc;

struct Gauge;
impl Gauge {
    fn show(&self, value: i32) { println!("gauge: {value}"); }
}

struct Alarm;
impl Alarm {
    fn check(&self, value: i32) {
        if value > 100 {
            println!("alarm!");
        }
    }
}

let changed: Signal<(i32,)> = Signal::new();
let gauge = Rc::new(Gauge);
let alarm = Rc::new(Alarm);

changed.connect(&gauge, Gauge::show);
changed.connect(&alarm, Alarm::check);
changed.emit(120);
// Should print:
// gauge: 120
// alarm!
```

# Compile-time guarantees

A method must take exactly the signal's arguments:

```compile_fail
use slotted::Signal;
use std::rc::Rc;

struct Plotter;
impl Plotter {
    fn point(&self, x: i32, y: i32) { println!("{x},{y}"); }
}

let moved = Signal::<(i32,)>::new();
moved.connect(&Rc::new(Plotter), Plotter::point);
```

The receiver type must actually have the method:

```compile_fail
use slotted::Signal;
use std::rc::Rc;

struct Silent;

let changed = Signal::<(i32,)>::new();
changed.connect(&Rc::new(Silent), Silent::update_value);
```

Signals stay on the thread that created them:

```compile_fail
use slotted::Signal;

fn need_send<T: Send>() {}
need_send::<Signal<()>>();
```

```compile_fail
use slotted::Signal;

fn need_sync<T: Sync>() {}
need_sync::<Signal<(i32,)>>();
```

# Re-entrancy

An emission dispatches to the bindings that existed when it started. A receiver
may connect new bindings or emit further signals (including the one currently
being emitted) from inside its method; a nested emission runs to completion
before the outer one moves on to its next binding.
*/

mod binding;
mod error;
mod signal;
mod traits;

pub use binding::BindingId;
pub use error::*;
pub use signal::*;
pub use traits::*;
