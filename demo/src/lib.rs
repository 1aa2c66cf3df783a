//! A sender with three signals and two unrelated receiver types.

use slotted::Signal;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the demo writes its lines. Clones share the same destination.
#[derive(Clone)]
pub enum Console {
    Stdout,
    Capture(Rc<RefCell<Vec<String>>>),
}

impl Console {
    pub fn capture() -> Self { Console::Capture(Rc::new(RefCell::new(Vec::new()))) }

    pub fn println(&self, line: impl Into<String>) {
        let line: String = line.into();
        match self {
            Console::Stdout => println!("{line}"),
            Console::Capture(lines) => lines.borrow_mut().push(line),
        }
    }

    /// Lines captured so far, or `None` when writing straight to stdout
    pub fn lines(&self) -> Option<Vec<String>> {
        match self {
            Console::Stdout => None,
            Console::Capture(lines) => Some(lines.borrow().clone()),
        }
    }
}

pub struct Receiver {
    console: Console,
}

impl Receiver {
    pub fn new(console: &Console) -> Rc<Self> { Rc::new(Self { console: console.clone() }) }

    pub fn update(&self) { self.console.println("Update"); }

    pub fn update_value(&self, x: i32) { self.console.println(format!("Update value: {x}")); }

    pub fn update_values(&self, x: i32, y: i32) { self.console.println(format!("Update values: {x} {y}")); }
}

pub struct OtherReceiver {
    console: Console,
}

impl OtherReceiver {
    pub fn new(console: &Console) -> Rc<Self> { Rc::new(Self { console: console.clone() }) }

    pub fn update(&self) { self.console.println("Other Update"); }

    pub fn update_value(&self, x: i32) { self.console.println(format!("Other Update value: {x}")); }

    pub fn update_values(&self, x: i32, y: i32) { self.console.println(format!("Other Update values: {x} {y}")); }
}

/// Raises events without knowing who listens
pub struct Sender {
    pub action_performed: Signal<()>,
    pub value_changed: Signal<(i32,)>,
    pub values_reset: Signal<(i32, i32)>,
    console: Console,
    x: i32,
    y: i32,
}

impl Sender {
    pub fn new(console: &Console) -> Self {
        Self {
            action_performed: Signal::new(),
            value_changed: Signal::new(),
            values_reset: Signal::new(),
            console: console.clone(),
            x: 0,
            y: 0,
        }
    }

    pub fn some_action(&self) -> slotted::Result<()> {
        self.console.println("Hello!");
        self.action_performed.try_send(())
    }

    pub fn change_value(&mut self, value: i32) -> slotted::Result<()> {
        self.x = value;
        self.value_changed.try_send((self.x,))
    }

    pub fn reset_values(&mut self) -> slotted::Result<()> {
        self.x = 0;
        self.y = 0;
        self.values_reset.try_send((self.x, self.y))
    }

    pub fn values(&self) -> (i32, i32) { (self.x, self.y) }
}

/// Wires both receivers to every signal of one sender and fires each signal once
pub fn run(console: &Console) -> anyhow::Result<()> {
    let mut sender = Sender::new(console);
    let receiver = Receiver::new(console);
    let other_receiver = OtherReceiver::new(console);

    sender.action_performed.connect(&receiver, Receiver::update);
    sender.action_performed.connect(&other_receiver, OtherReceiver::update);

    sender.value_changed.connect(&receiver, Receiver::update_value);
    sender.value_changed.connect(&other_receiver, OtherReceiver::update_value);

    sender.values_reset.connect(&receiver, Receiver::update_values);
    sender.values_reset.connect(&other_receiver, OtherReceiver::update_values);
    tracing::debug!("receivers connected: {:?} {:?} {:?}", sender.action_performed, sender.value_changed, sender.values_reset);

    sender.change_value(5)?;
    sender.some_action()?;
    sender.reset_values()?;
    Ok(())
}
