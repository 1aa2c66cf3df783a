use std::cell::RefCell;
use std::rc::Rc;

/// Routes the crate's `tracing` output into the test harness
#[allow(unused)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_test_writer().try_init();
}

/// A shared, append-only record of calls. Clones write to the same journal.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

#[allow(unused)]
impl Journal {
    pub fn new() -> Self { Self::default() }

    pub fn record(&self, entry: impl Into<String>) { self.0.borrow_mut().push(entry.into()); }

    /// Drains everything recorded so far
    pub fn take(&self) -> Vec<String> { self.0.borrow_mut().drain(..).collect() }
}

#[allow(unused)]
pub fn change_watcher<T: 'static>() -> (Box<dyn Fn(T)>, Box<dyn Fn() -> Vec<T>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let watcher = {
        let changes = changes.clone();
        Box::new(move |value: T| {
            changes.borrow_mut().push(value);
        })
    };

    let check = Box::new(move || {
        let changes: Vec<T> = changes.borrow_mut().drain(..).collect();
        changes
    });

    (watcher, check)
}

/// The first kind of test receiver
#[allow(unused)]
pub struct Receiver {
    pub journal: Journal,
}

#[allow(unused)]
impl Receiver {
    pub fn new(journal: &Journal) -> Rc<Self> { Rc::new(Self { journal: journal.clone() }) }
    pub fn update(&self) { self.journal.record("R1.update()"); }
    pub fn update_value(&self, x: i32) { self.journal.record(format!("R1.update_value({x})")); }
    pub fn update_values(&self, x: i32, y: i32) { self.journal.record(format!("R1.update_values({x}, {y})")); }
}

/// An unrelated receiver type with the same method shapes
#[allow(unused)]
pub struct OtherReceiver {
    pub journal: Journal,
}

#[allow(unused)]
impl OtherReceiver {
    pub fn new(journal: &Journal) -> Rc<Self> { Rc::new(Self { journal: journal.clone() }) }
    pub fn update(&self) { self.journal.record("R2.update()"); }
    pub fn update_value(&self, x: i32) { self.journal.record(format!("R2.update_value({x})")); }
    pub fn update_values(&self, x: i32, y: i32) { self.journal.record(format!("R2.update_values({x}, {y})")); }
}
