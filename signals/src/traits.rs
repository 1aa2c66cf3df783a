/// A method of receiver type `R` that can be bound to a signal carrying `Args`.
///
/// Implemented for every `Fn(&R, A, B, ..)` whose parameters line up with the
/// argument tuple, which covers method paths like `Receiver::update_value` as
/// well as closures. A method whose signature does not match the signal is
/// rejected at compile time.
///
/// The receiver is only ever borrowed shared, so `&mut self` methods cannot be
/// bound. Receivers that change state on a call keep that state in a `Cell` or
/// `RefCell`; this also lets a method emit a signal that calls back into the
/// same receiver.
///
/// ```compile_fail
/// use slotted::Signal;
/// use std::rc::Rc;
///
/// struct Total(i32);
/// impl Total {
///     fn add(&mut self, amount: i32) { self.0 += amount; }
/// }
///
/// let signal = Signal::<(i32,)>::new();
/// signal.connect(&Rc::new(Total(0)), Total::add);
/// ```
pub trait Method<R, Args>: 'static {
    fn call(&self, receiver: &R, args: Args);
}

/// A free-standing handler that can be bound to a signal carrying `Args`.
pub trait Handler<Args>: 'static {
    fn handle(&self, args: Args);
}

macro_rules! impl_arity {
    ($($name:ident: $ty:ident),*) => {
        impl<R, F, $($ty),*> Method<R, ($($ty,)*)> for F
        where F: Fn(&R, $($ty),*) + 'static
        {
            fn call(&self, receiver: &R, ($($name,)*): ($($ty,)*)) { self(receiver, $($name),*) }
        }

        impl<F, $($ty),*> Handler<($($ty,)*)> for F
        where F: Fn($($ty),*) + 'static
        {
            fn handle(&self, ($($name,)*): ($($ty,)*)) { self($($name),*) }
        }
    };
}

impl_arity!();
impl_arity!(a: A);
impl_arity!(a: A, b: B);
impl_arity!(a: A, b: B, c: C);
impl_arity!(a: A, b: B, c: C, d: D);
impl_arity!(a: A, b: B, c: C, d: D, e: E);
impl_arity!(a: A, b: B, c: C, d: D, e: E, f: G);

// Channel handlers forward the whole argument tuple
impl<Args: 'static> Handler<Args> for std::sync::mpsc::Sender<Args> {
    fn handle(&self, args: Args) {
        let _ = self.send(args); // Ignore send errors
    }
}

#[cfg(feature = "tokio")]
impl<Args: 'static> Handler<Args> for tokio::sync::mpsc::UnboundedSender<Args> {
    fn handle(&self, args: Args) {
        let _ = self.send(args); // Ignore send errors
    }
}
