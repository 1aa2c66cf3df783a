use std::rc::{Rc, Weak};

use crate::traits::{Handler, Method};

/// Identifies a binding by its registration position on a signal.
/// Can only be created by a Signal and used for diagnostics/comparison.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BindingId(usize);

impl BindingId {
    pub(crate) fn new(index: usize) -> Self { Self(index) }

    /// Zero-based position of this binding in dispatch order
    pub fn index(&self) -> usize { self.0 }
}

impl From<BindingId> for usize {
    fn from(id: BindingId) -> usize { id.0 }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "#{}", self.0) }
}

/// What happened when an argument tuple was handed to a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    Delivered,
    ReceiverDropped,
}

type Trampoline<Args> = dyn Fn(Args) -> Delivery;

/// A registered slot. The receiver half is type-erased inside the trampoline,
/// so bindings for unrelated receiver types live in one `Vec`.
pub(crate) struct Binding<Args> {
    id: BindingId,
    trampoline: Rc<Trampoline<Args>>,
}

impl<Args> Clone for Binding<Args> {
    fn clone(&self) -> Self { Self { id: self.id, trampoline: self.trampoline.clone() } }
}

impl<Args: 'static> Binding<Args> {
    /// Bind `method` to a receiver we do not own. The receiver is only
    /// upgraded for the duration of each call.
    pub(crate) fn method<R, M>(id: BindingId, receiver: Weak<R>, method: M) -> Self
    where
        R: 'static,
        M: Method<R, Args>,
    {
        let trampoline = move |args: Args| match receiver.upgrade() {
            Some(receiver) => {
                method.call(&receiver, args);
                Delivery::Delivered
            }
            None => Delivery::ReceiverDropped,
        };
        Self { id, trampoline: Rc::new(trampoline) }
    }

    pub(crate) fn handler<H>(id: BindingId, handler: H) -> Self
    where H: Handler<Args> {
        let trampoline = move |args: Args| {
            handler.handle(args);
            Delivery::Delivered
        };
        Self { id, trampoline: Rc::new(trampoline) }
    }
}

impl<Args> Binding<Args> {
    pub(crate) fn id(&self) -> BindingId { self.id }

    pub(crate) fn dispatch(&self, args: Args) -> Delivery { (self.trampoline)(args) }
}
