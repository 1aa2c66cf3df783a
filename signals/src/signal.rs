use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::binding::{Binding, BindingId, Delivery};
use crate::error::{Error, Result};
use crate::traits::{Handler, Method};

/// A typed broadcast point carrying the argument tuple `Args`.
///
/// `Signal<()>`, `Signal<(i32,)>` and `Signal<(i32, i32)>` are the zero, one
/// and two argument forms. Bindings are dispatched in registration order and
/// are never removed.
pub struct Signal<Args = ()> {
    bindings: RefCell<Vec<Binding<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self { Self::new() }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("args", &type_name::<Args>()).field("bindings", &self.len()).finish()
    }
}

impl<Args> Signal<Args> {
    /// Creates a signal with no bindings
    pub fn new() -> Self { Self { bindings: RefCell::new(Vec::new()) } }

    /// Number of bindings registered so far
    pub fn len(&self) -> usize { self.bindings.borrow().len() }

    pub fn is_empty(&self) -> bool { self.bindings.borrow().is_empty() }

    fn push(&self, make: impl FnOnce(BindingId) -> Binding<Args>) -> BindingId {
        let mut bindings = self.bindings.borrow_mut();
        let id = BindingId::new(bindings.len());
        bindings.push(make(id));
        id
    }
}

impl<Args> Signal<Args>
where Args: Clone + 'static
{
    /// Binds `method` on `receiver`. The signal keeps only a weak handle, so
    /// the receiver's lifetime stays with the caller.
    pub fn connect<R, M>(&self, receiver: &Rc<R>, method: M) -> BindingId
    where
        R: 'static,
        M: Method<R, Args>,
    {
        let id = self.push(|id| Binding::method(id, Rc::downgrade(receiver), method));
        debug!("Signal<{}> connect {} -> binding {}", type_name::<Args>(), type_name::<R>(), id);
        id
    }

    /// Binds a free handler: a closure taking the signal's arguments, or a channel sender
    pub fn connect_fn<H>(&self, handler: H) -> BindingId
    where H: Handler<Args> {
        let id = self.push(|id| Binding::handler(id, handler));
        debug!("Signal<{}> connect handler -> binding {}", type_name::<Args>(), id);
        id
    }

    /// Broadcasts `args` to every binding, in registration order.
    /// Bindings whose receiver has been dropped are skipped.
    pub fn send(&self, args: Args) { self.dispatch(args); }

    /// Like [`Signal::send`], but reports bindings whose receiver has been dropped
    pub fn try_send(&self, args: Args) -> Result<()> {
        let dropped = self.dispatch(args);
        if dropped.is_empty() { Ok(()) } else { Err(Error::ReceiverDropped { bindings: dropped }) }
    }

    fn dispatch(&self, args: Args) -> Vec<BindingId> {
        // Snapshot the bindings so receivers may connect or emit while we iterate.
        // Bindings added during this call are first reached by the next one.
        let bindings = self.bindings.borrow().clone();
        trace!("Signal<{}> send to {} binding(s)", type_name::<Args>(), bindings.len());

        let mut dropped = Vec::new();
        // clone the args for each binding except the last one
        if let Some((last, rest)) = bindings.split_last() {
            for binding in rest {
                deliver(binding, args.clone(), &mut dropped);
            }
            deliver(last, args, &mut dropped);
        }
        dropped
    }
}

fn deliver<Args>(binding: &Binding<Args>, args: Args, dropped: &mut Vec<BindingId>) {
    if binding.dispatch(args) == Delivery::ReceiverDropped {
        trace!("binding {} skipped, receiver dropped", binding.id());
        dropped.push(binding.id());
    }
}

macro_rules! impl_emit {
    ($($name:ident: $ty:ident),*) => {
        impl<$($ty),*> Signal<($($ty,)*)>
        where $($ty: Clone + 'static),*
        {
            /// Broadcasts the given arguments to every binding, in registration order
            pub fn emit(&self, $($name: $ty),*) { self.send(($($name,)*)) }
        }
    };
}

impl_emit!();
impl_emit!(a: A);
impl_emit!(a: A, b: B);
impl_emit!(a: A, b: B, c: C);
impl_emit!(a: A, b: B, c: C, d: D);
impl_emit!(a: A, b: B, c: C, d: D, e: E);
impl_emit!(a: A, b: B, c: C, d: D, e: E, f: F);
