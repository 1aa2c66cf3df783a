use thiserror::Error;

use crate::binding::BindingId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Some bindings point at receivers that have since been dropped. Every
    /// live binding was still dispatched.
    #[error("receiver dropped for {} binding(s): {bindings:?}", .bindings.len())]
    ReceiverDropped { bindings: Vec<BindingId> },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
