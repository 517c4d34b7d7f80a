//! Built-in instruction libraries, one module per stack.
//!
//! Every instruction checks all of its preconditions before touching any
//! stack, so a failed check leaves the interpreter exactly as it was.

pub(crate) mod boolean;
pub(crate) mod code;
pub(crate) mod common;
pub(crate) mod exec;
pub(crate) mod float;
pub(crate) mod integer;
pub(crate) mod name;
