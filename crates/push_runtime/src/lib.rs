//! Push interpreter.
//!
//! Programs are trees of atoms and lists run against six typed stacks
//! (exec, code, integer, float, boolean, name). The exec stack drives
//! evaluation; every instruction is a `fn(&mut Interpreter)` looked up in a
//! per-stack table built once from the enabled instruction set.

mod config;
pub mod errors;
mod instructions;
mod interpreter;
mod kind;
pub mod options;
pub mod random_code;
pub mod registry;
pub mod stack;
pub mod stacks;

pub use errors::{ConfigError, RunError};
pub use interpreter::Interpreter;
pub use kind::StackKind;
pub use options::{Options, OptionsBuilder};
pub use random_code::random_code;
pub use registry::{Instruction, InstructionProvider, InstructionRegistry, StdInstructionProvider};
pub use stack::Stack;
pub use stacks::Stacks;

pub use push_core::{Code, Value};
