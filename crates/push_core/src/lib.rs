//! Core types for the Push runtime.
//!
//! This crate contains the data model that is independent of the interpreter:
//! - `Code` - the program tree (atoms and nested lists)
//! - `Value` - one item of any typed stack
//! - `classify` - the literal/instruction/name priority order for atoms
//! - canonical literal text for integers, floats and booleans

pub mod code;
pub mod literal;
pub mod value;

pub use code::Code;
pub use literal::{Atom, classify, format_boolean, format_float, format_integer};
pub use value::Value;

use ahash::RandomState;
use hashbrown::HashMap;

pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

pub fn fast_map_new<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}
