//! Runtime values.

use std::fmt;

use crate::Code;
use crate::literal::{format_boolean, format_float, format_integer};

/// One item on a typed stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Name(String),
    Code(Code),
}

impl Value {
    /// The program tree that reproduces this value when executed: an atom
    /// holding the canonical text for scalars, the tree itself for code.
    pub fn to_code(&self) -> Code {
        match self {
            Value::Integer(i) => Code::Atom(format_integer(*i)),
            Value::Float(f) => Code::Atom(format_float(*f)),
            Value::Boolean(b) => Code::Atom(format_boolean(*b).to_owned()),
            Value::Name(n) => Code::Atom(n.clone()),
            Value::Code(c) => c.clone(),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Code> for Value {
    fn from(c: Code) -> Self {
        Value::Code(c)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => f.write_str(&format_integer(*i)),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Boolean(b) => f.write_str(format_boolean(*b)),
            Value::Name(n) => f.write_str(n),
            Value::Code(c) => write!(f, "{c}"),
        }
    }
}
