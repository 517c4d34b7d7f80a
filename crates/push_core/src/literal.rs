//! Atom classification and canonical literal text.
//!
//! Classification order is fixed: integer, float, boolean, dotted
//! instruction reference, name. The first class that accepts the token wins.

use crate::Value;

/// What an atom means when it is executed.
#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    Literal(Value),
    /// `STACK.OPERATION`, split at the first dot, both halves lower-cased.
    Instruction { stack: String, operation: String },
    /// A name reference, lower-cased.
    Name(String),
}

pub fn classify(token: &str) -> Atom {
    if let Ok(i) = token.parse::<i64>() {
        return Atom::Literal(Value::Integer(i));
    }
    if let Ok(f) = token.parse::<f64>() {
        return Atom::Literal(Value::Float(f));
    }
    if token.eq_ignore_ascii_case("true") {
        return Atom::Literal(Value::Boolean(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Atom::Literal(Value::Boolean(false));
    }
    if let Some((stack, operation)) = token.split_once('.') {
        return Atom::Instruction {
            stack: stack.to_lowercase(),
            operation: operation.to_lowercase(),
        };
    }
    Atom::Name(token.to_lowercase())
}

pub fn format_integer(i: i64) -> String {
    itoa::Buffer::new().format(i).to_owned()
}

/// Shortest round-trip text. Finite values always carry a `.` or an
/// exponent so that they classify back as floats, never as integers.
pub fn format_float(f: f64) -> String {
    ryu::Buffer::new().format(f).to_owned()
}

pub fn format_boolean(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
