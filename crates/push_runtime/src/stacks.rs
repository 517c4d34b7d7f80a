//! The interpreter's set of typed stacks and a compile-time handle for
//! each one, so that instructions shared by every stack (`dup`, `yank`,
//! `define`, ...) are written once and instantiated per stack.

use push_core::{Code, format_boolean, format_float, format_integer};

use crate::StackKind;
use crate::stack::Stack;

#[derive(Clone, Debug, Default)]
pub struct Stacks {
    pub exec: Stack<Code>,
    pub code: Stack<Code>,
    pub integer: Stack<i64>,
    pub float: Stack<f64>,
    pub boolean: Stack<bool>,
    pub name: Stack<String>,
}

impl Stacks {
    pub fn len(&self, kind: StackKind) -> usize {
        match kind {
            StackKind::Exec => self.exec.len(),
            StackKind::Code => self.code.len(),
            StackKind::Integer => self.integer.len(),
            StackKind::Float => self.float.len(),
            StackKind::Boolean => self.boolean.len(),
            StackKind::Name => self.name.len(),
        }
    }

    pub fn flush(&mut self, kind: StackKind) {
        match kind {
            StackKind::Exec => self.exec.flush(),
            StackKind::Code => self.code.flush(),
            StackKind::Integer => self.integer.flush(),
            StackKind::Float => self.float.flush(),
            StackKind::Boolean => self.boolean.flush(),
            StackKind::Name => self.name.flush(),
        }
    }

    /// Canonical text of every item on `kind`, top first.
    pub fn render(&self, kind: StackKind) -> Vec<String> {
        match kind {
            StackKind::Exec => self.exec.iter_top_down().map(Code::to_string).collect(),
            StackKind::Code => self.code.iter_top_down().map(Code::to_string).collect(),
            StackKind::Integer => self.integer.iter_top_down().map(|i| format_integer(*i)).collect(),
            StackKind::Float => self.float.iter_top_down().map(|f| format_float(*f)).collect(),
            StackKind::Boolean => self
                .boolean
                .iter_top_down()
                .map(|b| format_boolean(*b).to_owned())
                .collect(),
            StackKind::Name => self.name.iter_top_down().cloned().collect(),
        }
    }
}

/// Selects one stack out of [`Stacks`].
pub trait StackSelector {
    type Item: Clone + PartialEq;
    const KIND: StackKind;

    fn get(stacks: &Stacks) -> &Stack<Self::Item>;
    fn get_mut(stacks: &mut Stacks) -> &mut Stack<Self::Item>;

    /// The tree a name bound to `item` expands to.
    fn to_code(item: Self::Item) -> Code;
}

pub struct ExecStack;
pub struct CodeStack;
pub struct IntegerStack;
pub struct FloatStack;
pub struct BooleanStack;
pub struct NameStack;

macro_rules! selector {
    ($marker:ident, $field:ident, $item:ty, $kind:expr, $to_code:expr) => {
        impl StackSelector for $marker {
            type Item = $item;
            const KIND: StackKind = $kind;

            fn get(stacks: &Stacks) -> &Stack<$item> {
                &stacks.$field
            }

            fn get_mut(stacks: &mut Stacks) -> &mut Stack<$item> {
                &mut stacks.$field
            }

            fn to_code(item: $item) -> Code {
                ($to_code)(item)
            }
        }
    };
}

selector!(ExecStack, exec, Code, StackKind::Exec, |c: Code| c);
selector!(CodeStack, code, Code, StackKind::Code, |c: Code| c);
selector!(IntegerStack, integer, i64, StackKind::Integer, |i: i64| {
    Code::Atom(format_integer(i))
});
selector!(FloatStack, float, f64, StackKind::Float, |f: f64| Code::Atom(format_float(f)));
selector!(BooleanStack, boolean, bool, StackKind::Boolean, |b: bool| {
    Code::atom(format_boolean(b))
});
selector!(NameStack, name, String, StackKind::Name, Code::Atom);
