//! Operations every stack offers, written once over `StackSelector`.

use crate::registry::InstructionRegistry;
use crate::stacks::StackSelector;
use crate::{Interpreter, StackKind};

pub(crate) fn install<S: StackSelector>(registry: &mut InstructionRegistry) {
    let kind = S::KIND;
    registry.register(kind, "=", equal::<S>);
    registry.register(kind, "dup", dup::<S>);
    registry.register(kind, "flush", flush::<S>);
    registry.register(kind, "pop", pop::<S>);
    registry.register(kind, "rot", rot::<S>);
    registry.register(kind, "shove", shove::<S>);
    registry.register(kind, "stackdepth", stack_depth::<S>);
    registry.register(kind, "swap", swap::<S>);
    registry.register(kind, "yank", yank::<S>);
    registry.register(kind, "yankdup", yank_dup::<S>);
}

/// `define` for stacks other than the name stack.
pub(crate) fn install_define<S: StackSelector>(registry: &mut InstructionRegistry) {
    registry.register(S::KIND, "define", define::<S>);
}

fn equal<S: StackSelector>(it: &mut Interpreter) {
    if !it.has(S::KIND, 2) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    let stack = S::get_mut(&mut it.stacks);
    let (Some(a), Some(b)) = (stack.pop(), stack.pop()) else {
        return;
    };
    it.stacks.boolean.push(a == b);
}

fn define<S: StackSelector>(it: &mut Interpreter) {
    if !it.has(StackKind::Name, 1) || !it.has(S::KIND, 1) {
        return;
    }
    let (Some(name), Some(value)) = (it.stacks.name.pop(), S::get_mut(&mut it.stacks).pop()) else {
        return;
    };
    it.define(&name, S::to_code(value));
}

fn dup<S: StackSelector>(it: &mut Interpreter) {
    S::get_mut(&mut it.stacks).dup();
}

fn flush<S: StackSelector>(it: &mut Interpreter) {
    S::get_mut(&mut it.stacks).flush();
}

fn pop<S: StackSelector>(it: &mut Interpreter) {
    S::get_mut(&mut it.stacks).pop();
}

fn rot<S: StackSelector>(it: &mut Interpreter) {
    S::get_mut(&mut it.stacks).rot();
}

fn swap<S: StackSelector>(it: &mut Interpreter) {
    S::get_mut(&mut it.stacks).swap();
}

fn stack_depth<S: StackSelector>(it: &mut Interpreter) {
    if !it.is_enabled(StackKind::Integer) {
        return;
    }
    let depth = S::get(&it.stacks).len() as i64;
    it.stacks.integer.push(depth);
}

/// An index on the integer stack plus at least one item on `S` once the
/// index is gone.
fn has_index_and_item<S: StackSelector>(it: &Interpreter) -> bool {
    let needed = if S::KIND == StackKind::Integer { 2 } else { 1 };
    it.has(StackKind::Integer, 1) && it.has(S::KIND, needed)
}

fn yank<S: StackSelector>(it: &mut Interpreter) {
    if !has_index_and_item::<S>(it) {
        return;
    }
    if let Some(depth) = it.stacks.integer.pop() {
        S::get_mut(&mut it.stacks).yank(depth);
    }
}

fn yank_dup<S: StackSelector>(it: &mut Interpreter) {
    if !has_index_and_item::<S>(it) {
        return;
    }
    if let Some(depth) = it.stacks.integer.pop() {
        S::get_mut(&mut it.stacks).yank_dup(depth);
    }
}

fn shove<S: StackSelector>(it: &mut Interpreter) {
    if !has_index_and_item::<S>(it) {
        return;
    }
    let Some(depth) = it.stacks.integer.pop() else {
        return;
    };
    let stack = S::get_mut(&mut it.stacks);
    if let Some(item) = stack.pop() {
        stack.shove(item, depth);
    }
}
