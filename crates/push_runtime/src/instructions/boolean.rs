use crate::random_code::random_boolean;
use crate::registry::InstructionRegistry;
use crate::stacks::BooleanStack;
use crate::{Interpreter, StackKind};

use super::common;

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Boolean;
    registry.register(kind, "and", |it| binary(it, |a, b| a && b));
    registry.register(kind, "or", |it| binary(it, |a, b| a || b));
    registry.register(kind, "not", not);
    registry.register(kind, "fromfloat", from_float);
    registry.register(kind, "frominteger", from_integer);
    registry.register(kind, "rand", rand);
    common::install::<BooleanStack>(registry);
    common::install_define::<BooleanStack>(registry);
}

fn binary(it: &mut Interpreter, op: fn(bool, bool) -> bool) {
    if !it.has(StackKind::Boolean, 2) {
        return;
    }
    let stack = &mut it.stacks.boolean;
    if let (Some(top), Some(second)) = (stack.pop(), stack.pop()) {
        stack.push(op(second, top));
    }
}

fn not(it: &mut Interpreter) {
    if let Some(b) = it.stacks.boolean.pop() {
        it.stacks.boolean.push(!b);
    }
}

fn from_float(it: &mut Interpreter) {
    if !it.has(StackKind::Float, 1) {
        return;
    }
    if let Some(f) = it.stacks.float.pop() {
        it.stacks.boolean.push(f != 0.0);
    }
}

fn from_integer(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) {
        return;
    }
    if let Some(i) = it.stacks.integer.pop() {
        it.stacks.boolean.push(i != 0);
    }
}

fn rand(it: &mut Interpreter) {
    let value = random_boolean(it);
    it.stacks.boolean.push(value);
}
