use crate::random_code::random_float;
use crate::registry::InstructionRegistry;
use crate::stacks::FloatStack;
use crate::{Interpreter, StackKind};

use super::common;

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Float;
    registry.register(kind, "%", modulo);
    registry.register(kind, "*", |it| binary(it, |a, b| Some(a * b)));
    registry.register(kind, "+", |it| binary(it, |a, b| Some(a + b)));
    registry.register(kind, "-", |it| binary(it, |a, b| Some(a - b)));
    registry.register(kind, "/", |it| binary(it, |a, b| (b != 0.0).then(|| a / b)));
    registry.register(kind, "<", |it| compare(it, |a, b| a < b));
    registry.register(kind, ">", |it| compare(it, |a, b| a > b));
    registry.register(kind, "cos", |it| unary(it, f64::cos));
    registry.register(kind, "sin", |it| unary(it, f64::sin));
    registry.register(kind, "tan", |it| unary(it, f64::tan));
    registry.register(kind, "fromboolean", from_boolean);
    registry.register(kind, "frominteger", from_integer);
    registry.register(kind, "max", |it| binary(it, |a, b| Some(a.max(b))));
    registry.register(kind, "min", |it| binary(it, |a, b| Some(a.min(b))));
    registry.register(kind, "rand", rand);
    common::install::<FloatStack>(registry);
    common::install_define::<FloatStack>(registry);
}

fn unary(it: &mut Interpreter, op: fn(f64) -> f64) {
    if let Some(top) = it.stacks.float.pop() {
        it.stacks.float.push(op(top));
    }
}

/// Apply `op` to (second, top); `None` leaves the stack untouched.
fn binary(it: &mut Interpreter, op: impl FnOnce(f64, f64) -> Option<f64>) {
    let stack = &mut it.stacks.float;
    let (Some(&top), Some(&second)) = (stack.get(0), stack.get(1)) else {
        return;
    };
    if let Some(result) = op(second, top) {
        stack.pop();
        stack.pop();
        stack.push(result);
    }
}

fn compare(it: &mut Interpreter, op: impl FnOnce(f64, f64) -> bool) {
    if !it.has(StackKind::Float, 2) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    let (Some(top), Some(second)) = (it.stacks.float.pop(), it.stacks.float.pop()) else {
        return;
    };
    it.stacks.boolean.push(op(second, top));
}

/// Floored modulo, matching `integer.%`.
fn modulo(it: &mut Interpreter) {
    binary(it, |a, b| {
        if b == 0.0 {
            return None;
        }
        let r = a % b;
        Some(if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r })
    });
}

fn from_boolean(it: &mut Interpreter) {
    if !it.has(StackKind::Boolean, 1) {
        return;
    }
    if let Some(b) = it.stacks.boolean.pop() {
        it.stacks.float.push(if b { 1.0 } else { 0.0 });
    }
}

fn from_integer(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) {
        return;
    }
    if let Some(i) = it.stacks.integer.pop() {
        it.stacks.float.push(i as f64);
    }
}

fn rand(it: &mut Interpreter) {
    let value = random_float(it);
    it.stacks.float.push(value);
}
