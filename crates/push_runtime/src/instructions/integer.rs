use crate::random_code::random_integer;
use crate::registry::InstructionRegistry;
use crate::stacks::IntegerStack;
use crate::{Interpreter, StackKind};

use super::common;

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Integer;
    registry.register(kind, "%", modulo);
    registry.register(kind, "*", mul);
    registry.register(kind, "+", add);
    registry.register(kind, "-", sub);
    registry.register(kind, "/", div);
    registry.register(kind, "<", less);
    registry.register(kind, ">", greater);
    registry.register(kind, "fromboolean", from_boolean);
    registry.register(kind, "fromfloat", from_float);
    registry.register(kind, "max", max);
    registry.register(kind, "min", min);
    registry.register(kind, "rand", rand);
    common::install::<IntegerStack>(registry);
    common::install_define::<IntegerStack>(registry);
}

/// Apply `op` to (second, top) and replace both with the result. `None`
/// from `op` leaves the stack untouched.
fn binary(it: &mut Interpreter, op: impl FnOnce(i64, i64) -> Option<i64>) {
    let stack = &mut it.stacks.integer;
    let (Some(&top), Some(&second)) = (stack.get(0), stack.get(1)) else {
        return;
    };
    if let Some(result) = op(second, top) {
        stack.pop();
        stack.pop();
        stack.push(result);
    }
}

fn compare(it: &mut Interpreter, op: impl FnOnce(i64, i64) -> bool) {
    if !it.has(StackKind::Integer, 2) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    let (Some(top), Some(second)) = (it.stacks.integer.pop(), it.stacks.integer.pop()) else {
        return;
    };
    it.stacks.boolean.push(op(second, top));
}

fn add(it: &mut Interpreter) {
    binary(it, |a, b| Some(a.wrapping_add(b)));
}

fn sub(it: &mut Interpreter) {
    binary(it, |a, b| Some(a.wrapping_sub(b)));
}

fn mul(it: &mut Interpreter) {
    binary(it, |a, b| Some(a.wrapping_mul(b)));
}

fn div(it: &mut Interpreter) {
    binary(it, |a, b| (b != 0).then(|| a.wrapping_div(b)));
}

/// Floored modulo: the result takes the sign of the divisor.
fn modulo(it: &mut Interpreter) {
    binary(it, |a, b| {
        if b == 0 {
            return None;
        }
        let r = a.wrapping_rem(b);
        Some(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
    });
}

fn less(it: &mut Interpreter) {
    compare(it, |a, b| a < b);
}

fn greater(it: &mut Interpreter) {
    compare(it, |a, b| a > b);
}

fn max(it: &mut Interpreter) {
    binary(it, |a, b| Some(a.max(b)));
}

fn min(it: &mut Interpreter) {
    binary(it, |a, b| Some(a.min(b)));
}

fn from_boolean(it: &mut Interpreter) {
    if !it.has(StackKind::Boolean, 1) {
        return;
    }
    if let Some(b) = it.stacks.boolean.pop() {
        it.stacks.integer.push(i64::from(b));
    }
}

/// Truncates toward zero; out-of-range values saturate and NaN gives 0.
fn from_float(it: &mut Interpreter) {
    if !it.has(StackKind::Float, 1) {
        return;
    }
    if let Some(f) = it.stacks.float.pop() {
        it.stacks.integer.push(f as i64);
    }
}

fn rand(it: &mut Interpreter) {
    let value = random_integer(it);
    it.stacks.integer.push(value);
}
