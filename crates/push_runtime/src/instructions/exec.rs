//! Control flow. These instructions rearrange the exec stack rather than
//! recurse, so loops count against the step budget like any other code.

use push_core::{Code, format_integer};

use crate::registry::InstructionRegistry;
use crate::stacks::ExecStack;
use crate::{Interpreter, StackKind};

use super::common;

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Exec;
    registry.register(kind, "do*count", do_count);
    registry.register(kind, "do*range", do_range);
    registry.register(kind, "do*times", do_times);
    registry.register(kind, "if", if_);
    registry.register(kind, "k", k);
    registry.register(kind, "noop", |_| {});
    registry.register(kind, "s", s);
    registry.register(kind, "y", y);
    common::install::<ExecStack>(registry);
    common::install_define::<ExecStack>(registry);
}

pub(crate) fn integer_atom(i: i64) -> Code {
    Code::Atom(format_integer(i))
}

/// Push one iteration of a counting loop from `current` to `destination`:
/// the counter goes to the integer stack, the body to the exec stack and,
/// unless this is the last iteration, `next` beneath the body.
pub(crate) fn loop_step(
    it: &mut Interpreter,
    current: i64,
    destination: i64,
    body: Code,
    next: impl FnOnce(i64) -> Code,
) {
    if current != destination {
        let step = if current < destination { 1 } else { -1 };
        it.stacks.exec.push(next(current + step));
    }
    it.stacks.integer.push(current);
    it.stacks.exec.push(body);
}

/// `( current destination exec.do*range body )` unrolls to one iteration
/// per index in `[current, destination]`, pushing the index each time.
fn do_range(it: &mut Interpreter) {
    if !it.has(StackKind::Exec, 1) || !it.has(StackKind::Integer, 2) {
        return;
    }
    let (Some(destination), Some(current), Some(body)) = (
        it.stacks.integer.pop(),
        it.stacks.integer.pop(),
        it.stacks.exec.pop(),
    ) else {
        return;
    };
    let again = body.clone();
    loop_step(it, current, destination, body, |next| {
        Code::list(vec![
            integer_atom(next),
            integer_atom(destination),
            Code::atom("exec.do*range"),
            again,
        ])
    });
}

/// Runs the body `n` times with the counter `0..n` on the integer stack.
/// A count below 1 is a no-op.
fn do_count(it: &mut Interpreter) {
    if !it.has(StackKind::Exec, 1) || !it.has(StackKind::Integer, 1) {
        return;
    }
    let Some(&n) = it.stacks.integer.peek() else {
        return;
    };
    if n < 1 {
        return;
    }
    it.stacks.integer.pop();
    let Some(body) = it.stacks.exec.pop() else {
        return;
    };
    it.stacks.exec.push(Code::list(vec![
        integer_atom(0),
        integer_atom(n - 1),
        Code::atom("exec.do*range"),
        body,
    ]));
}

/// Like `do*count`, but the counter is dropped before each iteration.
fn do_times(it: &mut Interpreter) {
    if !it.has(StackKind::Exec, 1) || !it.has(StackKind::Integer, 1) {
        return;
    }
    let (Some(&n), Some(body)) = (it.stacks.integer.peek(), it.stacks.exec.peek()) else {
        return;
    };
    if n < 1 {
        return;
    }
    let mut items = vec![Code::atom("integer.pop")];
    items.extend(body.clone().into_list());
    let body = Code::list(items);
    if !it.fits(&body) {
        return;
    }
    it.stacks.integer.pop();
    it.stacks.exec.pop();
    it.stacks.exec.push(Code::list(vec![
        integer_atom(0),
        integer_atom(n - 1),
        Code::atom("exec.do*range"),
        body,
    ]));
}

/// Keep the first of the next two exec items when the top boolean is true,
/// the second otherwise.
fn if_(it: &mut Interpreter) {
    if !it.has(StackKind::Boolean, 1) || !it.has(StackKind::Exec, 2) {
        return;
    }
    let (Some(condition), Some(first), Some(second)) = (
        it.stacks.boolean.pop(),
        it.stacks.exec.pop(),
        it.stacks.exec.pop(),
    ) else {
        return;
    };
    it.stacks.exec.push(if condition { first } else { second });
}

/// K combinator: drop the second item.
fn k(it: &mut Interpreter) {
    if !it.has(StackKind::Exec, 2) {
        return;
    }
    let stack = &mut it.stacks.exec;
    if let (Some(first), Some(_)) = (stack.pop(), stack.pop()) {
        stack.push(first);
    }
}

/// S combinator: `a b c` becomes `a c ( b c )`.
fn s(it: &mut Interpreter) {
    if !it.has(StackKind::Exec, 3) {
        return;
    }
    let (Some(b), Some(c)) = (it.stacks.exec.get(1), it.stacks.exec.get(2)) else {
        return;
    };
    let pair = Code::list(vec![b.clone(), c.clone()]);
    if !it.fits(&pair) {
        return;
    }
    let stack = &mut it.stacks.exec;
    if let (Some(a), Some(_), Some(c)) = (stack.pop(), stack.pop(), stack.pop()) {
        stack.push(pair);
        stack.push(c);
        stack.push(a);
    }
}

/// Y combinator: insert `( exec.y top )` beneath the top item.
fn y(it: &mut Interpreter) {
    let Some(top) = it.stacks.exec.peek() else {
        return;
    };
    let again = Code::list(vec![Code::atom("exec.y"), top.clone()]);
    if !it.fits(&again) {
        return;
    }
    let stack = &mut it.stacks.exec;
    if let Some(top) = stack.pop() {
        stack.push(again);
        stack.push(top);
    }
}
