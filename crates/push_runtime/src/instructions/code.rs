//! Code manipulation. Atoms are treated as one-element lists wherever a
//! list is expected, and no instruction may build a tree larger than
//! `max-points-in-program`.

use push_core::{Code, format_boolean, format_float, format_integer};

use crate::random_code::random_code;
use crate::registry::InstructionRegistry;
use crate::stacks::CodeStack;
use crate::{Interpreter, StackKind};

use super::common;
use super::exec::{integer_atom, loop_step};

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Code;
    registry.register(kind, "append", append);
    registry.register(kind, "atom", |it| predicate(it, Code::is_atom));
    registry.register(kind, "car", car);
    registry.register(kind, "cdr", cdr);
    registry.register(kind, "cons", cons);
    registry.register(kind, "contains", contains);
    registry.register(kind, "definition", definition);
    registry.register(kind, "do", do_);
    registry.register(kind, "do*", do_star);
    registry.register(kind, "do*count", do_count);
    registry.register(kind, "do*range", do_range);
    registry.register(kind, "do*times", do_times);
    registry.register(kind, "extract", extract);
    registry.register(kind, "fromboolean", from_boolean);
    registry.register(kind, "fromfloat", from_float);
    registry.register(kind, "frominteger", from_integer);
    registry.register(kind, "fromname", from_name);
    registry.register(kind, "if", if_);
    registry.register(kind, "length", length);
    registry.register(kind, "list", list);
    registry.register(kind, "member", member);
    registry.register(kind, "noop", |_| {});
    registry.register(kind, "nth", nth);
    registry.register(kind, "nthcdr", nth_cdr);
    registry.register(kind, "null", |it| {
        predicate(it, |c| c.as_list().is_some_and(<[Code]>::is_empty))
    });
    registry.register(kind, "quote", quote);
    registry.register(kind, "rand", rand);
    registry.register(kind, "size", size);
    common::install::<CodeStack>(registry);
    common::install_define::<CodeStack>(registry);
}

fn items(code: &Code) -> &[Code] {
    match code {
        Code::List(items) => items,
        atom => std::slice::from_ref(atom),
    }
}

/// Replace the top `n` code items with `result`, if it fits.
fn replace_top(it: &mut Interpreter, n: usize, result: Code) {
    if !it.fits(&result) {
        return;
    }
    for _ in 0..n {
        it.stacks.code.pop();
    }
    it.stacks.code.push(result);
}

fn predicate(it: &mut Interpreter, test: fn(&Code) -> bool) {
    if !it.has(StackKind::Code, 1) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    if let Some(top) = it.stacks.code.pop() {
        it.stacks.boolean.push(test(&top));
    }
}

/// Items of the top followed by items of the second.
fn append(it: &mut Interpreter) {
    let (Some(top), Some(second)) = (it.stacks.code.get(0), it.stacks.code.get(1)) else {
        return;
    };
    let joined: Code = items(top).iter().chain(items(second)).cloned().collect();
    replace_top(it, 2, joined);
}

fn car(it: &mut Interpreter) {
    let Some(top) = it.stacks.code.peek() else {
        return;
    };
    let first = match top {
        Code::List(items) => items.first().cloned().unwrap_or_else(Code::empty),
        atom => atom.clone(),
    };
    replace_top(it, 1, first);
}

fn cdr(it: &mut Interpreter) {
    let Some(top) = it.stacks.code.peek() else {
        return;
    };
    let rest = match top {
        Code::List(items) => items.iter().skip(1).cloned().collect(),
        Code::Atom(_) => Code::empty(),
    };
    replace_top(it, 1, rest);
}

/// The second item prepended to the top.
fn cons(it: &mut Interpreter) {
    let (Some(top), Some(second)) = (it.stacks.code.get(0), it.stacks.code.get(1)) else {
        return;
    };
    let joined: Code = std::iter::once(second).chain(items(top)).cloned().collect();
    replace_top(it, 2, joined);
}

/// Whether the second item contains the top anywhere.
fn contains(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 2) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    if let (Some(top), Some(second)) = (it.stacks.code.pop(), it.stacks.code.pop()) {
        it.stacks.boolean.push(second.contains(&top));
    }
}

/// Whether the second item is an element of the top.
fn member(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 2) || !it.is_enabled(StackKind::Boolean) {
        return;
    }
    if let (Some(top), Some(second)) = (it.stacks.code.pop(), it.stacks.code.pop()) {
        it.stacks.boolean.push(items(&top).contains(&second));
    }
}

/// Push the tree bound to the top name. Unbound names are left in place.
fn definition(it: &mut Interpreter) {
    if !it.is_enabled(StackKind::Code) {
        return;
    }
    let Some(bound) = it.stacks.name.peek().and_then(|n| it.definition(n)).cloned() else {
        return;
    };
    it.stacks.name.pop();
    it.stacks.code.push(bound);
}

/// Execute the top item, popping it from the code stack afterwards.
fn do_(it: &mut Interpreter) {
    let Some(top) = it.stacks.code.peek().cloned() else {
        return;
    };
    it.stacks.exec.push(Code::atom("code.pop"));
    it.stacks.exec.push(top);
}

/// Pop the top item and execute it.
fn do_star(it: &mut Interpreter) {
    if let Some(top) = it.stacks.code.pop() {
        it.stacks.exec.push(top);
    }
}

fn do_range(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 1) || !it.has(StackKind::Integer, 2) {
        return;
    }
    let (Some(destination), Some(current), Some(body)) = (
        it.stacks.integer.pop(),
        it.stacks.integer.pop(),
        it.stacks.code.pop(),
    ) else {
        return;
    };
    let again = body.clone();
    loop_step(it, current, destination, body, |next| {
        Code::list(vec![
            integer_atom(next),
            integer_atom(destination),
            Code::atom("code.quote"),
            again,
            Code::atom("code.do*range"),
        ])
    });
}

/// Body runs `n` times with the counter `0..n` pushed each time.
fn do_count(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 1) || !it.has(StackKind::Integer, 1) {
        return;
    }
    let Some(&n) = it.stacks.integer.peek() else {
        return;
    };
    if n < 1 {
        return;
    }
    it.stacks.integer.pop();
    let Some(body) = it.stacks.code.pop() else {
        return;
    };
    it.stacks.exec.push(counted_loop(n, body));
}

fn do_times(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) {
        return;
    }
    let (Some(&n), Some(body)) = (it.stacks.integer.peek(), it.stacks.code.peek()) else {
        return;
    };
    if n < 1 {
        return;
    }
    let mut wrapped = vec![Code::atom("integer.pop")];
    wrapped.extend(items(body).iter().cloned());
    let body = Code::list(wrapped);
    if !it.fits(&body) {
        return;
    }
    it.stacks.integer.pop();
    it.stacks.code.pop();
    it.stacks.exec.push(counted_loop(n, body));
}

fn counted_loop(n: i64, body: Code) -> Code {
    Code::list(vec![
        integer_atom(0),
        integer_atom(n - 1),
        Code::atom("code.quote"),
        body,
        Code::atom("code.do*range"),
    ])
}

/// The subtree at the top integer's point index, wrapped modulo the size.
fn extract(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) || !it.has(StackKind::Code, 1) {
        return;
    }
    let (Some(index), Some(top)) = (it.stacks.integer.pop(), it.stacks.code.pop()) else {
        return;
    };
    let sub = top.nth_point(index.unsigned_abs() as usize).clone();
    it.stacks.code.push(sub);
}

fn from_boolean(it: &mut Interpreter) {
    if !it.has(StackKind::Boolean, 1) {
        return;
    }
    if let Some(b) = it.stacks.boolean.pop() {
        it.stacks.code.push(Code::atom(format_boolean(b)));
    }
}

fn from_float(it: &mut Interpreter) {
    if !it.has(StackKind::Float, 1) {
        return;
    }
    if let Some(f) = it.stacks.float.pop() {
        it.stacks.code.push(Code::Atom(format_float(f)));
    }
}

fn from_integer(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) {
        return;
    }
    if let Some(i) = it.stacks.integer.pop() {
        it.stacks.code.push(Code::Atom(format_integer(i)));
    }
}

fn from_name(it: &mut Interpreter) {
    if !it.has(StackKind::Name, 1) {
        return;
    }
    if let Some(n) = it.stacks.name.pop() {
        it.stacks.code.push(Code::Atom(n));
    }
}

/// Execute the second item if the top boolean is true, the top otherwise.
/// Both items and the boolean are consumed.
fn if_(it: &mut Interpreter) {
    if !it.has(StackKind::Boolean, 1) || !it.has(StackKind::Code, 2) {
        return;
    }
    let (Some(condition), Some(top), Some(second)) = (
        it.stacks.boolean.pop(),
        it.stacks.code.pop(),
        it.stacks.code.pop(),
    ) else {
        return;
    };
    it.stacks.exec.push(if condition { second } else { top });
}

fn length(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 1) || !it.is_enabled(StackKind::Integer) {
        return;
    }
    if let Some(top) = it.stacks.code.pop() {
        it.stacks.integer.push(items(&top).len() as i64);
    }
}

/// `( second top )`.
fn list(it: &mut Interpreter) {
    let (Some(top), Some(second)) = (it.stacks.code.get(0), it.stacks.code.get(1)) else {
        return;
    };
    let pair = Code::list(vec![second.clone(), top.clone()]);
    replace_top(it, 2, pair);
}

/// Element at the top integer's index, wrapped modulo the length.
fn nth(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) || !it.has(StackKind::Code, 1) {
        return;
    }
    let (Some(index), Some(top)) = (it.stacks.integer.pop(), it.stacks.code.pop()) else {
        return;
    };
    let elements = items(&top);
    let picked = if elements.is_empty() {
        Code::empty()
    } else {
        elements[wrap(index, elements.len())].clone()
    };
    it.stacks.code.push(picked);
}

/// The top with its first `index` elements removed, index wrapped modulo
/// the length.
fn nth_cdr(it: &mut Interpreter) {
    if !it.has(StackKind::Integer, 1) || !it.has(StackKind::Code, 1) {
        return;
    }
    let (Some(index), Some(top)) = (it.stacks.integer.pop(), it.stacks.code.pop()) else {
        return;
    };
    let elements = items(&top);
    let rest = if elements.is_empty() {
        Code::empty()
    } else {
        elements[wrap(index, elements.len())..].iter().cloned().collect()
    };
    it.stacks.code.push(rest);
}

fn wrap(index: i64, len: usize) -> usize {
    (index.unsigned_abs() % len as u64) as usize
}

/// Move the next exec item onto the code stack unexecuted, unless it is
/// over `max-points-in-program`.
fn quote(it: &mut Interpreter) {
    match it.stacks.exec.peek() {
        Some(next) if it.fits(next) => {}
        _ => return,
    }
    if let Some(next) = it.stacks.exec.pop() {
        it.stacks.code.push(next);
    }
}

/// A random program of at most `|top integer|` points, capped by
/// `max-points-in-random-expressions`. A result over `max-points-in-program`
/// is discarded.
fn rand(it: &mut Interpreter) {
    let Some(&requested) = it.stacks.integer.peek() else {
        return;
    };
    if requested == 0 || !it.is_enabled(StackKind::Integer) {
        return;
    }
    let cap = it.options().max_points_in_random_expressions();
    let max_points = usize::try_from(requested.unsigned_abs()).unwrap_or(usize::MAX).min(cap);
    let code = random_code(it, max_points);
    if !it.fits(&code) {
        return;
    }
    it.stacks.integer.pop();
    it.stacks.code.push(code);
}

fn size(it: &mut Interpreter) {
    if !it.has(StackKind::Code, 1) || !it.is_enabled(StackKind::Integer) {
        return;
    }
    if let Some(top) = it.stacks.code.pop() {
        it.stacks.integer.push(top.points() as i64);
    }
}
