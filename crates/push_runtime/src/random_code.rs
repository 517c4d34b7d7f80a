//! Ephemeral random constants and random program generation.
//!
//! All draws come from the interpreter's seeded source, so identical
//! seeds and programs give identical results.

use push_core::{Code, format_boolean, format_float, format_integer};
use rand::Rng;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::{Interpreter, StackKind};

pub(crate) fn random_integer(it: &mut Interpreter) -> i64 {
    let (min, max) = it.options().random_integer_range();
    it.rng.gen_range(min..=max)
}

/// Interpolates between the ends, so spans wider than `f64::MAX` stay finite.
pub(crate) fn random_float(it: &mut Interpreter) -> f64 {
    let (min, max) = it.options().random_float_range();
    let t: f64 = it.rng.r#gen();
    (min * (1.0 - t) + max * t).clamp(min, max)
}

pub(crate) fn random_boolean(it: &mut Interpreter) -> bool {
    it.rng.gen_bool(0.5)
}

/// A fresh name with probability `new-erc-name-probability` (always when
/// none exists yet), otherwise one of the names minted before.
pub(crate) fn random_name(it: &mut Interpreter) -> String {
    let p = it.options().new_erc_name_probability();
    let fresh = it.minted_names.is_empty() || it.rng.gen_bool(p);
    if !fresh {
        if let Some(name) = it.minted_names.choose(&mut it.rng) {
            return name.clone();
        }
    }
    let name = format!("_n{}", it.minted_names.len());
    it.minted_names.push(name.clone());
    name
}

enum Leaf {
    Instruction(String),
    Integer,
    Float,
    Boolean,
    Name,
}

/// A random program of between 1 and `max_points` points.
pub fn random_code(it: &mut Interpreter, max_points: usize) -> Code {
    let mut leaves: Vec<Leaf> = it
        .instruction_names()
        .into_iter()
        .map(Leaf::Instruction)
        .collect();
    for (kind, leaf) in [
        (StackKind::Integer, Leaf::Integer),
        (StackKind::Float, Leaf::Float),
        (StackKind::Boolean, Leaf::Boolean),
        (StackKind::Name, Leaf::Name),
    ] {
        if it.is_enabled(kind) {
            leaves.push(leaf);
        }
    }
    let points = it.rng.gen_range(1..=max_points.max(1));
    generate(it, &leaves, points)
}

fn generate(it: &mut Interpreter, leaves: &[Leaf], points: usize) -> Code {
    if points <= 1 {
        return leaf(it, leaves);
    }
    let parts = decompose(it, points - 1);
    Code::List(parts.into_iter().map(|p| generate(it, leaves, p)).collect())
}

/// Split `number` into a random sequence of positive parts.
fn decompose(it: &mut Interpreter, mut number: usize) -> SmallVec<[usize; 8]> {
    let mut parts = SmallVec::new();
    while number > 1 {
        let part = it.rng.gen_range(1..number);
        parts.push(part);
        number -= part;
    }
    parts.push(number);
    parts
}

fn leaf(it: &mut Interpreter, leaves: &[Leaf]) -> Code {
    if leaves.is_empty() {
        return Code::empty();
    }
    let index = it.rng.gen_range(0..leaves.len());
    match &leaves[index] {
        Leaf::Instruction(name) => Code::Atom(name.clone()),
        Leaf::Integer => Code::Atom(format_integer(random_integer(it))),
        Leaf::Float => Code::Atom(format_float(random_float(it))),
        Leaf::Boolean => Code::atom(format_boolean(random_boolean(it))),
        Leaf::Name => Code::Atom(random_name(it)),
    }
}
