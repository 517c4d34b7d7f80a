use rand::seq::SliceRandom;

use crate::random_code::random_name;
use crate::registry::InstructionRegistry;
use crate::stacks::NameStack;
use crate::{Interpreter, StackKind};

use super::common;

pub(crate) fn install(registry: &mut InstructionRegistry) {
    let kind = StackKind::Name;
    registry.register(kind, "quote", quote);
    registry.register(kind, "rand", rand);
    registry.register(kind, "randboundname", rand_bound_name);
    common::install::<NameStack>(registry);
}

/// The next name token is pushed as-is, even if it is bound.
fn quote(it: &mut Interpreter) {
    it.quote_next_name = true;
}

fn rand(it: &mut Interpreter) {
    let name = random_name(it);
    it.stacks.name.push(name);
}

/// One of the currently bound names, chosen uniformly.
fn rand_bound_name(it: &mut Interpreter) {
    let names = it
        .defined_names()
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if let Some(name) = names.choose(&mut it.rng) {
        it.stacks.name.push(name.clone());
    }
}
