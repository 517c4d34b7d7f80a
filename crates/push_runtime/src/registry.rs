use indexmap::IndexMap;

use crate::instructions;
use crate::{Interpreter, StackKind};

/// An instruction never fails: unmet preconditions make it a no-op.
pub type Instruction = fn(&mut Interpreter);

/// Collects `(stack, operation, fn)` registrations in order.
pub struct InstructionRegistry {
    entries: Vec<(StackKind, String, Instruction)>,
}

impl InstructionRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding every built-in instruction.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        StdInstructionProvider.install(&mut registry);
        registry
    }

    pub fn register(&mut self, kind: StackKind, operation: &str, fun: Instruction) {
        self.entries.push((kind, operation.to_lowercase(), fun));
    }

    /// Fully qualified `stack.operation` names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(kind, op, _)| format!("{kind}.{op}"))
            .collect()
    }

    pub fn contains(&self, kind: StackKind, operation: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, op, _)| *k == kind && op.eq_ignore_ascii_case(operation))
    }

    /// Split the registrations into one table per stack, keeping only
    /// those `keep` accepts. Later registrations replace earlier ones with
    /// the same name.
    pub(crate) fn into_tables(
        self,
        mut keep: impl FnMut(StackKind, &str) -> bool,
    ) -> IndexMap<StackKind, InstructionTable> {
        let mut tables: IndexMap<StackKind, InstructionTable> = IndexMap::new();
        for (kind, op, fun) in self.entries {
            if keep(kind, &op) {
                tables.entry(kind).or_default().ops.insert(op, fun);
            }
        }
        tables
    }
}

impl Default for InstructionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One stack's operations, immutable once the interpreter is built.
#[derive(Clone, Default)]
pub struct InstructionTable {
    ops: IndexMap<String, Instruction>,
}

impl InstructionTable {
    pub fn get(&self, operation: &str) -> Option<Instruction> {
        self.ops.get(operation).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

pub trait InstructionProvider {
    fn install(&self, registry: &mut InstructionRegistry);
}

/// The built-in libraries for all six stacks.
pub struct StdInstructionProvider;

impl InstructionProvider for StdInstructionProvider {
    fn install(&self, registry: &mut InstructionRegistry) {
        instructions::integer::install(registry);
        instructions::float::install(registry);
        instructions::boolean::install(registry);
        instructions::name::install(registry);
        instructions::exec::install(registry);
        instructions::code::install(registry);
    }
}
