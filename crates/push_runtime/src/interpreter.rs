use std::fmt::Write as _;

use indexmap::IndexMap;
use push_core::{Atom, Code, FastHashMap, Value, classify, fast_map_new};
use push_syntax::find_best_match;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use crate::errors::RunError;
use crate::options::Options;
use crate::registry::{InstructionProvider, InstructionRegistry, InstructionTable, StdInstructionProvider};
use crate::stacks::Stacks;
use crate::StackKind;

/// A Push interpreter: typed stacks, name bindings and a seeded random
/// source. Stacks and bindings persist across runs until flushed.
pub struct Interpreter {
    pub(crate) stacks: Stacks,
    tables: IndexMap<StackKind, InstructionTable>,
    definitions: FastHashMap<String, Code>,
    options: Options,
    pub(crate) rng: StdRng,
    step_count: usize,
    pub(crate) quote_next_name: bool,
    pub(crate) minted_names: Vec<String>,
    output: String,
}

impl Interpreter {
    pub fn new(options: Options) -> Self {
        Self::with_providers(options, &[&StdInstructionProvider])
    }

    /// Builds the instruction tables from `providers`, in order, keeping
    /// only what `options` enables.
    pub fn with_providers(options: Options, providers: &[&dyn InstructionProvider]) -> Self {
        let mut registry = InstructionRegistry::new();
        for provider in providers {
            provider.install(&mut registry);
        }
        let mut tables = registry.into_tables(|kind, op| {
            options.allows_type(kind) && options.allows_instruction(&format!("{kind}.{op}"))
        });
        for kind in StackKind::ALL {
            if options.allows_type(kind) {
                tables.entry(kind).or_default();
            }
        }
        tables.sort_keys();

        let rng = StdRng::seed_from_u64(options.random_seed() as u64);
        Self {
            stacks: Stacks::default(),
            tables,
            definitions: fast_map_new(),
            options,
            rng,
            step_count: 0,
            quote_next_name: false,
            minted_names: Vec::new(),
            output: String::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn stacks(&self) -> &Stacks {
        &self.stacks
    }

    pub fn stacks_mut(&mut self) -> &mut Stacks {
        &mut self.stacks
    }

    pub fn is_enabled(&self, kind: StackKind) -> bool {
        self.tables.contains_key(&kind)
    }

    /// `kind` is enabled and holds at least `depth` items.
    pub fn has(&self, kind: StackKind, depth: usize) -> bool {
        self.is_enabled(kind) && self.stacks.len(kind) >= depth
    }

    /// `code` is small enough to be produced by an instruction.
    pub fn fits(&self, code: &Code) -> bool {
        code.points() <= self.options.max_points_in_program()
    }

    /// Bind `name` (case-insensitively), replacing any earlier binding.
    pub fn define(&mut self, name: &str, code: Code) {
        self.definitions.insert(name.to_lowercase(), code);
    }

    pub fn definition(&self, name: &str) -> Option<&Code> {
        self.definitions.get(&name.to_lowercase())
    }

    /// Bound names in sorted order.
    pub fn defined_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every enabled `stack.operation`, stacks in report order.
    pub fn instruction_names(&self) -> Vec<String> {
        self.tables
            .iter()
            .flat_map(|(kind, table)| table.names().map(move |op| format!("{kind}.{op}")))
            .collect()
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn reset_step_count(&mut self) {
        self.step_count = 0;
    }

    /// Empty every stack. Bindings are kept.
    pub fn flush_stacks(&mut self) {
        for kind in StackKind::ALL {
            self.stacks.flush(kind);
        }
    }

    /// Drain the trace buffer.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Parse and run `program`.
    pub fn run(&mut self, program: &str) -> Result<(), RunError> {
        let code = push_parser::parse(program)?;
        self.run_code(code)
    }

    /// Run an already parsed program as a top-level call: the step budget
    /// and the quote flag start fresh, and anything an earlier aborted run
    /// left on the exec stack is discarded.
    pub fn run_code(&mut self, program: Code) -> Result<(), RunError> {
        self.step_count = 0;
        self.quote_next_name = false;
        self.stacks.exec.flush();
        debug!(points = program.points(), "run started");

        if self.options.top_level_push_code() && self.is_enabled(StackKind::Code) {
            self.stacks.code.push(program.clone());
        }
        let result = self.execute(program);
        if self.options.top_level_pop_code() && self.is_enabled(StackKind::Code) {
            self.stacks.code.pop();
        }
        if self.options.tracing() {
            let header = format!("final after {} steps", self.step_count);
            self.write_state(&header);
        }

        debug!(steps = self.step_count, ok = result.is_ok(), "run finished");
        result
    }

    /// Push `program` onto the exec stack and run until it empties. The
    /// step counter keeps counting from where it is.
    pub fn execute(&mut self, program: Code) -> Result<(), RunError> {
        self.stacks.exec.push(program);
        self.resume()
    }

    /// Run whatever is on the exec stack.
    pub fn resume(&mut self) -> Result<(), RunError> {
        let limit = self.options.eval_push_limit();
        while self.step_count < limit {
            let Some(item) = self.stacks.exec.pop() else {
                return Ok(());
            };
            self.step_count += 1;
            trace!(step = self.step_count, item = %item, "step");
            self.step(item)?;
            if self.options.tracing() {
                let header = format!("step {}", self.step_count);
                self.write_state(&header);
            }
        }
        if self.stacks.exec.is_empty() {
            return Ok(());
        }
        warn!(limit, pending = self.stacks.exec.len(), "step limit reached");
        Err(RunError::StepLimitExceeded { limit })
    }

    fn step(&mut self, item: Code) -> Result<(), RunError> {
        let token = match item {
            Code::List(items) => {
                for child in items.into_iter().rev() {
                    self.stacks.exec.push(child);
                }
                return Ok(());
            }
            Code::Atom(token) => token,
        };
        match classify(&token) {
            Atom::Literal(value) => self.push_value(value),
            Atom::Instruction { stack, operation } => return self.dispatch(&token, stack, operation),
            Atom::Name(name) => self.resolve_name(name),
        }
        Ok(())
    }

    fn dispatch(&mut self, token: &str, stack: String, operation: String) -> Result<(), RunError> {
        let Some(table) = StackKind::from_name(&stack).and_then(|k| self.tables.get(&k)) else {
            return Err(RunError::UnknownStack {
                stack,
                instruction: token.to_owned(),
            });
        };
        let Some(fun) = table.get(&operation) else {
            let suggestion = find_best_match(&operation, table.names()).map(str::to_owned);
            return Err(RunError::UnknownInstruction {
                stack,
                operation,
                suggestion,
            });
        };
        fun(self);
        Ok(())
    }

    fn resolve_name(&mut self, name: String) {
        if self.quote_next_name {
            self.quote_next_name = false;
            self.push_value(Value::Name(name));
        } else if let Some(bound) = self.definitions.get(&name) {
            self.stacks.exec.push(bound.clone());
        } else {
            self.push_value(Value::Name(name));
        }
    }

    /// Push onto the stack matching the value's kind. Values for disabled
    /// stacks are dropped.
    pub fn push_value(&mut self, value: Value) {
        let kind = match &value {
            Value::Integer(_) => StackKind::Integer,
            Value::Float(_) => StackKind::Float,
            Value::Boolean(_) => StackKind::Boolean,
            Value::Name(_) => StackKind::Name,
            Value::Code(_) => StackKind::Code,
        };
        if !self.is_enabled(kind) {
            return;
        }
        match value {
            Value::Integer(i) => self.stacks.integer.push(i),
            Value::Float(f) => self.stacks.float.push(f),
            Value::Boolean(b) => self.stacks.boolean.push(b),
            Value::Name(n) => self.stacks.name.push(n),
            Value::Code(c) => self.stacks.code.push(c),
        }
    }

    /// Every enabled stack, top first, under `header`.
    pub fn render_state(&self, header: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{header}");
        for kind in self.tables.keys() {
            let items = self.stacks.render(*kind);
            let _ = writeln!(out, "  {kind}: [{}]", items.join(" "));
        }
        out
    }

    fn write_state(&mut self, header: &str) {
        let state = self.render_state(header);
        self.output.push_str(&state);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
