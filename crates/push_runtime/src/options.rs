//! Interpreter limits and behaviour switches.
//!
//! `Options` can only be obtained from a validated `OptionsBuilder`, so an
//! interpreter never sees a partially valid configuration.

use std::collections::BTreeSet;

use crate::errors::ConfigError;
use crate::StackKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    top_level_push_code: bool,
    top_level_pop_code: bool,
    eval_push_limit: usize,
    new_erc_name_probability: f64,
    max_points_in_program: usize,
    max_points_in_random_expressions: usize,
    min_random_integer: i64,
    max_random_integer: i64,
    min_random_float: f64,
    max_random_float: f64,
    tracing: bool,
    random_seed: i64,
    allowed_types: BTreeSet<StackKind>,
    allowed_instructions: BTreeSet<String>,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// A builder preloaded with these values, for overriding a few fields.
    pub fn to_builder(&self) -> OptionsBuilder {
        OptionsBuilder {
            top_level_push_code: self.top_level_push_code,
            top_level_pop_code: self.top_level_pop_code,
            eval_push_limit: self.eval_push_limit as i64,
            new_erc_name_probability: self.new_erc_name_probability,
            max_points_in_program: self.max_points_in_program as i64,
            max_points_in_random_expressions: self.max_points_in_random_expressions as i64,
            min_random_integer: self.min_random_integer,
            max_random_integer: self.max_random_integer,
            min_random_float: self.min_random_float,
            max_random_float: self.max_random_float,
            tracing: self.tracing,
            random_seed: self.random_seed,
            allowed_types: self.allowed_types.clone(),
            allowed_instructions: self.allowed_instructions.clone(),
        }
    }

    pub fn top_level_push_code(&self) -> bool {
        self.top_level_push_code
    }

    pub fn top_level_pop_code(&self) -> bool {
        self.top_level_pop_code
    }

    /// Step budget per top-level run.
    pub fn eval_push_limit(&self) -> usize {
        self.eval_push_limit
    }

    pub fn new_erc_name_probability(&self) -> f64 {
        self.new_erc_name_probability
    }

    pub fn max_points_in_program(&self) -> usize {
        self.max_points_in_program
    }

    pub fn max_points_in_random_expressions(&self) -> usize {
        self.max_points_in_random_expressions
    }

    pub fn random_integer_range(&self) -> (i64, i64) {
        (self.min_random_integer, self.max_random_integer)
    }

    pub fn random_float_range(&self) -> (f64, f64) {
        (self.min_random_float, self.max_random_float)
    }

    pub fn tracing(&self) -> bool {
        self.tracing
    }

    pub fn random_seed(&self) -> i64 {
        self.random_seed
    }

    /// Whether `kind` is enabled. The exec stack always is.
    pub fn allows_type(&self, kind: StackKind) -> bool {
        kind == StackKind::Exec || self.allowed_types.is_empty() || self.allowed_types.contains(&kind)
    }

    /// Whether the fully qualified `stack.operation` is enabled.
    pub fn allows_instruction(&self, qualified: &str) -> bool {
        self.allowed_instructions.is_empty() || self.allowed_instructions.contains(qualified)
    }

    pub fn allowed_types(&self) -> &BTreeSet<StackKind> {
        &self.allowed_types
    }

    pub fn allowed_instructions(&self) -> &BTreeSet<String> {
        &self.allowed_instructions
    }

    /// The effective settings in configuration-file syntax. Reading the
    /// result back yields equal options.
    pub fn to_config_string(&self) -> String {
        let mut out = String::new();
        let mut line = |key: &str, value: String| {
            out.push_str(key);
            out.push(' ');
            out.push_str(&value);
            out.push('\n');
        };
        line("min-random-integer", self.min_random_integer.to_string());
        line("max-random-integer", self.max_random_integer.to_string());
        line("min-random-float", format!("{:?}", self.min_random_float));
        line("max-random-float", format!("{:?}", self.max_random_float));
        line(
            "max-points-in-random-expressions",
            self.max_points_in_random_expressions.to_string(),
        );
        line("max-points-in-program", self.max_points_in_program.to_string());
        line("evalpush-limit", self.eval_push_limit.to_string());
        line(
            "new-erc-name-probability",
            format!("{:?}", self.new_erc_name_probability),
        );
        line("random-seed", self.random_seed.to_string());
        line("top-level-push-code", self.top_level_push_code.to_string());
        line("top-level-pop-code", self.top_level_pop_code.to_string());
        line("tracing", self.tracing.to_string());
        for kind in &self.allowed_types {
            line("type", kind.name().to_owned());
        }
        for name in &self.allowed_instructions {
            line("instruction", name.clone());
        }
        out
    }
}

impl Default for Options {
    fn default() -> Self {
        OptionsBuilder::default().validated()
    }
}

/// Unvalidated settings. Size fields are signed so that out-of-range
/// input survives until `build` can report it.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionsBuilder {
    pub top_level_push_code: bool,
    pub top_level_pop_code: bool,
    pub eval_push_limit: i64,
    pub new_erc_name_probability: f64,
    pub max_points_in_program: i64,
    pub max_points_in_random_expressions: i64,
    pub min_random_integer: i64,
    pub max_random_integer: i64,
    pub min_random_float: f64,
    pub max_random_float: f64,
    pub tracing: bool,
    pub random_seed: i64,
    pub allowed_types: BTreeSet<StackKind>,
    pub allowed_instructions: BTreeSet<String>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            top_level_push_code: true,
            top_level_pop_code: false,
            eval_push_limit: 1000,
            new_erc_name_probability: 0.001,
            max_points_in_program: 100,
            max_points_in_random_expressions: 25,
            min_random_integer: -10,
            max_random_integer: 10,
            min_random_float: -1.0,
            max_random_float: 1.0,
            tracing: false,
            random_seed: 0,
            allowed_types: BTreeSet::new(),
            allowed_instructions: BTreeSet::new(),
        }
    }
}

impl OptionsBuilder {
    pub fn eval_push_limit(mut self, limit: i64) -> Self {
        self.eval_push_limit = limit;
        self
    }

    pub fn max_points_in_program(mut self, points: i64) -> Self {
        self.max_points_in_program = points;
        self
    }

    pub fn random_seed(mut self, seed: i64) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn tracing(mut self, on: bool) -> Self {
        self.tracing = on;
        self
    }

    pub fn build(self) -> Result<Options, ConfigError> {
        let at_least_one = |field: &'static str, value: i64| {
            if value < 1 {
                Err(ConfigError::TooSmall { field, value })
            } else {
                Ok(value as usize)
            }
        };
        let max_points_in_random_expressions = at_least_one(
            "MAX-POINTS-IN-RANDOM-EXPRESSIONS",
            self.max_points_in_random_expressions,
        )?;
        let max_points_in_program = at_least_one("MAX-POINTS-IN-PROGRAM", self.max_points_in_program)?;
        let eval_push_limit = at_least_one("EVALPUSH-LIMIT", self.eval_push_limit)?;

        let p = self.new_erc_name_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange(p));
        }

        if self.min_random_integer > self.max_random_integer {
            return Err(ConfigError::IntegerRange {
                min: self.min_random_integer,
                max: self.max_random_integer,
            });
        }

        for (field, value) in [
            ("MIN-RANDOM-FLOAT", self.min_random_float),
            ("MAX-RANDOM-FLOAT", self.max_random_float),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.min_random_float > self.max_random_float {
            return Err(ConfigError::FloatRange {
                min: self.min_random_float,
                max: self.max_random_float,
            });
        }

        Ok(Options {
            top_level_push_code: self.top_level_push_code,
            top_level_pop_code: self.top_level_pop_code,
            eval_push_limit,
            new_erc_name_probability: p,
            max_points_in_program,
            max_points_in_random_expressions,
            min_random_integer: self.min_random_integer,
            max_random_integer: self.max_random_integer,
            min_random_float: self.min_random_float,
            max_random_float: self.max_random_float,
            tracing: self.tracing,
            random_seed: self.random_seed,
            allowed_types: self.allowed_types,
            allowed_instructions: self.allowed_instructions,
        })
    }

    /// Builds the default settings, which are valid by construction.
    fn validated(self) -> Options {
        Options {
            top_level_push_code: self.top_level_push_code,
            top_level_pop_code: self.top_level_pop_code,
            eval_push_limit: self.eval_push_limit as usize,
            new_erc_name_probability: self.new_erc_name_probability,
            max_points_in_program: self.max_points_in_program as usize,
            max_points_in_random_expressions: self.max_points_in_random_expressions as usize,
            min_random_integer: self.min_random_integer,
            max_random_integer: self.max_random_integer,
            min_random_float: self.min_random_float,
            max_random_float: self.max_random_float,
            tracing: self.tracing,
            random_seed: self.random_seed,
            allowed_types: self.allowed_types,
            allowed_instructions: self.allowed_instructions,
        }
    }
}
