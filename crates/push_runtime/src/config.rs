//! Line-oriented configuration files.
//!
//! ```text
//! # comment
//! evalpush-limit 500
//! type integer
//! instruction integer.+
//! ```
//!
//! Every line is applied to an `OptionsBuilder` first; cross-field checks
//! run once at the end.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::errors::ConfigError;
use crate::options::{Options, OptionsBuilder};
use crate::registry::InstructionRegistry;
use crate::StackKind;

impl Options {
    pub fn read(reader: impl BufRead) -> Result<Options, ConfigError> {
        let mut builder = OptionsBuilder::default();
        let catalogue = InstructionRegistry::standard();
        for line in reader.lines() {
            let line = line.map_err(|source| ConfigError::Io {
                path: "<reader>".to_owned(),
                source,
            })?;
            apply_line(&mut builder, &catalogue, &line)?;
        }
        builder.build()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Options, ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        Options::read(BufReader::new(file))
    }
}

impl FromStr for Options {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Options::read(s.as_bytes())
    }
}

fn apply_line(
    builder: &mut OptionsBuilder,
    catalogue: &InstructionRegistry,
    line: &str,
) -> Result<(), ConfigError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }
    let mut fields = line.split_whitespace();
    let Some(key) = fields.next() else {
        return Ok(());
    };
    let key = key.to_lowercase();
    let value = fields.next();

    match key.as_str() {
        "min-random-integer" => builder.min_random_integer = integer(&key, value)?,
        "max-random-integer" => builder.max_random_integer = integer(&key, value)?,
        "max-points-in-random-expressions" => {
            builder.max_points_in_random_expressions = integer(&key, value)?
        }
        "max-points-in-program" => builder.max_points_in_program = integer(&key, value)?,
        "evalpush-limit" => builder.eval_push_limit = integer(&key, value)?,
        "random-seed" => builder.random_seed = integer(&key, value)?,
        "min-random-float" => builder.min_random_float = float(&key, value)?,
        "max-random-float" => builder.max_random_float = float(&key, value)?,
        "new-erc-name-probability" => builder.new_erc_name_probability = float(&key, value)?,
        "top-level-push-code" => builder.top_level_push_code = boolean(&key, value)?,
        "top-level-pop-code" => builder.top_level_pop_code = boolean(&key, value)?,
        "tracing" => builder.tracing = boolean(&key, value)?,
        "type" => {
            let name = setting(&key, value)?;
            let kind = StackKind::from_name(name)
                .ok_or_else(|| ConfigError::UnknownType(name.to_owned()))?;
            builder.allowed_types.insert(kind);
        }
        "instruction" => {
            let name = setting(&key, value)?;
            let known = name
                .split_once('.')
                .and_then(|(stack, op)| Some((StackKind::from_name(stack)?, op)))
                .is_some_and(|(kind, op)| catalogue.contains(kind, op));
            if !known {
                return Err(ConfigError::UnknownInstruction(name.to_owned()));
            }
            builder.allowed_instructions.insert(name.to_lowercase());
        }
        _ => return Err(ConfigError::UnknownParameter(key)),
    }
    Ok(())
}

fn setting<'a>(key: &str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingSetting(key.to_owned()))
}

fn integer(key: &str, value: Option<&str>) -> Result<i64, ConfigError> {
    let value = setting(key, value)?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidInteger(value.to_owned()))
}

fn float(key: &str, value: Option<&str>) -> Result<f64, ConfigError> {
    let value = setting(key, value)?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidFloat(value.to_owned()))
}

/// `true`/`false` in any case, or `1`/`0`.
fn boolean(key: &str, value: Option<&str>) -> Result<bool, ConfigError> {
    let value = setting(key, value)?;
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBoolean(value.to_owned()))
    }
}
