use std::fmt::Write as _;

use push_parser::{ParseError, parse_file, parse_program};
use push_runtime::{Code, Interpreter, Options, RunError, StackKind};
use serde_json::{Map, Value, json};
use tracing::info;

use super::{EXIT_INPUT_ERROR, EXIT_RUN_ERROR, EXIT_STEP_LIMIT, print_out};
use crate::args::RunArgs;

pub(crate) fn run(args: &RunArgs) -> i32 {
    let options = match options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            return EXIT_INPUT_ERROR;
        }
    };
    let program = match program(args) {
        Ok(program) => program,
        Err(e) => {
            eprint!("{}", e.render());
            return EXIT_INPUT_ERROR;
        }
    };

    let mut interp = Interpreter::new(options);
    let result = interp.run_code(program);
    info!(steps = interp.step_count(), "program finished");

    let mut out = interp.take_output();
    if args.json {
        out.push_str(&state_json(&interp, &result).to_string());
        out.push('\n');
    } else {
        out.push_str(&state_text(&interp));
    }
    let printed = print_out(&out);

    match result {
        Ok(()) => printed,
        Err(e) => {
            eprintln!("error: {e}");
            if let RunError::UnknownInstruction {
                stack,
                suggestion: Some(s),
                ..
            } = &e
            {
                eprintln!("help: did you mean `{stack}.{s}`?");
            }
            if e.is_step_limit() {
                EXIT_STEP_LIMIT
            } else {
                EXIT_RUN_ERROR
            }
        }
    }
}

/// Defaults or the configuration file, then command-line overrides. The
/// combination is validated once.
fn options(args: &RunArgs) -> Result<Options, String> {
    let base = match &args.config {
        Some(path) => Options::load(path).map_err(|e| e.to_string())?,
        None => Options::default(),
    };
    let mut builder = base.to_builder();
    if args.trace {
        builder.tracing = true;
    }
    if let Some(seed) = args.seed {
        builder.random_seed = seed;
    }
    if let Some(limit) = args.limit {
        builder.eval_push_limit = limit;
    }
    builder.build().map_err(|e| e.to_string())
}

fn program(args: &RunArgs) -> Result<Code, ParseError> {
    match (&args.file, &args.eval) {
        (Some(path), _) => parse_file(path)?.into_code(),
        (None, Some(text)) => parse_program("<eval>", text).into_code(),
        (None, None) => Ok(Code::empty()),
    }
}

fn enabled_kinds(interp: &Interpreter) -> impl Iterator<Item = StackKind> + '_ {
    StackKind::ALL.into_iter().filter(|k| interp.is_enabled(*k))
}

fn state_text(interp: &Interpreter) -> String {
    let mut out = String::new();
    for kind in enabled_kinds(interp) {
        let items = interp.stacks().render(kind);
        let _ = writeln!(out, "{kind}: [{}]", items.join(" "));
    }
    out
}

fn state_json(interp: &Interpreter, result: &Result<(), RunError>) -> Value {
    let stacks = interp.stacks();
    let mut map = Map::new();
    for kind in enabled_kinds(interp) {
        let items: Vec<Value> = match kind {
            StackKind::Integer => stacks.integer.iter_top_down().map(|i| json!(i)).collect(),
            StackKind::Float => stacks.float.iter_top_down().map(|f| json!(f)).collect(),
            StackKind::Boolean => stacks.boolean.iter_top_down().map(|b| json!(b)).collect(),
            _ => stacks.render(kind).into_iter().map(Value::String).collect(),
        };
        map.insert(kind.name().to_owned(), Value::Array(items));
    }
    let status = match result {
        Ok(()) => "ok",
        Err(e) if e.is_step_limit() => "step-limit",
        Err(_) => "error",
    };
    json!({
        "status": status,
        "steps": interp.step_count(),
        "stacks": map,
    })
}
