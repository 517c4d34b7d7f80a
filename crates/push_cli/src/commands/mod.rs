use std::io::Write;

pub(crate) mod config;
pub(crate) mod parse;
pub(crate) mod run;
pub(crate) mod tokens;

pub(crate) const EXIT_OK: i32 = 0;
pub(crate) const EXIT_RUN_ERROR: i32 = 1;
pub(crate) const EXIT_INPUT_ERROR: i32 = 2;
pub(crate) const EXIT_STEP_LIMIT: i32 = 3;

/// Write `text` to stdout. A closed pipe is not an error.
pub(crate) fn print_out(text: &str) -> i32 {
    let mut out = std::io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => EXIT_OK,
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => EXIT_OK,
        Err(e) => {
            eprintln!("stdout error: {e}");
            EXIT_INPUT_ERROR
        }
    }
}
