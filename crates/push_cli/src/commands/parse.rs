use std::path::Path;

use push_parser::parse_file;

use super::{EXIT_INPUT_ERROR, print_out};

pub(crate) fn run(path: &Path) -> i32 {
    let code = match parse_file(path).and_then(|parsed| parsed.into_code()) {
        Ok(code) => code,
        Err(e) => {
            eprint!("{}", e.render());
            return EXIT_INPUT_ERROR;
        }
    };
    print_out(&format!("{code}\n"))
}
