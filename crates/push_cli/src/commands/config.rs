use std::path::Path;

use push_runtime::Options;

use super::{EXIT_INPUT_ERROR, print_out};

pub(crate) fn run(path: Option<&Path>) -> i32 {
    let options = match path.map(Options::load).unwrap_or_else(|| Ok(Options::default())) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_INPUT_ERROR;
        }
    };
    print_out(&options.to_config_string())
}
