//! Sorting tool command line entry point

use std::process;

use sorting_tool::{
    args::parse_args,
    error::{report_warnings, SortError, SortResult},
    sort,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        // clap renders help, version and usage errors itself
        Err(SortError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let args: Vec<String> = std::env::args().collect();

    let mut warnings = Vec::new();
    let parsed = parse_args(&args, &mut warnings);
    report_warnings(&warnings);

    sort(&parsed?)
}
