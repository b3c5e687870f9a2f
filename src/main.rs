//! Line Tools - Unix-style line processing
//!
//! Main entry point for the command-line application.

use std::io;
use std::process;

use line_tools::processor::run;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let code = run(std::env::args_os(), stdin.lock(), stdout.lock());
    process::exit(code);
}
