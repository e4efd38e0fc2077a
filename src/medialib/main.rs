//! The `medialib` binary: loads catalogs given on the command line, then reads
//! commands from stdin until `quit` or end of input.
//!
//! All of the work happens in `cli`; this file only runs it and turns an error
//! into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
