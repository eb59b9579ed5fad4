//! QRGEN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to
//! the selected profile, and exit with appropriate status.
//! For programmatic use, prefer the library API (`qrgen::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
