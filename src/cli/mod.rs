//! Command Line Interface (CLI) layer for QRGEN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the interactive URL prompt (`prompt`), and the orchestration logic
//! (`runner`) for the two generation profiles. It wires user-provided
//! options to the underlying library functionality exposed via `qrgen::api`.
//!
//! If you are embedding QRGEN into another application, prefer using
//! the high-level `qrgen::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod prompt;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
