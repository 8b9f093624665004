//! Command-line front-end: flag parsing, mode selection and the interactive loop

pub mod args;
pub mod commands;
pub mod interactive;

pub use commands::{Cli, dispatch, parse_args, run};
pub use interactive::run_interactive;
