//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Args, CliCommand, OutputFormat};
pub use commands::execute;
