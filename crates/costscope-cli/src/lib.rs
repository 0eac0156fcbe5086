//! Thin command-line surface over `costscope-runtime`. Each subcommand maps
//! onto one of the four public pipeline operations; no business logic here.

mod args;
mod commands;
mod output;

pub use args::{Cli, Commands};
pub use commands::run;
