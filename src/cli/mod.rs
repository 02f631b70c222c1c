//! Command-line interface.

pub mod args;
pub mod check;
mod output;
pub mod paths;
pub mod query;
pub mod relations;
pub mod resolve;

pub use args::{Cli, Commands};
