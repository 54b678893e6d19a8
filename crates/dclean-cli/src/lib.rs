//! Library surface of the `dclean` CLI: argument definitions, command
//! implementations, logging setup, and summary rendering.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
