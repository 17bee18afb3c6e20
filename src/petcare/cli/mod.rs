//! # CLI Behavior
//!
//! This is **one possible UI client** for petcare, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. It is also where user input is validated: empty names,
//! empty task labels, zero frequencies and empty descriptions never reach the
//! library.
//!
//! Running `petcare` with no arguments lists the pets.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Output formatting (lists, task views, messages)
//! - `setup`: Argument parsing via clap, logging setup

mod commands;
mod render;
pub mod setup;

pub use commands::run;
