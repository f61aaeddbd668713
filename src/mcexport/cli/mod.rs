//! # CLI Layer
//!
//! This module is **one possible UI client** for mcexport. It is the only
//! place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the logging subscriber
//!
//! ## Streams
//!
//! The exported document is the only thing written to stdout. Status
//! messages, errors, and `tracing` diagnostics all go to stderr, so
//! `mcexport db.json -t json | jq` works.
//!
//! ## Settings Precedence
//!
//! Command-line flag, then `config.json` (see [`mcexport::config`]), then the
//! built-in default.
//!
//! ## Module Structure
//!
//! - `commands`: The `run` entry point
//! - `logging`: `tracing-subscriber` setup
//! - `print`: Message printing
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
