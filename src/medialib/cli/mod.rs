//! # CLI Layer
//!
//! One possible client of the library, and the only code that touches the
//! terminal.
//!
//! - `setup`: clap definitions for process arguments and prompt lines
//! - `commands`: startup, logging, and the prompt loop
//! - `render`: turns `CmdResult` into text

mod commands;
mod render;
mod setup;

pub use commands::run;
