//! # Module: `cli`
//!
//! Line-oriented terminal front end: command parsing and the read-print loop.

mod command;
mod interface;

pub use command::{Command, CommandError};
pub use interface::Interface;
