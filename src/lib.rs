//! # Evolve Chess
//!
//! A two-player variant chess rules engine with a points economy. Captures earn points,
//! and points buy individual pieces new movement abilities or a short-range teleport.
//!
//! - [`core`]: squares, colours, pieces, abilities and bitboards
//! - [`board`]: the grid, placement parsing and per-piece move generation
//! - [`game`]: the session controller, economy and command outcomes
//! - [`config`]: tunable economy constants, optionally read from TOML
//! - [`cli`]: the line-oriented terminal front end

pub mod board;
pub mod cli;
pub mod config;
pub mod core;
pub mod game;
mod utils;

pub use board::Board;
pub use config::{ConfigError, RulesConfig};
pub use game::{Event, Phase, Rejection, Session};
