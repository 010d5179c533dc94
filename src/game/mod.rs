//! # Module: `game`
//!
//! The game session and everything it reports back: the points economy, the phase
//! machine, and the events and rejections produced by player commands.

pub mod economy;
pub mod event;
pub mod session;

pub use economy::Economy;
pub use event::{Event, Phase, Rejection, Status};
pub use session::Session;
