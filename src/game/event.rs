use thiserror::Error;

use crate::core::{Ability, Colour, PieceType, Square};

/******************************************\
|==========================================|
|                  Phase                   |
|==========================================|
\******************************************/

/// # Game phase
///
/// - `Pregame`: both colours may shop and move freely, the turn never changes
/// - `Active`: only the colour on move acts, and each move or teleport passes the turn
/// - `Finished`: a king has been captured, nothing else is accepted until a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pregame,
    Active,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Pregame => write!(f, "pregame"),
            Phase::Active => write!(f, "active"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/******************************************\
|==========================================|
|                  Events                  |
|==========================================|
\******************************************/

/// What a successful session command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Selected {
        square: Square,
        moves: u32,
    },
    Moved {
        from: Square,
        to: Square,
        captured: Option<PieceType>,
    },
    KingCaptured {
        from: Square,
        to: Square,
        winner: Colour,
    },
    Purchased {
        square: Square,
        ability: Ability,
        remaining: u32,
    },
    TeleportArmed {
        square: Square,
    },
    Teleported {
        from: Square,
        to: Square,
        charges_left: u8,
    },
    TeleportCancelled,
    Started,
    Reset,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Selected { square, moves } => {
                write!(f, "Selected {square} ({moves} legal moves)")
            }
            Event::Moved { from, to, captured: None } => write!(f, "Moved {from} to {to}"),
            Event::Moved { from, to, captured: Some(pt) } => {
                write!(f, "Moved {from} to {to}, capturing a {pt}")
            }
            Event::KingCaptured { from, to, winner } => {
                write!(f, "Moved {from} to {to}, capturing the King. {winner} wins!")
            }
            Event::Purchased { square, ability, remaining } => write!(
                f,
                "Bought {} for the piece on {square}, {remaining} points left",
                ability.def().name
            ),
            Event::TeleportArmed { square } => write!(f, "Teleport ready from {square}"),
            Event::Teleported { from, to, charges_left } => {
                write!(f, "Teleported {from} to {to}, {charges_left} charges left")
            }
            Event::TeleportCancelled => write!(f, "Teleport cancelled"),
            Event::Started => write!(f, "Game started, White to move"),
            Event::Reset => write!(f, "Game reset"),
        }
    }
}

/******************************************\
|==========================================|
|                Rejections                |
|==========================================|
\******************************************/

/// Why a session command changed nothing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("The game is over")]
    GameOver,

    #[error("There is no piece on {0}")]
    EmptySquare(Square),

    #[error("It is {0}'s turn")]
    NotYourTurn(Colour),

    #[error("No piece is selected")]
    NoSelection,

    #[error("A teleport is pending, pick a target or cancel it")]
    TeleportPending,

    #[error("The piece on {from} cannot move to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("The piece already has {0}")]
    AlreadyOwned(Ability),

    #[error("{colour} has {available} points but {ability} costs {cost}")]
    InsufficientPoints {
        colour: Colour,
        ability: Ability,
        cost: u32,
        available: u32,
    },

    #[error("The piece does not have {0}")]
    MissingAbility(Ability),

    #[error("The piece has no teleport charges left")]
    NoCharges,

    #[error("No teleport is pending")]
    NotTeleporting,

    #[error("{to} is more than {range} squares away from {from}")]
    OutOfRange { from: Square, to: Square, range: u8 },

    #[error("{0} is occupied")]
    Occupied(Square),

    #[error("The game has already started")]
    AlreadyStarted,
}

/******************************************\
|==========================================|
|                  Status                  |
|==========================================|
\******************************************/

/// Two-part status line for display ("Now Playing" / "White to move")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub heading: &'static str,
    pub detail: String,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.heading, self.detail)
    }
}
