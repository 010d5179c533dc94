// Core module exports

#[macro_use]
mod macros;

pub mod ability;
pub mod bitboard;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use ability::{Ability, AbilityDef, AbilitySet, ParseAbilityError};
pub use bitboard::Bitboard;
pub use piece::{Charges, ParsePieceError, Piece, PieceId, PieceType, parse_piece_char};
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{Colour, Direction, SquareAddError};
