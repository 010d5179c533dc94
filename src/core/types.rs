use super::{File, Square};
use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two sides: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_enum_table!(Colour, [White, Black]);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Square index offsets for one step along a ray, a knight leap or a pawn double step.
/// North points from White's side toward Black's side.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
    NN = 16, SS = -16,
}

impl Direction {
    /// Rook rays
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// Bishop rays
    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// The eight single steps of a king
    #[rustfmt::skip]
    pub const ADJACENT: [Direction; 8] = [
        Direction::N, Direction::S, Direction::E, Direction::W,
        Direction::NE, Direction::NW, Direction::SE, Direction::SW,
    ];

    /// The eight L-shaped leaps of a knight
    #[rustfmt::skip]
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE, Direction::NNW, Direction::NEE, Direction::NWW,
        Direction::SEE, Direction::SWW, Direction::SSE, Direction::SSW,
    ];
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the forward direction for a colour
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    /// Returns the forward left direction (pawn capture) for a colour
    pub const fn forward_left(&self) -> Direction {
        match self {
            Colour::White => Direction::NW,
            Colour::Black => Direction::SE,
        }
    }

    /// Returns the forward right direction (pawn capture) for a colour
    pub const fn forward_right(&self) -> Direction {
        match self {
            Colour::White => Direction::NE,
            Colour::Black => Direction::SW,
        }
    }

    /// Returns the double forward direction (pawn double push) for a colour
    pub const fn double_forward(&self) -> Direction {
        match self {
            Colour::White => Direction::NN,
            Colour::Black => Direction::SS,
        }
    }

    /// Grid row (`y`) of the colour's pawns in the starting position
    pub const fn pawn_row(&self) -> u8 {
        match self {
            Colour::White => 6,
            Colour::Black => 1,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

impl Square {
    /// Try to add direction to a square (Returns error when the step leaves the board)
    #[inline]
    pub const fn add(self, rhs: Direction) -> Result<Self, SquareAddError> {
        let file = self.file() as u8;

        use Direction::*;
        let valid = match rhs {
            N | S | NN | SS => true,
            E | NE | NNE | SE | SSE if file < File::FileH as u8 => true,
            W | NW | NNW | SW | SSW if file > File::FileA as u8 => true,
            NEE | SEE if file < File::FileG as u8 => true,
            NWW | SWW if file > File::FileB as u8 => true,
            _ => false,
        };

        let index = self as i16 + rhs as i16;

        if valid && index >= 0 && index < Square::NUM as i16 {
            Ok(Square::ALL[index as usize])
        } else {
            Err(SquareAddError::OutOfBounds)
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (N => S, etc...)
    fn neg(self) -> Self::Output {
        use Direction::*;
        match self {
            N => S,
            S => N,
            W => E,
            E => W,
            NE => SW,
            SW => NE,
            NW => SE,
            SE => NW,
            NNE => SSW,
            SSW => NNE,
            NNW => SSE,
            SSE => NNW,
            NEE => SWW,
            SWW => NEE,
            NWW => SEE,
            SEE => NWW,
            NN => SS,
            SS => NN,
        }
    }
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}
