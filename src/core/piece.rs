use thiserror::Error;

use crate::core::{Ability, AbilitySet, Colour};

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_enum_table!(PieceType, [Pawn, Knight, Bishop, Rook, Queen, King]);

impl PieceType {
    /// Points awarded for capturing a piece of this type
    pub const fn value(&self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    /// Full English name ("Pawn", "Knight", ...)
    pub const fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }
}

/******************************************\
|==========================================|
|                 Charges                  |
|==========================================|
\******************************************/

/// Consumable uses of special actions left on a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charges {
    pub teleport: u8,
}

impl Default for Charges {
    fn default() -> Self {
        Charges { teleport: 1 }
    }
}

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// Opaque identity token, stable for the lifetime of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u64);

/// # Piece representation
///
/// - A piece on the board together with everything bought for it
/// - Type and colour are fixed at creation, the ability set only grows

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    pt: PieceType,
    colour: Colour,
    has_moved: bool,
    abilities: AbilitySet,
    charges: Charges,
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    pub fn new(id: PieceId, colour: Colour, pt: PieceType) -> Self {
        Piece {
            id,
            pt,
            colour,
            has_moved: false,
            abilities: AbilitySet::NONE,
            charges: Charges::default(),
        }
    }

    /// Builder used for test positions and custom setups
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.insert(ability);
        self
    }

    /// Builder used for test positions and custom setups
    pub fn with_charges(mut self, charges: Charges) -> Self {
        self.charges = charges;
        self
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the piece type of the piece
    #[inline]
    pub const fn pt(&self) -> PieceType {
        self.pt
    }

    /// Returns the colour of the piece
    #[inline]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub const fn abilities(&self) -> AbilitySet {
        self.abilities
    }

    #[inline]
    pub const fn has(&self, ability: Ability) -> bool {
        self.abilities.has(ability)
    }

    #[inline]
    pub const fn charges(&self) -> Charges {
        self.charges
    }

    /// Grants an ability, returning false if the piece already held it
    pub(crate) fn grant(&mut self, ability: Ability) -> bool {
        self.abilities.insert(ability)
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub(crate) fn set_teleport_charges(&mut self, charges: u8) {
        self.charges.teleport = charges;
    }

    /// Spends one teleport charge, returning false if none were left
    pub(crate) fn spend_teleport_charge(&mut self) -> bool {
        match self.charges.teleport.checked_sub(1) {
            Some(left) => {
                self.charges.teleport = left;
                true
            }
            None => false,
        }
    }

    /// Unicode chess glyph, hollow for White and filled for Black
    pub const fn glyph(&self) -> char {
        const GLYPHS: [[char; PieceType::NUM]; Colour::NUM] = [
            ['♙', '♘', '♗', '♖', '♕', '♔'],
            ['♟', '♞', '♝', '♜', '♛', '♚'],
        ];
        GLYPHS[self.colour as usize][self.pt as usize]
    }

    /// ASCII letter, upper case for White ('P', 'n', ...)
    pub fn symbol(&self) -> char {
        piece_char(self.colour, self.pt)
    }

    /// Human readable label ("White Pawn")
    pub fn label(&self) -> String {
        format!("{} {}", self.colour, self.pt.name())
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// String to convert from colour and piece type pairs to their letters
const PIECE_STR: &str = "PpNnBbRrQqKk";

fn piece_char(colour: Colour, pt: PieceType) -> char {
    PIECE_STR.as_bytes()[(pt as usize) << 1 | colour as usize] as char
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

/// Parse a placement letter into its colour and piece type ('P' => White Pawn, 'k' => Black King)
pub fn parse_piece_char(piece_char: char) -> Result<(Colour, PieceType), ParsePieceError> {
    let index = PIECE_STR
        .chars()
        .position(|c| c == piece_char)
        .ok_or(ParsePieceError::InvalidChar(piece_char))?;

    match (Colour::from_index(index & 1), PieceType::from_index(index >> 1)) {
        (Some(colour), Some(pt)) => Ok((colour, pt)),
        _ => Err(ParsePieceError::InvalidChar(piece_char)),
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid character for piece: '{0}', expected one of 'PNBRQK' or 'pnbrqk'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
