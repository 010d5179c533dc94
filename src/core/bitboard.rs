use std::fmt;

use super::{File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A set of squares packed into 64 bits, from A1 (LSB) to H8 (MSB).
///
/// Used as the result type of move generation, so membership tests and unions are
/// single instructions and iteration order carries no meaning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bitboard(pub u64);

crate::impl_bit_ops!(Bitboard);

impl std::ops::Not for Bitboard {
    type Output = Self;

    /// Complement: every square not in the set
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!0);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(1u64 << (*self as u8))
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        squares.into_iter().collect()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for square in iter {
            bb.set(square);
        }
        bb
    }
}

/******************************************\
|==========================================|
|        Bitboard Implementation           |
|==========================================|
\******************************************/

impl Bitboard {
    /// Finds the least significant bit set and returns its `Square`, `None` if empty.
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Square::from_index(bits.trailing_zeros() as usize),
        }
    }

    /// Removes the least significant bit, returning its `Square`. `None` if empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        if lsb.is_some() {
            self.0 &= self.0 - 1;
        }
        lsb
    }

    /// Counts the number of set bits in the bitboard.
    #[inline]
    pub const fn count_bits(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the bit corresponding to the given `Square` is set.
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bb().0 != 0
    }

    /// Sets the bit corresponding to the given `Square`.
    #[inline]
    pub const fn set(&mut self, square: Square) {
        self.0 |= square.bb().0;
    }

    /// Clears the bit corresponding to the given `Square`.
    #[inline]
    pub const fn clear(&mut self, square: Square) {
        self.0 &= !square.bb().0;
    }

    /// Iterates over the set squares from A1 upward.
    pub fn iter(&self) -> BitboardIter {
        BitboardIter(*self)
    }
}

pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    /// Draws the set as an 8x8 grid, rank 8 on top, 'X' for members
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = if self.contains(square) { 'X' } else { '.' };
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_and_pop() {
        let mut bb = Bitboard::from([Square::H8, Square::A1, Square::E4]);
        assert_eq!(bb.count_bits(), 3);
        assert_eq!(bb.lsb(), Some(Square::A1));
        assert_eq!(bb.pop_lsb(), Some(Square::A1));
        assert_eq!(bb.pop_lsb(), Some(Square::E4));
        assert_eq!(bb.pop_lsb(), Some(Square::H8));
        assert_eq!(bb.pop_lsb(), None);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_set_clear_contains() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::D5);
        assert!(bb.contains(Square::D5));
        assert!(!bb.contains(Square::D4));
        bb.set(Square::D5);
        assert_eq!(bb.count_bits(), 1);
        bb.clear(Square::D5);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_set_operations() {
        let a = Bitboard::from([Square::A1, Square::B2]);
        let b = Bitboard::from([Square::B2, Square::C3]);
        assert_eq!(a | b, Bitboard::from([Square::A1, Square::B2, Square::C3]));
        assert_eq!(a & b, Bitboard::from([Square::B2]));
        assert_eq!(a ^ b, Bitboard::from([Square::A1, Square::C3]));
        assert_eq!(Bitboard::FULL.count_bits(), 64);
        assert_eq!((!a).count_bits(), 62);
        assert_eq!(!Bitboard::FULL, Bitboard::EMPTY);
    }

    #[test]
    fn test_iteration_visits_every_member() {
        let bb: Bitboard = Square::iter().filter(|sq| sq.x() == sq.y()).collect();
        assert_eq!(bb.count_bits(), 8);
        assert!(bb.iter().all(|sq| sq.x() == sq.y()));
        assert_eq!(bb.into_iter().count(), 8);
    }
}
