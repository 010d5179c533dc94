pub mod fen;
pub mod movegen;
pub mod movement;

pub use fen::{PlacementError, START_PLACEMENT};
pub use movegen::legal_moves;

use crate::core::*;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// The 8x8 grid. Every cell is either empty or owns exactly one [`Piece`], and the
/// per-colour occupancy sets are kept in step with the cells by the helpers in
/// `movement.rs`.
///
/// Pieces are plain values, so `clone()` yields a board that shares nothing with the
/// original. Snapshots handed out by the game session rely on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::NUM],

    occupied: [Bitboard; Colour::NUM],
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    /// The standard starting position
    fn default() -> Board {
        match Board::from_placement(START_PLACEMENT) {
            Ok(board) => board,
            Err(e) => unreachable!("start placement is well formed: {e}"),
        }
    }
}

impl Board {
    /// An empty board
    pub fn new() -> Board {
        Board {
            board: [None; Square::NUM],
            occupied: [Bitboard::EMPTY; Colour::NUM],
        }
    }

    #[inline]
    pub fn on(&self, square: Square) -> Option<&Piece> {
        self.board[square.index()].as_ref()
    }

    #[inline]
    pub(crate) fn on_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.board[square.index()].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square.index()].is_none()
    }

    #[inline]
    pub fn colour_on(&self, square: Square) -> Option<Colour> {
        self.on(square).map(Piece::colour)
    }

    #[inline]
    pub fn occupied_bb(&self, colour: Colour) -> Bitboard {
        self.occupied[colour.index()]
    }

    #[inline]
    pub fn all_occupied_bb(&self) -> Bitboard {
        self.occupied_bb(Colour::White) | self.occupied_bb(Colour::Black)
    }

    /// All occupied squares with their pieces, from A1 upward
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::iter().filter_map(|square| self.on(square).map(|piece| (square, piece)))
    }

    /// Empty squares other than `from` within king-step distance `range` of it
    pub fn empty_within(&self, from: Square, range: u8) -> Bitboard {
        Square::iter()
            .filter(|&square| square != from && Square::dist(from, square) <= range)
            .filter(|&square| self.is_empty(square))
            .collect()
    }

    /// Resets the teleport charges of every piece on the board
    pub(crate) fn set_teleport_charges(&mut self, charges: u8) {
        for piece in self.board.iter_mut().flatten() {
            piece.set_teleport_charges(charges);
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.on(square) {
                    Some(piece) => piece.glyph(),
                    None => ' ',
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;

        let upgraded: Vec<String> = self
            .pieces()
            .filter(|(_, piece)| !piece.abilities().is_empty())
            .map(|(square, piece)| {
                format!(
                    "{square} {} [{}] tp:{}",
                    piece.label(),
                    piece.abilities(),
                    piece.charges().teleport
                )
            })
            .collect();

        if !upgraded.is_empty() {
            writeln!(f)?;
            for line in upgraded {
                writeln!(f, "{line}")?;
            }
        }

        Ok(())
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
    fn test_start_position_layout() {
        let board = Board::default();

        let back_row = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for x in 0..8u8 {
            let black_back = board.on(Square::from_xy(x, 0).unwrap()).unwrap();
            let black_pawn = board.on(Square::from_xy(x, 1).unwrap()).unwrap();
            let white_pawn = board.on(Square::from_xy(x, 6).unwrap()).unwrap();
            let white_back = board.on(Square::from_xy(x, 7).unwrap()).unwrap();

            assert_eq!((black_back.colour(), black_back.pt()), (Colour::Black, back_row[x as usize]));
            assert_eq!((black_pawn.colour(), black_pawn.pt()), (Colour::Black, PieceType::Pawn));
            assert_eq!((white_pawn.colour(), white_pawn.pt()), (Colour::White, PieceType::Pawn));
            assert_eq!((white_back.colour(), white_back.pt()), (Colour::White, back_row[x as usize]));

            for y in 2..6u8 {
                assert!(board.is_empty(Square::from_xy(x, y).unwrap()));
            }
        }

        assert_eq!(board.on(Square::D1).map(Piece::pt), Some(PieceType::Queen));
        assert_eq!(board.on(Square::E8).map(Piece::pt), Some(PieceType::King));
        assert_eq!(board.occupied_bb(Colour::White).count_bits(), 16);
        assert_eq!(board.occupied_bb(Colour::Black).count_bits(), 16);
    }

    #[test]
    fn test_start_pieces_are_fresh() {
        let board = Board::default();
        for (_, piece) in board.pieces() {
            assert!(!piece.has_moved());
            assert!(piece.abilities().is_empty());
            assert_eq!(piece.charges().teleport, 1);
        }
    }

    #[test]
    fn test_piece_ids_are_unique() {
        let board = Board::default();
        let ids: std::collections::HashSet<PieceId> = board.pieces().map(|(_, p)| p.id()).collect();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = Board::default();
        let mut copy = original.clone();

        copy.on_mut(Square::E2).unwrap().grant(Ability::AddKnight);
        copy.move_piece(Square::E2, Square::E4);

        assert!(original.on(Square::E2).unwrap().abilities().is_empty());
        assert!(original.is_empty(Square::E4));
        assert!(copy.on(Square::E4).unwrap().has(Ability::AddKnight));
    }

    #[test]
    fn test_empty_within() {
        let board = Board::from_placement("4k3/8/8/8/3P4/8/8/4K3").unwrap();
        let targets = board.empty_within(Square::E4, 2);

        // 5x5 block around e4 minus e4 itself and the pawn on d4
        assert_eq!(targets.count_bits(), 23);
        assert!(!targets.contains(Square::E4));
        assert!(!targets.contains(Square::D4));
        assert!(targets.contains(Square::G6));
        assert!(!targets.contains(Square::H4));
    }

    #[test]
    fn test_display_shows_glyphs() {
        let rendered = Board::default().to_string();
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♚'));
        assert!(rendered.contains("A   B   C   D   E   F   G   H"));
    }
}
