use thiserror::Error;

use super::Board;
use crate::core::*;
use crate::utils::PRNG;

/******************************************\
|==========================================|
|          Useful placement strings        |
|==========================================|
\******************************************/

/// Piece placement field of the standard starting position, rank 8 first
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/******************************************\
|==========================================|
|             Parse Placement              |
|==========================================|
\******************************************/

impl Board {
    /// Builds a board from the piece placement field of a FEN string.
    ///
    /// Pieces start unmoved, with no abilities and the default teleport charge. Their ids
    /// come from a fixed-seed generator, so the same placement always yields the same ids.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let mut board = Board::new();
        let mut ids = PRNG::default();
        board.parse_piece_placement(placement.trim(), &mut ids)?;
        Ok(board)
    }

    fn parse_piece_placement(
        &mut self,
        placement: &str,
        ids: &mut PRNG,
    ) -> Result<(), PlacementError> {
        let mut rank_iter = Rank::iter().rev();

        let mut rank = rank_iter
            .next()
            .ok_or_else(|| PlacementError::InvalidRankFormat("Board has no ranks?".to_string()))?;

        let mut file: u8 = 0;

        for char in placement.chars() {
            match char {
                '/' => {
                    (rank, file) = Self::parse_separator(&mut rank_iter, rank, file)?;
                }

                skip if skip.is_ascii_digit() => {
                    file += Self::parse_skip(skip, rank, file)?;
                }

                piece_char => {
                    self.parse_piece(piece_char, rank, file, ids)?;
                    file += 1;
                }
            }
        }

        if file != 8 {
            return Err(PlacementError::InvalidRankFormat(format!(
                "Final rank {} ended prematurely at file index {} (expected 8)",
                rank, file
            )));
        }

        if rank_iter.next().is_some() {
            return Err(PlacementError::InvalidRankFormat(
                "Not enough ranks specified (expected 8)".to_string(),
            ));
        }

        Ok(())
    }

    fn parse_separator(
        rank_iter: &mut impl Iterator<Item = Rank>,
        rank: Rank,
        file: u8,
    ) -> Result<(Rank, u8), PlacementError> {
        if file != 8 {
            return Err(PlacementError::InvalidRankFormat(format!(
                "Rank {} has {} files (expected 8)",
                rank, file
            )));
        }

        let next_rank = rank_iter.next().ok_or_else(|| {
            PlacementError::InvalidRankFormat("Too many ranks specified (expected 8)".to_string())
        })?;

        Ok((next_rank, 0))
    }

    fn parse_skip(skip: char, rank: Rank, file: u8) -> Result<u8, PlacementError> {
        let count = skip as u8 - b'0';

        if !(1..=8).contains(&count) {
            return Err(PlacementError::InvalidRankFormat(format!(
                "Invalid empty square count '{}' on rank {}",
                skip, rank
            )));
        }

        if file + count > 8 {
            return Err(PlacementError::InvalidRankFormat(format!(
                "Rank {} overflows past the h file",
                rank
            )));
        }

        Ok(count)
    }

    fn parse_piece(
        &mut self,
        piece_char: char,
        rank: Rank,
        file: u8,
        ids: &mut PRNG,
    ) -> Result<(), PlacementError> {
        let (colour, pt) = parse_piece_char(piece_char)
            .map_err(|_| PlacementError::InvalidPiecePlacementChar(piece_char))?;

        let file = File::from_index(file as usize).ok_or_else(|| {
            PlacementError::InvalidRankFormat(format!("Rank {} overflows past the h file", rank))
        })?;

        let square = Square::from_parts(file, rank);
        self.add_piece(square, Piece::new(ids.next_id(), colour, pt));

        Ok(())
    }

    /// Writes the piece placement field for the current position
    pub fn placement(&self) -> String {
        let mut placement = String::new();

        for rank in Rank::iter().rev() {
            let mut empty = 0;

            for file in File::iter() {
                match self.on(Square::from_parts(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                placement.push_str(&empty.to_string());
            }

            if rank != Rank::Rank1 {
                placement.push('/');
            }
        }

        placement
    }
}

/******************************************\
|==========================================|
|             Placement Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PlacementError {
    #[error("Invalid character in piece placement: '{0}'")]
    InvalidPiecePlacementChar(char),

    #[error("Invalid rank format in piece placement: {0}")]
    InvalidRankFormat(String),
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
    fn test_start_placement_round_trip() {
        let board = Board::default();
        assert_eq!(board.placement(), START_PLACEMENT);
    }

    #[test]
    fn test_sparse_placement() {
        let board = Board::from_placement("4k3/8/8/8/8/8/4P3/4K3").unwrap();

        assert_eq!(board.pieces().count(), 3);
        assert_eq!(board.on(Square::E8).map(|p| (p.colour(), p.pt())), Some((Colour::Black, PieceType::King)));
        assert_eq!(board.on(Square::E2).map(|p| (p.colour(), p.pt())), Some((Colour::White, PieceType::Pawn)));
        assert_eq!(board.placement(), "4k3/8/8/8/8/8/4P3/4K3");
    }

    #[test]
    fn test_same_placement_same_ids() {
        let a = Board::from_placement(START_PLACEMENT).unwrap();
        let b = Board::default();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_piece_char() {
        assert_eq!(
            Board::from_placement("4x3/8/8/8/8/8/8/4K3"),
            Err(PlacementError::InvalidPiecePlacementChar('x'))
        );
    }

    #[test]
    fn test_invalid_rank_shapes() {
        // too few files on a rank
        assert!(matches!(
            Board::from_placement("4k2/8/8/8/8/8/8/4K3"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
        // too many files on a rank
        assert!(matches!(
            Board::from_placement("4k4/8/8/8/8/8/8/4K3"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
        // seven ranks
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
        // nine ranks
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
        // zero is not a valid skip
        assert!(matches!(
            Board::from_placement("08/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
        // trailing piece past the h file
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/8K"),
            Err(PlacementError::InvalidRankFormat(_))
        ));
    }

    #[test]
    fn test_empty_board_placement() {
        let board = Board::from_placement("8/8/8/8/8/8/8/8").unwrap();
        assert!(board.all_occupied_bb().is_empty());
        assert_eq!(board, Board::new());
    }
}
