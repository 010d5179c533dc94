//! # Module: `movegen`
//!
//! Computes the destination squares a single piece may move to, given the board it
//! stands on. A piece's movement is the union of its type's base rules and whatever
//! movement abilities it has bought:
//!
//! - `addKnight` adds the knight leaps
//! - `addDiag` / `addOrtho` add bishop / rook rays
//! - `jumpSlide` lets every ray of the piece run on past enemy pieces
//! - `pawnBoost` gives a pawn the mirrored backward step and backward captures
//!
//! Teleporting is a separate action handled by the game session and never shows up here.
//! There is no check detection: kings are ordinary capturable pieces.

use super::Board;
use crate::core::*;

/// Returns every square `piece`, standing on `from`, may legally move to.
///
/// Pure: reads the board, never edits it. `piece` is usually `board.on(from)` but does
/// not have to be, which lets callers ask "what if this piece had that ability".
/// The origin square is never part of the result.
pub fn legal_moves(board: &Board, from: Square, piece: &Piece) -> Bitboard {
    let us = piece.colour();
    let jump = piece.has(Ability::JumpSlide);

    let mut moves = match piece.pt() {
        PieceType::Pawn => pawn_moves(board, from, us, piece.has(Ability::PawnBoost)),
        PieceType::Knight => leaper_moves(board, from, us, &Direction::KNIGHT),
        PieceType::Bishop => slider_moves(board, from, us, &Direction::DIAGONAL, jump),
        PieceType::Rook => slider_moves(board, from, us, &Direction::ORTHOGONAL, jump),
        PieceType::Queen => {
            slider_moves(board, from, us, &Direction::DIAGONAL, jump)
                | slider_moves(board, from, us, &Direction::ORTHOGONAL, jump)
        }
        PieceType::King => leaper_moves(board, from, us, &Direction::ADJACENT),
    };

    if piece.has(Ability::AddKnight) {
        moves |= leaper_moves(board, from, us, &Direction::KNIGHT);
    }

    if piece.has(Ability::AddDiag) {
        moves |= slider_moves(board, from, us, &Direction::DIAGONAL, jump);
    }

    if piece.has(Ability::AddOrtho) {
        moves |= slider_moves(board, from, us, &Direction::ORTHOGONAL, jump);
    }

    moves.clear(from);
    moves
}

/// Single steps (knight leaps, king steps) onto empty or enemy squares
fn leaper_moves(board: &Board, from: Square, us: Colour, dirs: &[Direction]) -> Bitboard {
    let targets: Bitboard = dirs.iter().filter_map(|&dir| from.add(dir).ok()).collect();

    targets & !board.occupied_bb(us)
}

/// Ray scans along `dirs`.
///
/// A ray always stops at the board edge and before a friendly piece. An enemy piece is a
/// legal capture and ends the ray, unless `jump` is set, in which case the scan carries on
/// behind it.
fn slider_moves(board: &Board, from: Square, us: Colour, dirs: &[Direction], jump: bool) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for &dir in dirs {
        let mut current = from;

        while let Ok(next) = current.add(dir) {
            match board.colour_on(next) {
                None => moves.set(next),
                Some(colour) if colour == us => break,
                Some(_) => {
                    moves.set(next);
                    if !jump {
                        break;
                    }
                }
            }
            current = next;
        }
    }

    moves
}

/// Pawn pushes and captures, plus the backward mirror of both when boosted
fn pawn_moves(board: &Board, from: Square, us: Colour, boosted: bool) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let them = board.occupied_bb(!us);

    if let Ok(one) = from.add(us.forward()) {
        if board.is_empty(one) {
            moves.set(one);

            if from.y() == us.pawn_row() {
                if let Ok(two) = from.add(us.double_forward()) {
                    if board.is_empty(two) {
                        moves.set(two);
                    }
                }
            }
        }
    }

    let captures = [us.forward_left(), us.forward_right()];
    moves |= pawn_captures(from, &captures) & them;

    if boosted {
        if let Ok(back) = from.add(-us.forward()) {
            if board.is_empty(back) {
                moves.set(back);
            }
        }

        let back_captures = [-us.forward_left(), -us.forward_right()];
        moves |= pawn_captures(from, &back_captures) & them;
    }

    moves
}

#[inline]
fn pawn_captures(from: Square, dirs: &[Direction]) -> Bitboard {
    dirs.iter().filter_map(|&dir| from.add(dir).ok()).collect()
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn moves_of(board: &Board, from: Square) -> Bitboard {
        legal_moves(board, from, board.on(from).unwrap())
    }

    fn with(board: &Board, from: Square, ability: Ability) -> Bitboard {
        let piece = board.on(from).unwrap().with_ability(ability);
        legal_moves(board, from, &piece)
    }

    #[test]
    fn test_start_position_pawn_and_knight() {
        let board = Board::default();

        assert_eq!(moves_of(&board, Square::E2), Bitboard::from([Square::E3, Square::E4]));
        assert_eq!(moves_of(&board, Square::D7), Bitboard::from([Square::D6, Square::D5]));
        assert_eq!(moves_of(&board, Square::G1), Bitboard::from([Square::F3, Square::H3]));
        assert_eq!(moves_of(&board, Square::B8), Bitboard::from([Square::A6, Square::C6]));
    }

    #[test]
    fn test_start_position_back_row_is_boxed_in() {
        let board = Board::default();

        for square in [Square::A1, Square::C1, Square::D1, Square::E1, Square::H8] {
            assert!(moves_of(&board, square).is_empty(), "{square} should have no moves");
        }
    }

    #[test]
    fn test_pawn_double_step_needs_start_row_and_clear_path() {
        // blocked directly in front
        let blocked = board("4k3/8/8/8/8/4n3/4P3/4K3");
        assert!(moves_of(&blocked, Square::E2).is_empty());

        // second square blocked
        let half = board("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(moves_of(&half, Square::E2), Bitboard::from([Square::E3]));

        // not on its start row
        let advanced = board("4k3/8/8/8/8/4P3/8/4K3");
        assert_eq!(moves_of(&advanced, Square::E3), Bitboard::from([Square::E4]));
    }

    #[test]
    fn test_pawn_captures_only_forward_diagonals() {
        // white pawn e4 with enemies on d5, f5, d3 and a friend on f3
        let board = board("4k3/8/8/3p1p2/4P3/3p1N2/8/4K3");

        assert_eq!(
            moves_of(&board, Square::E4),
            Bitboard::from([Square::E5, Square::D5, Square::F5])
        );
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let board = board("4k3/3p4/4P3/8/8/8/8/4K3");

        assert_eq!(
            moves_of(&board, Square::D7),
            Bitboard::from([Square::D6, Square::D5, Square::E6])
        );
    }

    #[test]
    fn test_knight_in_the_corner_and_centre() {
        let board = board("4k3/8/8/8/3N4/8/8/N3K3");

        assert_eq!(moves_of(&board, Square::A1), Bitboard::from([Square::B3, Square::C2]));
        assert_eq!(moves_of(&board, Square::D4).count_bits(), 8);
    }

    #[test]
    fn test_bishop_stops_at_first_blocker() {
        // bishop c1, friendly pawn e3, enemy pawn a3
        let board = board("4k3/8/8/8/8/p3P3/8/2B1K3");

        assert_eq!(
            moves_of(&board, Square::C1),
            Bitboard::from([Square::D2, Square::B2, Square::A3])
        );
    }

    #[test]
    fn test_rook_rays() {
        // rook d4, enemy on d7, friend on f4
        let board = board("4k3/3p4/8/8/3R1P2/8/8/4K3");

        assert_eq!(
            moves_of(&board, Square::D4),
            Bitboard::from([
                Square::D5, Square::D6, Square::D7,
                Square::D3, Square::D2, Square::D1,
                Square::E4,
                Square::C4, Square::B4, Square::A4,
            ])
        );
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = board("4k3/8/8/8/3Q4/8/8/4K3");
        let id = board.on(Square::D4).unwrap().id();
        let rook = Piece::new(id, Colour::White, PieceType::Rook);
        let bishop = Piece::new(id, Colour::White, PieceType::Bishop);

        assert_eq!(
            moves_of(&board, Square::D4),
            legal_moves(&board, Square::D4, &rook) | legal_moves(&board, Square::D4, &bishop)
        );
        assert_eq!(moves_of(&board, Square::D4).count_bits(), 27);
    }

    #[test]
    fn test_king_steps() {
        // king e1 next to a friendly pawn on d2 and an enemy pawn on f2
        let board = board("4k3/8/8/8/8/8/3P1p2/4K3");

        assert_eq!(
            moves_of(&board, Square::E1),
            Bitboard::from([Square::D1, Square::F1, Square::E2, Square::F2])
        );
    }

    #[test]
    fn test_add_knight_on_pawn_only_adds() {
        let board = board("4k3/8/8/8/8/8/4P3/4K3");
        let base = moves_of(&board, Square::E2);
        let boosted = with(&board, Square::E2, Ability::AddKnight);

        // e2 knight leaps: c1, c3, d4, f4, g3, g1 (e2 has nothing on c1/g1 so all legal)
        let leaps = Bitboard::from([Square::C1, Square::C3, Square::D4, Square::F4, Square::G3, Square::G1]);

        assert_eq!(boosted, base | leaps);
        assert_eq!(boosted & base, base);
    }

    #[test]
    fn test_add_knight_respects_occupancy() {
        // friendly knight on g1 blocks that leap, enemy on c3 is capturable
        let board = board("4k3/8/8/8/8/2n5/4P3/4K1N1");
        let moves = with(&board, Square::E2, Ability::AddKnight);

        assert!(moves.contains(Square::C3));
        assert!(!moves.contains(Square::G1));
    }

    #[test]
    fn test_add_diag_and_add_ortho() {
        let board = board("4k3/8/8/8/3N4/8/8/4K3");

        let diag = with(&board, Square::D4, Ability::AddDiag);
        assert!(diag.contains(Square::A7));
        assert!(diag.contains(Square::H8));
        assert!(diag.contains(Square::E5));

        let ortho = with(&board, Square::D4, Ability::AddOrtho);
        assert!(ortho.contains(Square::D8));
        assert!(ortho.contains(Square::A4));
        assert!(ortho.contains(Square::F5));
    }

    #[test]
    fn test_jump_slide_rook() {
        // rook a4; on the file: friend on a6, enemy on a2; on the rank: enemy on c4
        let board = board("4k3/8/P7/8/R1p5/8/p7/4K3");
        let moves = with(&board, Square::A4, Ability::JumpSlide);

        // friendly blocker and everything beyond it stay excluded
        assert!(moves.contains(Square::A5));
        assert!(!moves.contains(Square::A6));
        assert!(!moves.contains(Square::A7));
        assert!(!moves.contains(Square::A8));

        // enemy blockers are capturable and the ray keeps going
        assert!(moves.contains(Square::A3));
        assert!(moves.contains(Square::A2));
        assert!(moves.contains(Square::A1));
        assert!(moves.contains(Square::C4));
        assert!(moves.contains(Square::D4));
        assert!(moves.contains(Square::H4));

        let plain = moves_of(&board, Square::A4);
        assert!(!plain.contains(Square::A1));
        assert!(!plain.contains(Square::D4));
        assert!(plain.contains(Square::C4));
    }

    #[test]
    fn test_jump_slide_applies_to_granted_rays() {
        // knight with addDiag and jumpSlide on d4, enemy on e5
        let board = board("4k3/8/8/4p3/3N4/8/8/4K3");
        let piece = board
            .on(Square::D4)
            .unwrap()
            .with_ability(Ability::AddDiag)
            .with_ability(Ability::JumpSlide);

        let moves = legal_moves(&board, Square::D4, &piece);
        assert!(moves.contains(Square::E5));
        assert!(moves.contains(Square::F6));
        assert!(moves.contains(Square::G7));
    }

    #[test]
    fn test_jump_slide_without_rays_changes_nothing() {
        let board = Board::default();
        assert_eq!(with(&board, Square::B1, Ability::JumpSlide), moves_of(&board, Square::B1));
    }

    #[test]
    fn test_pawn_boost() {
        // white pawn e4, empty e3 behind, enemy on d3, friend on f3
        let board = board("4k3/8/8/8/4P3/3p1N2/8/4K3");
        let moves = with(&board, Square::E4, Ability::PawnBoost);

        assert_eq!(moves, Bitboard::from([Square::E5, Square::E3, Square::D3]));
    }

    #[test]
    fn test_pawn_boost_only_affects_pawns() {
        let board = board("4k3/8/8/8/3N4/8/8/4K3");
        assert_eq!(with(&board, Square::D4, Ability::PawnBoost), moves_of(&board, Square::D4));
    }

    #[test]
    fn test_origin_never_included() {
        let board = board("4k3/8/8/8/3Q4/8/8/4K3");
        let piece = Ability::iter().fold(*board.on(Square::D4).unwrap(), |p, a| p.with_ability(a));

        assert!(!legal_moves(&board, Square::D4, &piece).contains(Square::D4));
    }
}
