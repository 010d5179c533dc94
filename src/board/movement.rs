use super::Board;
use crate::core::*;

/******************************************\
|==========================================|
|             Piece Placement              |
|==========================================|
\******************************************/

/// Raw board edits. None of these consult movement rules: callers decide legality and
/// these only keep the cells and occupancy sets consistent.
impl Board {
    /// Places `piece` on `square`, returning whatever piece it displaced.
    pub fn add_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let displaced = self.remove_piece(square);

        self.board[square.index()] = Some(piece);
        self.occupied[piece.colour().index()].set(square);

        displaced
    }

    /// Lifts the piece off `square`, if any.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board[square.index()].take()?;
        self.occupied[piece.colour().index()].clear(square);
        Some(piece)
    }

    /// Moves the piece on `from` to `to`, returning the piece previously on `to`.
    ///
    /// The mover is marked as moved. Nothing happens when `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.remove_piece(from)?;
        piece.mark_moved();
        self.add_piece(to, piece)
    }

    /// Relocates the piece on `from` to the empty square `to` by spending a teleport
    /// charge. Returns false and leaves the board alone if `from` is empty, `to` is
    /// occupied or the piece has no charge left.
    pub(crate) fn teleport_piece(&mut self, from: Square, to: Square) -> bool {
        if from == to || !self.is_empty(to) {
            return false;
        }

        let Some(mut piece) = self.remove_piece(from) else {
            return false;
        };

        if !piece.spend_teleport_charge() {
            self.add_piece(from, piece);
            return false;
        }

        self.add_piece(to, piece);
        true
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
