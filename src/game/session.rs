use log::{debug, info};

use super::{Economy, Event, Phase, Rejection, Status};
use crate::board::{Board, legal_moves};
use crate::config::RulesConfig;
use crate::core::*;

/******************************************\
|==========================================|
|                Selection                 |
|==========================================|
\******************************************/

/// The selected square and the moves its piece had when it was last computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    square: Square,
    moves: Bitboard,
}

/******************************************\
|==========================================|
|                 Session                  |
|==========================================|
\******************************************/

/// # Game session
///
/// Every piece of mutable game state lives here: the board, whose turn it is, the phase,
/// both colours' points and captures, the current selection, a pending teleport and the
/// winner.
///
/// Commands either apply completely and return the [`Event`] describing what happened, or
/// return a [`Rejection`] and leave the session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    config: RulesConfig,

    board: Board,

    turn: Colour,

    phase: Phase,

    economy: Economy,

    selection: Option<Selection>,

    teleporting: Option<Square>,

    winner: Option<Colour>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(RulesConfig::default())
    }
}

impl Session {
    /// A fresh pregame session on the standard starting position
    pub fn new(config: RulesConfig) -> Self {
        let mut board = Board::default();
        board.set_teleport_charges(config.teleport_charges);
        Session::with_board(board, config)
    }

    /// A fresh pregame session on a custom position. Pieces keep whatever charges and
    /// abilities they already carry.
    pub fn with_board(board: Board, config: RulesConfig) -> Self {
        Session {
            config,
            board,
            turn: Colour::White,
            phase: Phase::Pregame,
            economy: Economy::new(config.starting_points),
            selection: None,
            teleporting: None,
            winner: None,
        }
    }

    /******************************************\
    |==========================================|
    |                 Queries                  |
    |==========================================|
    \******************************************/

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An independent copy of the board that later commands will not touch
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn turn(&self) -> Colour {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Colour> {
        self.winner
    }

    #[inline]
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    #[inline]
    pub fn points(&self, colour: Colour) -> u32 {
        self.economy.points(colour)
    }

    #[inline]
    pub fn captured(&self, colour: Colour, pt: PieceType) -> u32 {
        self.economy.captured(colour, pt)
    }

    /// The selected square, if any
    pub fn selected(&self) -> Option<Square> {
        self.selection.map(|s| s.square)
    }

    /// The selected piece together with its square
    pub fn selected_piece(&self) -> Option<(Square, &Piece)> {
        let square = self.selected()?;
        self.board.on(square).map(|piece| (square, piece))
    }

    /// Destinations of the selected piece, empty without a selection
    pub fn legal_moves(&self) -> Bitboard {
        self.selection.map_or(Bitboard::EMPTY, |s| s.moves)
    }

    /// Source square of a pending teleport
    pub fn teleporting(&self) -> Option<Square> {
        self.teleporting
    }

    /// Squares a pending teleport may land on, empty when none is pending
    pub fn teleport_targets(&self) -> Bitboard {
        self.teleporting.map_or(Bitboard::EMPTY, |from| {
            self.board.empty_within(from, self.config.teleport_range)
        })
    }

    /// Would buying `ability` for the selected piece succeed right now
    pub fn can_purchase(&self, ability: Ability) -> bool {
        self.check_purchase(ability).is_ok()
    }

    /// Would arming a teleport for the selected piece succeed right now
    pub fn can_teleport(&self) -> bool {
        self.check_teleport().is_ok()
    }

    pub fn status(&self) -> Status {
        match (self.phase, self.winner) {
            (Phase::Finished, Some(winner)) => Status {
                heading: "Game Over",
                detail: format!("{winner} wins!"),
            },
            (Phase::Finished, None) => Status {
                heading: "Game Over",
                detail: "No winner".to_string(),
            },
            (Phase::Pregame, _) => Status {
                heading: "Setup Phase",
                detail: "Configure your armies".to_string(),
            },
            (Phase::Active, _) => Status {
                heading: "Now Playing",
                detail: format!("{} to move", self.turn),
            },
        }
    }

    /******************************************\
    |==========================================|
    |                 Commands                 |
    |==========================================|
    \******************************************/

    /// Selects the piece on `square` and computes its legal moves.
    ///
    /// Selecting a different square drops a pending teleport.
    pub fn select(&mut self, square: Square) -> Result<Event, Rejection> {
        self.try_select(square).inspect(log_event).inspect_err(log_rejection)
    }

    /// Moves the selected piece to `to`, settling any capture.
    pub fn attempt_move(&mut self, to: Square) -> Result<Event, Rejection> {
        self.try_move(to).inspect(log_event).inspect_err(log_rejection)
    }

    /// Buys `ability` for the selected piece.
    pub fn purchase_ability(&mut self, ability: Ability) -> Result<Event, Rejection> {
        self.try_purchase(ability).inspect(log_event).inspect_err(log_rejection)
    }

    /// Arms a teleport for the selected piece.
    pub fn request_teleport(&mut self) -> Result<Event, Rejection> {
        self.try_request_teleport().inspect(log_event).inspect_err(log_rejection)
    }

    /// Completes a pending teleport onto `to`.
    pub fn teleport_to(&mut self, to: Square) -> Result<Event, Rejection> {
        self.try_teleport_to(to).inspect(log_event).inspect_err(log_rejection)
    }

    pub fn cancel_teleport(&mut self) -> Result<Event, Rejection> {
        self.teleporting
            .take()
            .map(|_| Event::TeleportCancelled)
            .ok_or(Rejection::NotTeleporting)
            .inspect(log_event)
            .inspect_err(log_rejection)
    }

    /// Leaves pregame. White moves first.
    pub fn start_game(&mut self) -> Result<Event, Rejection> {
        if self.phase != Phase::Pregame {
            return Err(Rejection::AlreadyStarted).inspect_err(log_rejection);
        }

        self.phase = Phase::Active;
        self.turn = Colour::White;
        self.clear_selection();

        Ok(Event::Started).inspect(log_event)
    }

    /// Back to a fresh pregame on the standard starting position.
    pub fn reset_game(&mut self) -> Event {
        *self = Session::new(self.config);
        info!("Game reset");
        Event::Reset
    }

    /******************************************\
    |==========================================|
    |             Command Internals            |
    |==========================================|
    \******************************************/

    fn try_select(&mut self, square: Square) -> Result<Event, Rejection> {
        self.ensure_not_finished()?;

        let piece = self.board.on(square).ok_or(Rejection::EmptySquare(square))?;
        self.ensure_on_move(piece.colour())?;

        let moves = legal_moves(&self.board, square, piece);

        if self.teleporting.is_some_and(|from| from != square) {
            self.teleporting = None;
        }
        self.selection = Some(Selection { square, moves });

        Ok(Event::Selected {
            square,
            moves: moves.count_bits(),
        })
    }

    fn try_move(&mut self, to: Square) -> Result<Event, Rejection> {
        self.ensure_not_finished()?;

        let Selection { square: from, moves } = self.selection.ok_or(Rejection::NoSelection)?;

        if self.teleporting.is_some() {
            return Err(Rejection::TeleportPending);
        }

        if !moves.contains(to) {
            return Err(Rejection::IllegalMove { from, to });
        }

        let mover = self.board.colour_on(from).ok_or(Rejection::NoSelection)?;
        let captured = self.board.move_piece(from, to).map(|piece| piece.pt());

        if let Some(pt) = captured {
            self.economy.record_capture(mover, pt);
        }

        self.clear_selection();

        if captured == Some(PieceType::King) {
            self.economy.award(mover, self.config.king_capture_bonus);
            self.phase = Phase::Finished;
            self.winner = Some(mover);

            return Ok(Event::KingCaptured {
                from,
                to,
                winner: mover,
            });
        }

        self.end_turn();

        Ok(Event::Moved { from, to, captured })
    }

    fn try_purchase(&mut self, ability: Ability) -> Result<Event, Rejection> {
        let (square, colour) = self.check_purchase(ability)?;

        let cost = ability.cost();
        if !self.economy.spend(colour, cost) {
            return Err(Rejection::InsufficientPoints {
                colour,
                ability,
                cost,
                available: self.economy.points(colour),
            });
        }

        if let Some(piece) = self.board.on_mut(square) {
            piece.grant(ability);
        }
        self.refresh_selection();

        Ok(Event::Purchased {
            square,
            ability,
            remaining: self.economy.points(colour),
        })
    }

    fn try_request_teleport(&mut self) -> Result<Event, Rejection> {
        let square = self.check_teleport()?;
        self.teleporting = Some(square);

        Ok(Event::TeleportArmed { square })
    }

    fn try_teleport_to(&mut self, to: Square) -> Result<Event, Rejection> {
        self.ensure_not_finished()?;

        let from = match (self.teleporting, self.selected()) {
            (Some(from), Some(selected)) if from == selected => from,
            _ => return Err(Rejection::NotTeleporting),
        };

        let range = self.config.teleport_range;
        if Square::dist(from, to) > range {
            return Err(Rejection::OutOfRange { from, to, range });
        }

        if !self.board.is_empty(to) {
            return Err(Rejection::Occupied(to));
        }

        if !self.board.teleport_piece(from, to) {
            return Err(Rejection::NoCharges);
        }

        let charges_left = self.board.on(to).map_or(0, |piece| piece.charges().teleport);

        self.clear_selection();
        self.end_turn();

        Ok(Event::Teleported {
            from,
            to,
            charges_left,
        })
    }

    /// Shared eligibility rules of a purchase, returning the buyer's square and colour
    fn check_purchase(&self, ability: Ability) -> Result<(Square, Colour), Rejection> {
        self.ensure_not_finished()?;

        let (square, piece) = self.selected_piece().ok_or(Rejection::NoSelection)?;
        let colour = piece.colour();
        self.ensure_on_move(colour)?;

        if piece.has(ability) {
            return Err(Rejection::AlreadyOwned(ability));
        }

        let available = self.economy.points(colour);
        let cost = ability.cost();
        if available < cost {
            return Err(Rejection::InsufficientPoints {
                colour,
                ability,
                cost,
                available,
            });
        }

        Ok((square, colour))
    }

    /// Shared eligibility rules of arming a teleport, returning the source square
    fn check_teleport(&self) -> Result<Square, Rejection> {
        self.ensure_not_finished()?;

        let (square, piece) = self.selected_piece().ok_or(Rejection::NoSelection)?;
        self.ensure_on_move(piece.colour())?;

        if !piece.has(Ability::Teleport2) {
            return Err(Rejection::MissingAbility(Ability::Teleport2));
        }

        if piece.charges().teleport == 0 {
            return Err(Rejection::NoCharges);
        }

        Ok(square)
    }

    fn ensure_not_finished(&self) -> Result<(), Rejection> {
        match self.phase {
            Phase::Finished => Err(Rejection::GameOver),
            _ => Ok(()),
        }
    }

    /// Outside the active phase either colour may act
    fn ensure_on_move(&self, colour: Colour) -> Result<(), Rejection> {
        match self.phase {
            Phase::Active if colour != self.turn => Err(Rejection::NotYourTurn(self.turn)),
            _ => Ok(()),
        }
    }

    fn end_turn(&mut self) {
        if self.phase == Phase::Active {
            self.turn = !self.turn;
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.teleporting = None;
    }

    /// Recomputes the cached moves after the selected piece changed
    fn refresh_selection(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            if let Some(piece) = self.board.on(selection.square) {
                selection.moves = legal_moves(&self.board, selection.square, piece);
            }
        }
    }
}

fn log_event(event: &Event) {
    debug!("{event}");
}

fn log_rejection(rejection: &Rejection) {
    info!("Command rejected: {rejection}");
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
