use std::io::{self, BufRead, Write};

use log::warn;

use super::{Command, CommandError};
use crate::core::{Ability, Bitboard, Colour};
use crate::game::{Event, Rejection, Session};

/******************************************\
|==========================================|
|                Interface                 |
|==========================================|
\******************************************/

/// # Terminal interface
///
/// Reads one command per line from `input`, forwards it to the session and prints the
/// refreshed state to `output`. Holds no rules of its own.
pub struct Interface<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interface<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or the end of the input
    pub fn run(&mut self) -> io::Result<()> {
        self.print_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.handle_command(command)?,
                Err(CommandError::Empty) => {}
                Err(e) => {
                    warn!("{e}");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> io::Result<()> {
        let outcome = match command {
            Command::Select(square) => self.session.select(square),
            Command::Move(square) => self.session.attempt_move(square),
            Command::Buy(ability) => self.session.purchase_ability(ability),
            Command::Teleport => self.session.request_teleport(),
            Command::TeleportTo(square) => self.session.teleport_to(square),
            Command::Cancel => self.session.cancel_teleport(),
            Command::Start => self.session.start_game(),
            Command::Reset => Ok(self.session.reset_game()),

            Command::Print => return self.print_board(),
            Command::Shop => return self.print_shop(),
            Command::Score => return self.print_score(),
            Command::Help => return writeln!(self.output, "{}", Command::HELP),
            Command::Quit => return Ok(()),
        };

        self.report(outcome)
    }

    /// A rejected command leaves the session untouched, so only the state is shown again
    fn report(&mut self, outcome: Result<Event, Rejection>) -> io::Result<()> {
        if let Ok(event) = outcome {
            writeln!(self.output, "{event}")?;
        }

        self.print_board()
    }

    /******************************************\
    |==========================================|
    |                 Printing                 |
    |==========================================|
    \******************************************/

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.session.board())?;
        writeln!(self.output, "{}", self.session.status())?;

        if let Some((square, piece)) = self.session.selected_piece() {
            writeln!(
                self.output,
                "Selected: {} on {square} [{}]",
                piece.label(),
                piece.abilities()
            )?;

            match self.session.teleporting() {
                Some(_) => {
                    let targets = self.session.teleport_targets();
                    writeln!(self.output, "Teleport to: {}", squares(targets))?;
                }
                None => {
                    writeln!(self.output, "Moves: {}", squares(self.session.legal_moves()))?;
                }
            }
        }

        Ok(())
    }

    fn print_shop(&mut self) -> io::Result<()> {
        let Some((square, piece)) = self.session.selected_piece() else {
            return writeln!(self.output, "Select a piece to shop for it");
        };

        let colour = piece.colour();
        writeln!(
            self.output,
            "Shop for the {} on {square} ({} points)",
            piece.label(),
            self.session.points(colour)
        )?;

        for ability in Ability::iter() {
            let def = ability.def();
            let state = if piece.has(ability) {
                "owned"
            } else if self.session.can_purchase(ability) {
                "buy"
            } else {
                "-"
            };

            writeln!(
                self.output,
                "  [{}] {:<12} {:<22} {:>2} pts  {:<5}  {}",
                def.badge,
                ability.key(),
                def.name,
                def.cost,
                state,
                def.description
            )?;
        }

        if piece.has(Ability::Teleport2) {
            writeln!(self.output, "Teleport charges: {}", piece.charges().teleport)?;
        }

        Ok(())
    }

    fn print_score(&mut self) -> io::Result<()> {
        for colour in Colour::iter() {
            let captures = self
                .session
                .economy()
                .captures(colour)
                .map(|(pt, count)| format!("{count} {pt}"))
                .collect::<Vec<_>>();

            let captures = match captures.is_empty() {
                true => "nothing".to_string(),
                false => captures.join(", "),
            };

            writeln!(
                self.output,
                "{colour}: {} points, captured {captures}",
                self.session.points(colour)
            )?;
        }

        Ok(())
    }
}

fn squares(bb: Bitboard) -> String {
    match bb.is_empty() {
        true => "none".to_string(),
        false => bb.iter().map(|sq| sq.to_string()).collect::<Vec<_>>().join(" "),
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
