use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

use crate::core::{Ability, ParseAbilityError, ParseSquareError, Square};

/// One line of driver input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Square),
    Move(Square),
    Buy(Ability),
    Teleport,
    TeleportTo(Square),
    Cancel,
    Start,
    Reset,

    Print,
    Shop,
    Score,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let command = match tokens.next() {
            Some("select" | "s") => Self::Select(Self::parse_square(&mut tokens)?),
            Some("move" | "m") => Self::Move(Self::parse_square(&mut tokens)?),
            Some("buy") => Self::parse_buy(&mut tokens)?,
            Some("teleport" | "t") => Self::Teleport,
            Some("to") => Self::TeleportTo(Self::parse_square(&mut tokens)?),
            Some("cancel") => Self::Cancel,
            Some("start") => Self::Start,
            Some("reset") => Self::Reset,

            Some("board" | "b") => Self::Print,
            Some("shop") => Self::Shop,
            Some("score") => Self::Score,
            Some("help" | "?") => Self::Help,
            Some("quit" | "q") => Self::Quit,
            Some(other) => return Err(CommandError::Unknown(other.to_string())),
            None => return Err(CommandError::Empty),
        };

        match tokens.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl Command {
    pub const HELP: &'static str = "\
select <sq> | s <sq>   select the piece on a square
move <sq>   | m <sq>   move the selected piece
buy <ability>          buy an ability for the selected piece
teleport    | t        arm a teleport for the selected piece
to <sq>                teleport the selected piece
cancel                 cancel a pending teleport
start                  end the setup phase, white moves first
reset                  start over from the setup phase
board       | b        show the board
shop                   show the ability shop
score                  show points and captures
quit        | q        leave";

    fn parse_square(tokens: &mut SplitWhitespace) -> Result<Square, CommandError> {
        let token = tokens.next().ok_or(CommandError::MissingArgument("square"))?;
        Ok(token.parse()?)
    }

    fn parse_buy(tokens: &mut SplitWhitespace) -> Result<Self, CommandError> {
        let token = tokens.next().ok_or(CommandError::MissingArgument("ability"))?;
        Ok(Self::Buy(token.parse()?))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Unexpected input '{0}'")]
    TrailingInput(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(#[from] ParseSquareError),

    #[error("Invalid ability: {0}")]
    InvalidAbility(#[from] ParseAbilityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_commands() {
        assert_eq!("select e2".parse(), Ok(Command::Select(Square::E2)));
        assert_eq!("s   h8".parse(), Ok(Command::Select(Square::H8)));
        assert_eq!("move e4".parse(), Ok(Command::Move(Square::E4)));
        assert_eq!("m a1".parse(), Ok(Command::Move(Square::A1)));
        assert_eq!("to d3".parse(), Ok(Command::TeleportTo(Square::D3)));
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!("teleport".parse(), Ok(Command::Teleport));
        assert_eq!("cancel".parse(), Ok(Command::Cancel));
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("b".parse(), Ok(Command::Print));
        assert_eq!("shop".parse(), Ok(Command::Shop));
        assert_eq!("score".parse(), Ok(Command::Score));
        assert_eq!("  quit  ".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_buy() {
        assert_eq!("buy teleport2".parse(), Ok(Command::Buy(Ability::Teleport2)));
        assert_eq!("buy jumpSlide".parse(), Ok(Command::Buy(Ability::JumpSlide)));
        assert_eq!(
            "buy jumpslide".parse::<Command>(),
            Err(CommandError::InvalidAbility(ParseAbilityError::UnknownKey(
                "jumpslide".to_string()
            )))
        );
        assert_eq!("buy".parse::<Command>(), Err(CommandError::MissingArgument("ability")));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("fly e2".parse::<Command>(), Err(CommandError::Unknown("fly".to_string())));
        assert_eq!("select".parse::<Command>(), Err(CommandError::MissingArgument("square")));
        assert!(matches!("select z9".parse::<Command>(), Err(CommandError::InvalidSquare(_))));
        assert!(matches!("move e44".parse::<Command>(), Err(CommandError::InvalidSquare(_))));
        assert_eq!(
            "start now".parse::<Command>(),
            Err(CommandError::TrailingInput("now".to_string()))
        );
    }
}
