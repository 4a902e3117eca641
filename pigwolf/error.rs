use std::fmt;

use pigwolf_game::GameError;

#[derive(Debug)]
pub enum PigwolfError {
    Game(GameError),

    UnknownPig(String),
}

impl From<GameError> for PigwolfError {
    fn from(err: GameError) -> PigwolfError {
        PigwolfError::Game(err)
    }
}

impl fmt::Display for PigwolfError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PigwolfError::Game(err) => write!(fmt, "{}", err),
            PigwolfError::UnknownPig(name) => write!(fmt, "no pig named '{}'", name),
        }
    }
}
