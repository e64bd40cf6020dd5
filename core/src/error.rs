use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card index")]
    InvalidCardIndex,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Front face appears more than once on the board")]
    DuplicateFace,
    #[error("Letter appears more than once on the board")]
    DuplicateLetter,
    #[error("Unrecognized card face")]
    InvalidFace,
    #[error("Operands must differ and the result must be an exact integer")]
    InvalidProblem,
    #[error("Problem set is empty")]
    EmptyProblemSet,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
