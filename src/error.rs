use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    InvalidMoveClassification(String),
    ActionIndexOutOfRange(usize),
    MalformedActionMask(Vec<i64>),
    ActionOffBoard(usize),
    HistoryUnderflow,
    MalformedMoveNotation(String),
    IllegalMove(String),
    InvalidFen(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::InvalidMoveClassification(mv) => write!(f, "Move matches no action plane: {}", mv),
            CodecError::ActionIndexOutOfRange(index) => write!(f, "Action index out of range: {}", index),
            CodecError::MalformedActionMask(shape) => write!(f, "Malformed action mask with shape {:?}", shape),
            CodecError::ActionOffBoard(index) => write!(f, "Action index leaves the board: {}", index),
            CodecError::HistoryUnderflow => write!(f, "No move to undo"),
            CodecError::MalformedMoveNotation(notation) => write!(f, "Malformed move notation: {}", notation),
            CodecError::IllegalMove(mv) => write!(f, "Illegal move: {}", mv),
            CodecError::InvalidFen(fen) => write!(f, "Invalid FEN: {}", fen),
        }
    }
}

impl Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
