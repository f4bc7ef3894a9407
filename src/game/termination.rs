use crate::utils::Color;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FivefoldRepetition,
    SeventyFiveMoveRule
}

impl Termination {
    pub fn is_decisive(&self) -> bool {
        self == &Termination::Checkmate
    }

    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }
}

/// The result of a finished game.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(*winner),
            Outcome::Draw => None
        }
    }

    /// Value of the outcome for `for_color`: 1 for a win, -1 for a loss, 0 for a draw.
    pub fn value_for(&self, for_color: Color) -> f64 {
        match self.winner() {
            Some(winner) if winner == for_color => 1.,
            Some(_) => -1.,
            None => 0.
        }
    }
}
