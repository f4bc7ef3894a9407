use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::{CodecError, Result};
use crate::utils::{PieceType, Square};

/// A move as seen by the codecs: source, destination and an optional promotion piece.
///
/// Castling is written as the king's move, en passant as the pawn's diagonal step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    pub const fn new(src: Square, dst: Square, promotion: Option<PieceType>) -> Move {
        Move { src, dst, promotion }
    }

    pub const fn new_non_promotion(src: Square, dst: Square) -> Move {
        Move::new(src, dst, None)
    }

    pub const fn get_source(&self) -> Square {
        self.src
    }

    pub const fn get_destination(&self) -> Square {
        self.dst
    }

    pub const fn get_promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    pub const fn with_promotion(&self, promotion: Option<PieceType>) -> Move {
        Move::new(self.src, self.dst, promotion)
    }

    /// Returns the UCI (Universal Chess Interface) representation of the move.
    pub fn uci(&self) -> String {
        let promotion_str = match self.promotion {
            Some(promotion) => promotion.to_char().to_string(),
            None => "".to_string()
        };
        format!("{}{}{}", self.src.readable(), self.dst.readable(), promotion_str)
    }

    /// Parses four or five character UCI notation such as `e2e4` or `e7e8n`.
    pub fn from_uci(uci: &str) -> Result<Move> {
        let malformed = || CodecError::MalformedMoveNotation(uci.to_string());

        if !uci.is_ascii() || (uci.len() != 4 && uci.len() != 5) {
            return Err(malformed());
        }
        let src = Square::from_readable(&uci[0..2]).ok_or_else(malformed)?;
        let dst = Square::from_readable(&uci[2..4]).ok_or_else(malformed)?;
        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_char(c) {
                Some(piece_type) if c.is_ascii_lowercase() && piece_type.is_promotion_piece() => Some(piece_type),
                _ => return Err(malformed())
            }
        };
        Ok(Move::new(src, dst, promotion))
    }
}

impl FromStr for Move {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Move> {
        Move::from_uci(s)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uci_roundtrip() {
        for src in Square::iter_all() {
            for dst in [Square::A1, Square::E4, Square::H8] {
                let mv = Move::new_non_promotion(src, dst);
                assert_eq!(Move::from_uci(&mv.uci()), Ok(mv));
                for promotion in PieceType::iter_promotion_pieces() {
                    let mv = Move::new(src, dst, Some(promotion));
                    assert_eq!(mv.uci().parse::<Move>(), Ok(mv));
                }
            }
        }
    }

    #[test]
    fn test_uci_rendering() {
        assert_eq!(Move::new_non_promotion(Square::E2, Square::E4).uci(), "e2e4");
        assert_eq!(Move::new(Square::A7, Square::B8, Some(PieceType::Knight)).to_string(), "a7b8n");
    }

    #[test]
    fn test_malformed_uci() {
        for bad in ["", "e2", "e2e", "e2e4qq", "i2e4", "e9e4", "e7e8k", "e7e8p", "e7e8Q", "e7e8x", "é2e4"] {
            assert_eq!(Move::from_uci(bad), Err(CodecError::MalformedMoveNotation(bad.to_string())));
        }
    }
}
