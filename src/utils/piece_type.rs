use subenum::subenum;

/// Piece types in the order their occupancy planes appear in a snapshot.
#[subenum(UnderpromotionPieceType)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    Pawn=0,
    #[subenum(UnderpromotionPieceType)]
    Knight=1,
    #[subenum(UnderpromotionPieceType)]
    Bishop=2,
    #[subenum(UnderpromotionPieceType)]
    Rook=3,
    Queen=4,
    King=5
}

const ALL_PIECES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King
];

const ALL_PROMOTION_PIECES: [PieceType; 4] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen
];

const ALL_UNDERPROMOTION_PIECES: [PieceType; 3] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook
];

impl PieceType {
    pub const fn from_index(index: u8) -> Option<PieceType> {
        match index {
            0 => Some(PieceType::Pawn),
            1 => Some(PieceType::Knight),
            2 => Some(PieceType::Bishop),
            3 => Some(PieceType::Rook),
            4 => Some(PieceType::Queen),
            5 => Some(PieceType::King),
            _ => None
        }
    }

    /// Lowercase letter used in UCI notation.
    pub const fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k'
        }
    }

    pub const fn from_char(c: char) -> Option<PieceType> {
        match c {
            'p' | 'P' => Some(PieceType::Pawn),
            'n' | 'N' => Some(PieceType::Knight),
            'b' | 'B' => Some(PieceType::Bishop),
            'r' | 'R' => Some(PieceType::Rook),
            'q' | 'Q' => Some(PieceType::Queen),
            'k' | 'K' => Some(PieceType::King),
            _ => None
        }
    }

    pub const fn is_promotion_piece(&self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }

    pub fn iter_pieces() -> impl Iterator<Item = PieceType> {
        ALL_PIECES.iter().copied()
    }

    pub fn iter_promotion_pieces() -> impl Iterator<Item = PieceType> {
        ALL_PROMOTION_PIECES.iter().copied()
    }

    pub fn iter_underpromotion_pieces() -> impl Iterator<Item = PieceType> {
        ALL_UNDERPROMOTION_PIECES.iter().copied()
    }
}

impl UnderpromotionPieceType {
    /// Position of the piece within the underpromotion planes: knight, bishop, rook.
    pub fn index(&self) -> u8 {
        PieceType::from(*self) as u8 - PieceType::Knight as u8
    }

    pub fn from_index(index: u8) -> Option<UnderpromotionPieceType> {
        match index {
            0 => Some(UnderpromotionPieceType::Knight),
            1 => Some(UnderpromotionPieceType::Bishop),
            2 => Some(UnderpromotionPieceType::Rook),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type() {
        assert_eq!(PieceType::Pawn as u8, 0);
        assert_eq!(PieceType::King as u8, 5);
        for piece_type in PieceType::iter_pieces() {
            assert_eq!(PieceType::from_index(piece_type as u8), Some(piece_type));
            assert_eq!(PieceType::from_char(piece_type.to_char()), Some(piece_type));
        }
        assert_eq!(PieceType::from_index(6), None);
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn test_underpromotion_pieces() {
        for (i, piece_type) in PieceType::iter_underpromotion_pieces().enumerate() {
            let sub = UnderpromotionPieceType::try_from(piece_type).unwrap();
            assert_eq!(sub.index(), i as u8);
            assert_eq!(UnderpromotionPieceType::from_index(i as u8), Some(sub));
        }
        assert!(UnderpromotionPieceType::try_from(PieceType::Queen).is_err());
        assert!(UnderpromotionPieceType::try_from(PieceType::Pawn).is_err());
        assert_eq!(UnderpromotionPieceType::from_index(3), None);
    }
}
