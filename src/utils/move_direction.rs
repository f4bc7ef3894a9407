//! Move direction related enums and functions.
//!
//! All offsets are `(column change, row change)` in the mover's frame of reference,
//! where the mover's pieces start at the bottom and "up" decreases the row.

use crate::utils::Square;

const fn signum(value: i8) -> i8 {
    if value > 0 {
        1
    } else if value < 0 {
        -1
    } else {
        0
    }
}

const fn frame_delta(src_square: Square, dst_square: Square) -> (i8, i8) {
    (
        dst_square.get_col() as i8 - src_square.get_col() as i8,
        dst_square.get_row() as i8 - src_square.get_row() as i8
    )
}

/// Queen-like directions, ordered clockwise starting from "up".
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QueenLikeMoveDirection {
    Up=0, UpRight=1, Right=2, DownRight=3,
    Down=4, DownLeft=5, Left=6, UpLeft=7,
}

const ALL_QUEEN_MOVE_DIRECTIONS: [QueenLikeMoveDirection; 8] = [
    QueenLikeMoveDirection::Up, QueenLikeMoveDirection::UpRight,
    QueenLikeMoveDirection::Right, QueenLikeMoveDirection::DownRight,
    QueenLikeMoveDirection::Down, QueenLikeMoveDirection::DownLeft,
    QueenLikeMoveDirection::Left, QueenLikeMoveDirection::UpLeft
];

const QUEEN_MOVE_OFFSETS: [(i8, i8); 8] = [
    (0, -1), (1, -1), (1, 0), (1, 1),
    (0, 1), (-1, 1), (-1, 0), (-1, -1)
];

impl QueenLikeMoveDirection {
    pub const fn from(value: u8) -> Option<QueenLikeMoveDirection> {
        if value < 8 {
            Some(ALL_QUEEN_MOVE_DIRECTIONS[value as usize])
        } else {
            None
        }
    }

    pub const fn flip(&self) -> QueenLikeMoveDirection {
        ALL_QUEEN_MOVE_DIRECTIONS[(*self as usize + 4) % 8]
    }

    pub const fn offset(&self) -> (i8, i8) {
        QUEEN_MOVE_OFFSETS[*self as usize]
    }

    pub fn iter() -> impl Iterator<Item=QueenLikeMoveDirection> {
        ALL_QUEEN_MOVE_DIRECTIONS.iter().copied()
    }

    /// Returns the direction and distance of a straight or diagonal move,
    /// or `None` if the squares are not on a common line.
    pub const fn calc_and_measure_distance(src_square: Square, dst_square: Square) -> Option<(QueenLikeMoveDirection, u8)> {
        let (col_change, row_change) = frame_delta(src_square, dst_square);

        if col_change == 0 && row_change == 0 {
            return None;
        }
        if col_change != 0 && row_change != 0 && col_change.abs() != row_change.abs() {
            return None;
        }

        let unit = (signum(col_change), signum(row_change));
        let distance = if col_change.abs() > row_change.abs() { col_change.abs() } else { row_change.abs() };

        let mut i = 0;
        while i < 8 {
            if QUEEN_MOVE_OFFSETS[i].0 == unit.0 && QUEEN_MOVE_OFFSETS[i].1 == unit.1 {
                return Some((ALL_QUEEN_MOVE_DIRECTIONS[i], distance as u8));
            }
            i += 1;
        }
        None
    }
}

/// Knight jumps, ordered clockwise starting from two up and one right.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KnightMoveDirection {
    TwoUpOneRight=0, TwoRightOneUp=1, TwoRightOneDown=2, TwoDownOneRight=3,
    TwoDownOneLeft=4, TwoLeftOneDown=5, TwoLeftOneUp=6, TwoUpOneLeft=7,
}

const ALL_KNIGHT_MOVE_DIRECTIONS: [KnightMoveDirection; 8] = [
    KnightMoveDirection::TwoUpOneRight, KnightMoveDirection::TwoRightOneUp,
    KnightMoveDirection::TwoRightOneDown, KnightMoveDirection::TwoDownOneRight,
    KnightMoveDirection::TwoDownOneLeft, KnightMoveDirection::TwoLeftOneDown,
    KnightMoveDirection::TwoLeftOneUp, KnightMoveDirection::TwoUpOneLeft
];

const KNIGHT_MOVE_OFFSETS: [(i8, i8); 8] = [
    (1, -2), (2, -1), (2, 1), (1, 2),
    (-1, 2), (-2, 1), (-2, -1), (-1, -2)
];

impl KnightMoveDirection {
    pub const fn flip(&self) -> KnightMoveDirection {
        ALL_KNIGHT_MOVE_DIRECTIONS[(*self as usize + 4) % 8]
    }

    pub const fn from(value: u8) -> Option<KnightMoveDirection> {
        if value < 8 {
            Some(ALL_KNIGHT_MOVE_DIRECTIONS[value as usize])
        } else {
            None
        }
    }

    pub const fn offset(&self) -> (i8, i8) {
        KNIGHT_MOVE_OFFSETS[*self as usize]
    }

    pub fn iter() -> impl Iterator<Item=KnightMoveDirection> {
        ALL_KNIGHT_MOVE_DIRECTIONS.iter().copied()
    }

    /// Returns the knight jump leading from `src_square` to `dst_square`, if any.
    pub const fn calc(src_square: Square, dst_square: Square) -> Option<KnightMoveDirection> {
        let change = frame_delta(src_square, dst_square);

        let mut i = 0;
        while i < 8 {
            if KNIGHT_MOVE_OFFSETS[i].0 == change.0 && KNIGHT_MOVE_OFFSETS[i].1 == change.1 {
                return Some(ALL_KNIGHT_MOVE_DIRECTIONS[i]);
            }
            i += 1;
        }
        None
    }
}

/// The three ways a pawn can reach the last rank.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PawnMoveDirection {
    Forward=0, CaptureRight=1, CaptureLeft=2,
}

impl PawnMoveDirection {
    pub const fn from(value: u8) -> Option<PawnMoveDirection> {
        match value {
            0 => Some(PawnMoveDirection::Forward),
            1 => Some(PawnMoveDirection::CaptureRight),
            2 => Some(PawnMoveDirection::CaptureLeft),
            _ => None
        }
    }

    pub const fn offset(&self) -> (i8, i8) {
        match self {
            PawnMoveDirection::Forward => (0, -1),
            PawnMoveDirection::CaptureRight => (1, -1),
            PawnMoveDirection::CaptureLeft => (-1, -1)
        }
    }

    /// Returns the pawn step from `src_square` to `dst_square`, which must be one row up.
    pub const fn calc(src_square: Square, dst_square: Square) -> Option<PawnMoveDirection> {
        match frame_delta(src_square, dst_square) {
            (0, -1) => Some(PawnMoveDirection::Forward),
            (1, -1) => Some(PawnMoveDirection::CaptureRight),
            (-1, -1) => Some(PawnMoveDirection::CaptureLeft),
            _ => None
        }
    }
}

/// Applies a `(column change, row change)` offset to a square, staying in the same frame.
pub const fn offset_square(square: Square, offset: (i8, i8), distance: i8) -> Option<Square> {
    let col = square.get_col() as i8 + offset.0 * distance;
    let row = square.get_row() as i8 + offset.1 * distance;
    if col < 0 || col > 7 || row < 0 || row > 7 {
        return None;
    }
    Square::from((row * 8 + col) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_queen_direction_for_square(square: Square, direction: QueenLikeMoveDirection) {
        let mut distance = 1;
        while let Some(next_square) = offset_square(square, direction.offset(), distance) {
            assert_eq!(
                QueenLikeMoveDirection::calc_and_measure_distance(square, next_square),
                Some((direction, distance as u8))
            );
            assert_eq!(
                QueenLikeMoveDirection::calc_and_measure_distance(next_square, square),
                Some((direction.flip(), distance as u8))
            );
            distance += 1;
        }
    }

    #[test]
    fn test_queen_move_direction() {
        for square in Square::iter_all() {
            for direction in QueenLikeMoveDirection::iter() {
                test_queen_direction_for_square(square, direction);
            }
        }
    }

    #[test]
    fn test_queen_move_direction_rejects_other_geometry() {
        assert_eq!(QueenLikeMoveDirection::calc_and_measure_distance(Square::E4, Square::E4), None);
        assert_eq!(QueenLikeMoveDirection::calc_and_measure_distance(Square::B1, Square::C3), None);
        assert_eq!(QueenLikeMoveDirection::calc_and_measure_distance(Square::A1, Square::C4), None);
    }

    #[test]
    fn test_up_is_toward_rank_eight_for_white() {
        assert_eq!(
            QueenLikeMoveDirection::calc_and_measure_distance(Square::E2, Square::E4),
            Some((QueenLikeMoveDirection::Up, 2))
        );
        assert_eq!(
            QueenLikeMoveDirection::calc_and_measure_distance(Square::C1, Square::E3),
            Some((QueenLikeMoveDirection::UpRight, 2))
        );
    }

    #[test]
    fn test_knight_move_direction() {
        for square in Square::iter_all() {
            for direction in KnightMoveDirection::iter() {
                if let Some(next_square) = offset_square(square, direction.offset(), 1) {
                    assert_eq!(KnightMoveDirection::calc(square, next_square), Some(direction));
                    assert_eq!(KnightMoveDirection::calc(next_square, square), Some(direction.flip()));
                }
            }
        }
        assert_eq!(KnightMoveDirection::calc(Square::E2, Square::E4), None);
    }

    #[test]
    fn test_pawn_move_direction() {
        assert_eq!(PawnMoveDirection::calc(Square::E7, Square::E8), Some(PawnMoveDirection::Forward));
        assert_eq!(PawnMoveDirection::calc(Square::E7, Square::F8), Some(PawnMoveDirection::CaptureRight));
        assert_eq!(PawnMoveDirection::calc(Square::E7, Square::D8), Some(PawnMoveDirection::CaptureLeft));
        assert_eq!(PawnMoveDirection::calc(Square::E7, Square::E6), None);
        for value in 0..3 {
            let direction = PawnMoveDirection::from(value).unwrap();
            assert_eq!(direction as u8, value);
        }
        assert_eq!(PawnMoveDirection::from(3), None);
    }
}
