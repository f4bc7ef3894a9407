use std::fmt::Display;
use crate::utils::Color;

/// A board square, numbered from a8 (0) to h1 (63).
///
/// The number equals `row * 8 + col` when the board is viewed from white's side,
/// with row 0 at the top (rank 8).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Square {
    A8=0, B8=1, C8=2, D8=3, E8=4, F8=5, G8=6, H8=7,
    A7=8, B7=9, C7=10, D7=11, E7=12, F7=13, G7=14, H7=15,
    A6=16, B6=17, C6=18, D6=19, E6=20, F6=21, G6=22, H6=23,
    A5=24, B5=25, C5=26, D5=27, E5=28, F5=29, G5=30, H5=31,
    A4=32, B4=33, C4=34, D4=35, E4=36, F4=37, G4=38, H4=39,
    A3=40, B3=41, C3=42, D3=43, E3=44, F3=45, G3=46, H3=47,
    A2=48, B2=49, C2=50, D2=51, E2=52, F2=53, G2=54, H2=55,
    A1=56, B1=57, C1=58, D1=59, E1=60, F1=61, G1=62, H1=63,
}

const ALL: [Square; 64] = [
    Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
];

const SQUARE_NAMES: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

impl Square {
    pub const fn from(square_number: u8) -> Option<Square> {
        if square_number < 64 {
            Some(ALL[square_number as usize])
        } else {
            None
        }
    }

    /// Builds a square from a 0-based rank (0 = rank 1) and file (0 = file a).
    pub const fn from_rank_file(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Square::from((7 - rank) * 8 + file)
        } else {
            None
        }
    }

    /// Builds a square from its position in `color`'s frame of reference.
    pub const fn from_perspective(row: u8, col: u8, color: Color) -> Option<Square> {
        if row >= 8 || col >= 8 {
            return None;
        }
        match Square::from(row * 8 + col) {
            Some(square) => Some(square.to_perspective_from_white(color)),
            None => None
        }
    }

    pub const fn get_file(&self) -> u8 {
        *self as u8 % 8
    }

    pub const fn get_rank(&self) -> u8 {
        7 - *self as u8 / 8
    }

    /// Row in white's frame of reference (row 0 is rank 8).
    pub const fn get_row(&self) -> u8 {
        *self as u8 / 8
    }

    /// Column in white's frame of reference (column 0 is file a).
    pub const fn get_col(&self) -> u8 {
        *self as u8 % 8
    }

    /// The square seen from the other side of the board (rotated 180 degrees).
    pub const fn rotated_perspective(&self) -> Square {
        ALL[63 - *self as usize]
    }

    pub const fn to_perspective_from_white(&self, color: Color) -> Square {
        match color {
            Color::White => *self,
            Color::Black => self.rotated_perspective()
        }
    }

    pub const fn readable(&self) -> &'static str {
        SQUARE_NAMES[*self as usize]
    }

    /// Parses a square name such as `e4`.
    pub fn from_readable(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Square::from_rank_file(rank as u8 - b'1', file as u8 - b'a')
    }

    pub fn iter_all() -> impl Iterator<Item = Square> {
        ALL.iter().copied()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.readable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(Square::A8 as u8, 0);
        assert_eq!(Square::H8 as u8, 7);
        assert_eq!(Square::A1 as u8, 56);
        assert_eq!(Square::H1 as u8, 63);
        assert_eq!(Square::E2.get_rank(), 1);
        assert_eq!(Square::E2.get_file(), 4);
        assert_eq!(Square::from_rank_file(1, 4), Some(Square::E2));
        assert_eq!(Square::from(64), None);
    }

    #[test]
    fn test_readable() {
        for square in Square::iter_all() {
            assert_eq!(Square::from_readable(square.readable()), Some(square));
        }
        assert_eq!(Square::from_readable("i1"), None);
        assert_eq!(Square::from_readable("a9"), None);
        assert_eq!(Square::from_readable("a10"), None);
        assert_eq!(Square::from_readable(""), None);
    }

    #[test]
    fn test_perspective() {
        assert_eq!(Square::A1.rotated_perspective(), Square::H8);
        assert_eq!(Square::E2.to_perspective_from_white(Color::Black), Square::D7);
        assert_eq!(Square::E2.to_perspective_from_white(Color::White), Square::E2);

        // white: row = 7 - rank, col = file
        assert_eq!((Square::E2.get_row(), Square::E2.get_col()), (6, 4));
        // black: row = rank, col = 7 - file
        let black_view = Square::E2.to_perspective_from_white(Color::Black);
        assert_eq!((black_view.get_row(), black_view.get_col()), (1, 3));

        for square in Square::iter_all() {
            for color in Color::iter() {
                let view = square.to_perspective_from_white(color);
                assert_eq!(Square::from_perspective(view.get_row(), view.get_col(), color), Some(square));
            }
        }
        assert_eq!(Square::from_perspective(8, 0, Color::White), None);
    }
}
