//! Contains the Game struct, the rules engine seen by the history codec.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{Bitboard, Board, CastlingMode, CastlingSide, Chess, EnPassantMode, Position, Role};
use crate::error::{CodecError, Result};
use crate::game::{Outcome, Termination};
use crate::r#move::Move;
use crate::utils::{Color, PieceType, Square};

const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;
const FIVEFOLD_REPETITION_COUNT: usize = 5;

fn to_engine_square(square: Square) -> shakmaty::Square {
    // shakmaty numbers squares from a1 upward, this crate from a8 downward
    shakmaty::Square::new(u32::from(square as u8 ^ 56))
}

fn from_engine_square(square: shakmaty::Square) -> Option<Square> {
    Square::from(square as u8 ^ 56)
}

const fn from_engine_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black
    }
}

const fn to_engine_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black
    }
}

const fn from_engine_role(role: Role) -> PieceType {
    match role {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King
    }
}

fn from_engine_move(m: shakmaty::Move, castling_mode: CastlingMode) -> Option<Move> {
    let uci = match castling_mode {
        CastlingMode::Standard => UciMove::from_standard(m),
        CastlingMode::Chess960 => UciMove::from_chess960(m)
    };
    match uci {
        UciMove::Normal { from, to, promotion } => Some(Move::new(
            from_engine_square(from)?,
            from_engine_square(to)?,
            promotion.map(from_engine_role)
        )),
        _ => None
    }
}

/// Everything that decides whether two positions repeat each other.
#[derive(PartialEq, Eq)]
struct RepetitionKey {
    board: Board,
    turn: shakmaty::Color,
    castling_rights: Bitboard,
    ep_square: Option<shakmaty::Square>,
}

impl RepetitionKey {
    fn of(position: &Chess) -> RepetitionKey {
        RepetitionKey {
            board: position.board().clone(),
            turn: position.turn(),
            castling_rights: position.castles().castling_rights(),
            ep_square: position.ep_square(EnPassantMode::Legal),
        }
    }
}

/// A chess game: the current position plus every position it was reached from.
///
/// Cloning a game gives an independent copy that can be stepped back without
/// touching the original.
#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    castling_mode: CastlingMode,
    move_stack: Vec<(Chess, Move)>,
}

impl Game {
    /// Creates a game at the standard starting position.
    pub fn new() -> Game {
        Game {
            position: Chess::default(),
            castling_mode: CastlingMode::Standard,
            move_stack: Vec::new(),
        }
    }

    /// Creates a game at the standard starting position that writes castling as king-takes-rook.
    pub fn chess960() -> Game {
        Game {
            castling_mode: CastlingMode::Chess960,
            ..Game::new()
        }
    }

    pub fn from_fen(fen: &str, castling_mode: CastlingMode) -> Result<Game> {
        let invalid = |e: &dyn std::fmt::Display| CodecError::InvalidFen(format!("{} ({})", fen, e));

        let parsed = fen.parse::<Fen>().map_err(|e| invalid(&e))?;
        let position: Chess = parsed.into_position(castling_mode).map_err(|e| invalid(&e))?;
        Ok(Game {
            position,
            castling_mode,
            move_stack: Vec::new(),
        })
    }

    pub fn side_to_move(&self) -> Color {
        from_engine_color(self.position.turn())
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceType)> {
        self.position
            .board()
            .piece_at(to_engine_square(square))
            .map(|piece| (from_engine_color(piece.color), from_engine_role(piece.role)))
    }

    pub fn has_castling_rights_short(&self, color: Color) -> bool {
        self.position.castles().has(to_engine_color(color), CastlingSide::KingSide)
    }

    pub fn has_castling_rights_long(&self, color: Color) -> bool {
        self.position.castles().has(to_engine_color(color), CastlingSide::QueenSide)
    }

    /// Halfmoves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmoves()
    }

    /// Number of moves played since the game was created.
    pub fn ply_count(&self) -> usize {
        self.move_stack.len()
    }

    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.move_stack.iter().map(|(_, mv)| *mv)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .filter_map(|m| from_engine_move(m, self.castling_mode))
            .collect()
    }

    /// Plays a legal move.
    pub fn push(&mut self, mv: Move) -> Result<()> {
        let engine_move = self.position
            .legal_moves()
            .into_iter()
            .find(|m| from_engine_move(*m, self.castling_mode) == Some(mv))
            .ok_or_else(|| CodecError::IllegalMove(mv.uci()))?;

        let previous = self.position.clone();
        self.position.play_unchecked(engine_move);
        self.move_stack.push((previous, mv));
        Ok(())
    }

    /// Takes back the last move played and returns it.
    pub fn pop(&mut self) -> Result<Move> {
        let (previous, mv) = self.move_stack.pop().ok_or(CodecError::HistoryUnderflow)?;
        self.position = previous;
        Ok(mv)
    }

    /// Takes back up to `plies` moves and returns how many were taken back.
    pub fn rewind(&mut self, plies: usize) -> usize {
        let plies = plies.min(self.move_stack.len());
        if plies > 0 {
            let new_len = self.move_stack.len() - plies;
            self.position = self.move_stack[new_len].0.clone();
            self.move_stack.truncate(new_len);
        }
        plies
    }

    fn repetition_count(&self) -> usize {
        let current = RepetitionKey::of(&self.position);
        1 + self.move_stack
            .iter()
            .filter(|(position, _)| RepetitionKey::of(position) == current)
            .count()
    }

    pub fn termination(&self) -> Option<Termination> {
        if self.position.is_checkmate() {
            Some(Termination::Checkmate)
        } else if self.position.is_stalemate() {
            Some(Termination::Stalemate)
        } else if self.position.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.position.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            Some(Termination::SeventyFiveMoveRule)
        } else if self.repetition_count() >= FIVEFOLD_REPETITION_COUNT {
            Some(Termination::FivefoldRepetition)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.termination().map(|termination| match termination {
            Termination::Checkmate => Outcome::Decisive { winner: self.side_to_move().flip() },
            _ => Outcome::Draw
        })
    }

    /// Returns the value of the position for `for_color` and whether the game is over.
    pub fn value_and_terminated(&self, for_color: Color) -> (f64, bool) {
        match self.outcome() {
            Some(outcome) => (outcome.value_for(for_color), true),
            None => (0., false)
        }
    }

    /// Turns a pawn move onto the last rank without a promotion piece into a queen promotion.
    ///
    /// Queen promotions share their action plane with plain pawn pushes, so decoded moves
    /// carry no promotion; a driver opts into this reading explicitly.
    pub fn complete_promotion(&self, mv: Move) -> Move {
        if mv.promotion.is_some() {
            return mv;
        }
        let last_rank = match self.side_to_move() {
            Color::White => 7,
            Color::Black => 0
        };
        match self.piece_at(mv.src) {
            Some((color, PieceType::Pawn)) if color == self.side_to_move() && mv.dst.get_rank() == last_rank => {
                mv.with_promotion(Some(PieceType::Queen))
            }
            _ => mv
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
