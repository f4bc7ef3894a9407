//! The rolling, perspective-normalized board history fed to the network.

use tch::Tensor;
use crate::codec::constants::{BLACK_LONG_CASTLING_PLANE, BLACK_SHORT_CASTLING_PLANE, HALFMOVE_CLOCK_PLANE, NUM_BOARD_PLANES, NUM_GLOBAL_PLANES, NUM_HISTORY_PLANES, NUM_HISTORY_SNAPSHOTS, NUM_PIECE_TYPE_PLANES, NUM_PLANES_PER_SNAPSHOT, NUM_REPRESENTATION_PLANES, NUM_STATES_LOOKBACK, PLY_COUNT_PLANE, SIDE_TO_MOVE_PLANE, WHITE_LONG_CASTLING_PLANE, WHITE_SHORT_CASTLING_PLANE};
use crate::codec::snapshot::{board_planes, make_snapshot, repetition_flags, replay_snapshot, scalar_planes};
use crate::error::Result;
use crate::game::Game;
use crate::r#move::Move;
use crate::utils::Color;

const ROW_AXIS: i64 = 1;
const COL_AXIS: i64 = 2;

fn flag(set: bool) -> f32 {
    if set { 1. } else { 0. }
}

/// Computes the side-to-move, ply-count, castling and no-progress planes from the game.
pub fn global_planes(game: &Game) -> Tensor {
    let mut values = [0f32; NUM_GLOBAL_PLANES];
    values[SIDE_TO_MOVE_PLANE] = flag(game.side_to_move() == Color::Black);
    values[PLY_COUNT_PLANE] = game.ply_count() as f32;
    values[WHITE_SHORT_CASTLING_PLANE] = flag(game.has_castling_rights_short(Color::White));
    values[WHITE_LONG_CASTLING_PLANE] = flag(game.has_castling_rights_long(Color::White));
    values[BLACK_SHORT_CASTLING_PLANE] = flag(game.has_castling_rights_short(Color::Black));
    values[BLACK_LONG_CASTLING_PLANE] = flag(game.has_castling_rights_long(Color::Black));
    values[HALFMOVE_CLOCK_PLANE] = game.halfmove_clock() as f32;
    scalar_planes(&values)
}

/// Plane order that puts black's pieces and castling rights before white's.
fn black_perspective_plane_order() -> Vec<i64> {
    let mut order = Vec::with_capacity(NUM_REPRESENTATION_PLANES);

    for snapshot in 0..NUM_HISTORY_SNAPSHOTS {
        let start = snapshot * NUM_PLANES_PER_SNAPSHOT;
        order.extend(start + NUM_PIECE_TYPE_PLANES..start + NUM_BOARD_PLANES);
        order.extend(start..start + NUM_PIECE_TYPE_PLANES);
        order.extend(start + NUM_BOARD_PLANES..start + NUM_PLANES_PER_SNAPSHOT);
    }

    let mut global_order: Vec<usize> = (0..NUM_GLOBAL_PLANES).collect();
    global_order.swap(WHITE_SHORT_CASTLING_PLANE, BLACK_SHORT_CASTLING_PLANE);
    global_order.swap(WHITE_LONG_CASTLING_PLANE, BLACK_LONG_CASTLING_PLANE);
    order.extend(global_order.into_iter().map(|plane| NUM_HISTORY_PLANES + plane));

    order.into_iter().map(|plane| plane as i64).collect()
}

/// A game together with its last 8 snapshots and the current global planes.
///
/// The stored tensor has shape `[119, 8, 8]`: 8 snapshots of 14 planes, newest first,
/// followed by 7 global planes. It is kept in white's frame and is only reoriented
/// toward the side to move by `get_representation`.
#[derive(Debug)]
pub struct PositionHistory {
    game: Game,
    representation: Tensor,
}

impl PositionHistory {
    /// Starts a history at the standard starting position.
    pub fn new() -> PositionHistory {
        PositionHistory::from_game(Game::new())
    }

    /// Starts a history from any game; moves already played fill the older snapshots.
    pub fn from_game(game: Game) -> PositionHistory {
        let mut planes: Vec<Tensor> = (0..NUM_HISTORY_SNAPSHOTS)
            .map(|steps_back| replay_snapshot(&game, steps_back))
            .collect();
        planes.push(global_planes(&game));

        PositionHistory {
            representation: Tensor::cat(&planes, 0),
            game,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.game.legal_moves()
    }

    /// The stored planes, in white's frame.
    pub fn representation(&self) -> &Tensor {
        &self.representation
    }

    /// Occupancy planes of a stored snapshot, sharing storage with the representation.
    fn stored_board(&self, steps_back: usize) -> Tensor {
        self.representation.narrow(
            0,
            (steps_back * NUM_PLANES_PER_SNAPSHOT) as i64,
            NUM_BOARD_PLANES as i64
        )
    }

    /// A copy of the snapshot `steps_back` plies before the current position (0 is the newest).
    pub fn snapshot(&self, steps_back: usize) -> Option<Tensor> {
        if steps_back >= NUM_HISTORY_SNAPSHOTS {
            return None;
        }
        let snapshot = self.representation.narrow(
            0,
            (steps_back * NUM_PLANES_PER_SNAPSHOT) as i64,
            NUM_PLANES_PER_SNAPSHOT as i64
        );
        Some(snapshot.copy())
    }

    /// A copy of the global planes.
    pub fn global_planes(&self) -> Tensor {
        self.representation
            .narrow(0, NUM_HISTORY_PLANES as i64, NUM_GLOBAL_PLANES as i64)
            .copy()
    }

    /// Plays a move, shifting the newest snapshot in and the oldest one out.
    pub fn push(&mut self, mv: Move) -> Result<()> {
        self.game.push(mv)?;

        let board = board_planes(&self.game);
        let stored_boards = (0..NUM_HISTORY_SNAPSHOTS)
            .map(|steps_back| self.stored_board(steps_back));
        let repetitions = repetition_flags(&board, stored_boards);
        let current = make_snapshot(&board, repetitions);

        let kept = self.representation.narrow(0, 0, (NUM_STATES_LOOKBACK * NUM_PLANES_PER_SNAPSHOT) as i64);
        self.representation = Tensor::cat(&[&current, &kept, &global_planes(&self.game)], 0);
        Ok(())
    }

    /// Takes back the last move, rebuilding the snapshot that its push shifted out.
    ///
    /// The dropped snapshot is recomputed by replaying a copy of the game backwards,
    /// which costs up to `2 * 8` steps of the rules engine.
    pub fn undo(&mut self) -> Result<Move> {
        let mv = self.game.pop()?;

        let restored = replay_snapshot(&self.game, NUM_STATES_LOOKBACK);
        let kept = self.representation.narrow(
            0,
            NUM_PLANES_PER_SNAPSHOT as i64,
            (NUM_STATES_LOOKBACK * NUM_PLANES_PER_SNAPSHOT) as i64
        );
        self.representation = Tensor::cat(&[&kept, &restored, &global_planes(&self.game)], 0);
        Ok(mv)
    }

    /// Returns the planes as seen by the side to move, leaving the stored planes untouched.
    ///
    /// White gets the stored planes with the rows reversed, so rank 1 is at the bottom.
    /// Black gets its own pieces and castling rights first in every block and the columns
    /// reversed, which puts rank 8 at the bottom with the h-file on the left.
    pub fn get_representation(&self) -> Tensor {
        match self.game.side_to_move() {
            Color::White => self.representation.flip([ROW_AXIS]),
            Color::Black => {
                let order = Tensor::from_slice(&black_perspective_plane_order())
                    .to_device(self.representation.device());
                self.representation.index_select(0, &order).flip([COL_AXIS])
            }
        }
    }
}

impl Clone for PositionHistory {
    fn clone(&self) -> PositionHistory {
        PositionHistory {
            game: self.game.clone(),
            representation: self.representation.copy(),
        }
    }
}

impl Default for PositionHistory {
    fn default() -> PositionHistory {
        PositionHistory::new()
    }
}
