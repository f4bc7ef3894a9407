//! Per-ply snapshots: piece occupancy planes plus repetition flags.
//!
//! Snapshots are stored from white's point of view with plane row `r` holding rank `r + 1`;
//! `PositionHistory::get_representation` turns them toward the side to move.

use tch::{Kind, Tensor};
use crate::codec::constants::{BOARD_SIZE, NUM_BOARD_PLANES, NUM_HISTORY_SNAPSHOTS, NUM_PIECE_TYPE_PLANES, NUM_PLANES_PER_SNAPSHOT, NUM_SQUARES};
use crate::codec::DEVICE;
use crate::game::Game;
use crate::utils::{Color, Square};

fn planes_from_values(values: &[f32], num_planes: usize) -> Tensor {
    Tensor::from_slice(values)
        .view([num_planes as i64, BOARD_SIZE as i64, BOARD_SIZE as i64])
        .to_device(*DEVICE)
}

/// Fills planes that each hold a single value broadcast over the board.
pub(crate) fn scalar_planes(values: &[f32]) -> Tensor {
    let broadcast: Vec<f32> = values
        .iter()
        .flat_map(|value| std::iter::repeat(*value).take(NUM_SQUARES))
        .collect();
    planes_from_values(&broadcast, values.len())
}

/// Encodes the pieces on the board as 12 planes: white pawn..king, then black pawn..king.
pub fn board_planes(game: &Game) -> Tensor {
    let mut values = vec![0f32; NUM_BOARD_PLANES * NUM_SQUARES];

    for square in Square::iter_all() {
        if let Some((color, piece_type)) = game.piece_at(square) {
            let channel = match color {
                Color::White => piece_type as usize,
                Color::Black => NUM_PIECE_TYPE_PLANES + piece_type as usize
            };
            let cell = square.get_rank() as usize * BOARD_SIZE + square.get_file() as usize;
            values[channel * NUM_SQUARES + cell] = 1.;
        }
    }

    planes_from_values(&values, NUM_BOARD_PLANES)
}

/// Scans earlier boards, newest first, for copies of `board`.
///
/// The second flag is re-evaluated on every step as "this board or an earlier one matched,
/// and the first flag is set", so it is raised together with the first flag.
pub fn repetition_flags<I>(board: &Tensor, earlier_boards: I) -> (bool, bool)
where
    I: IntoIterator<Item = Tensor>
{
    let mut repeated_once = false;
    let mut repeated_twice = false;

    for earlier_board in earlier_boards {
        let is_match = board.equal(&earlier_board);
        repeated_once = is_match || repeated_once;
        repeated_twice = (is_match || repeated_twice) && repeated_once;
    }

    (repeated_once, repeated_twice)
}

/// Joins 12 board planes and the two repetition flags into a 14-plane snapshot.
pub fn make_snapshot(board: &Tensor, repetitions: (bool, bool)) -> Tensor {
    let flag = |set: bool| if set { 1. } else { 0. };
    let repetition_planes = scalar_planes(&[flag(repetitions.0), flag(repetitions.1)]);
    Tensor::cat(&[board, &repetition_planes], 0)
}

/// The all-zero snapshot used to pad the history before enough plies have been played.
pub fn empty_snapshot() -> Tensor {
    Tensor::zeros(
        [NUM_PLANES_PER_SNAPSHOT as i64, BOARD_SIZE as i64, BOARD_SIZE as i64],
        (Kind::Float, *DEVICE)
    )
}

/// Recomputes the snapshot of the position `steps_back` plies before the current one.
///
/// Works on a disposable copy of `game`: it is rewound to the requested position and then
/// further back to find the repetitions that were visible when that position was reached.
/// Positions before the start of the game yield an empty snapshot.
pub fn replay_snapshot(game: &Game, steps_back: usize) -> Tensor {
    if game.ply_count() < steps_back {
        return empty_snapshot();
    }

    let mut replay = game.clone();
    replay.rewind(steps_back);
    let board = board_planes(&replay);

    let mut earlier_boards = Vec::with_capacity(NUM_HISTORY_SNAPSHOTS);
    while earlier_boards.len() < NUM_HISTORY_SNAPSHOTS && replay.rewind(1) == 1 {
        earlier_boards.push(board_planes(&replay));
    }

    let repetitions = repetition_flags(&board, earlier_boards);
    make_snapshot(&board, repetitions)
}
