//! Maps moves to and from the 8x8x73 action space.
//!
//! An action is a source square in the mover's frame plus one of 73 move planes:
//! 56 queen-like planes (8 directions, 7 distances), 8 knight planes and 9 underpromotion
//! planes (3 pieces, 3 pawn steps). The flat index is `plane * 64 + row * 8 + col`.

use tch::{Kind, Tensor};
use crate::codec::constants::{BOARD_SIZE, KNIGHT_MOVE_PLANE_OFFSET, MAX_RAY_LENGTH, NUM_ACTIONS, NUM_PAWN_MOVE_DIRECTIONS, NUM_SQUARES, UNDERPROMOTION_PLANE_OFFSET};
use crate::codec::DEVICE;
use crate::error::{CodecError, Result};
use crate::r#move::Move;
use crate::utils::{offset_square, Color, KnightMoveDirection, PawnMoveDirection, PieceType, QueenLikeMoveDirection, Square, UnderpromotionPieceType};

/// A decomposed action: the move plane and the source square in the mover's frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ActionIndex {
    pub plane: u8,
    pub row: u8,
    pub col: u8,
}

impl ActionIndex {
    /// Classifies a move made by `color`.
    pub fn calc(mv: &Move, color: Color) -> Result<ActionIndex> {
        let src_square = mv.get_source().to_perspective_from_white(color);
        let dst_square = mv.get_destination().to_perspective_from_white(color);

        let plane = calc_move_plane(src_square, dst_square, mv.get_promotion())
            .ok_or_else(|| CodecError::InvalidMoveClassification(mv.uci()))?;

        Ok(ActionIndex {
            plane,
            row: src_square.get_row(),
            col: src_square.get_col(),
        })
    }

    pub fn from_flat(index: usize) -> Result<ActionIndex> {
        if index >= NUM_ACTIONS {
            return Err(CodecError::ActionIndexOutOfRange(index));
        }
        let square = index % NUM_SQUARES;
        Ok(ActionIndex {
            plane: (index / NUM_SQUARES) as u8,
            row: (square / BOARD_SIZE) as u8,
            col: (square % BOARD_SIZE) as u8,
        })
    }

    pub fn flat(&self) -> usize {
        self.plane as usize * NUM_SQUARES + self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Rebuilds the move this action stands for when played by `color`.
    ///
    /// Queen-like planes carry no promotion piece, so a pawn reaching the last rank
    /// through one of them comes back without a promotion.
    pub fn to_move(&self, color: Color) -> Result<Move> {
        let off_board = || CodecError::ActionOffBoard(self.flat());

        let src_square = Square::from_perspective(self.row, self.col, Color::White).ok_or_else(off_board)?;
        let plane = self.plane as usize;

        let (dst_square, promotion) = if plane < KNIGHT_MOVE_PLANE_OFFSET {
            let direction = QueenLikeMoveDirection::from((plane / MAX_RAY_LENGTH) as u8).ok_or_else(off_board)?;
            let distance = (plane % MAX_RAY_LENGTH + 1) as i8;
            (offset_square(src_square, direction.offset(), distance), None)
        } else if plane < UNDERPROMOTION_PLANE_OFFSET {
            let direction = KnightMoveDirection::from((plane - KNIGHT_MOVE_PLANE_OFFSET) as u8).ok_or_else(off_board)?;
            (offset_square(src_square, direction.offset(), 1), None)
        } else {
            let underpromotion = plane - UNDERPROMOTION_PLANE_OFFSET;
            let piece = UnderpromotionPieceType::from_index((underpromotion / NUM_PAWN_MOVE_DIRECTIONS) as u8).ok_or_else(off_board)?;
            let direction = PawnMoveDirection::from((underpromotion % NUM_PAWN_MOVE_DIRECTIONS) as u8).ok_or_else(off_board)?;
            (offset_square(src_square, direction.offset(), 1), Some(PieceType::from(piece)))
        };
        let dst_square = dst_square.ok_or_else(off_board)?;

        Ok(Move::new(
            src_square.to_perspective_from_white(color),
            dst_square.to_perspective_from_white(color),
            promotion
        ))
    }
}

/// Picks the move plane for a move given in the mover's frame.
fn calc_move_plane(src_square: Square, dst_square: Square, promotion: Option<PieceType>) -> Option<u8> {
    if let Some(piece_type) = promotion {
        if let Ok(piece) = UnderpromotionPieceType::try_from(piece_type) {
            let direction = PawnMoveDirection::calc(src_square, dst_square)?;
            let plane = UNDERPROMOTION_PLANE_OFFSET
                + piece.index() as usize * NUM_PAWN_MOVE_DIRECTIONS
                + direction as usize;
            return Some(plane as u8);
        }
        if piece_type != PieceType::Queen {
            return None;
        }
    }

    if let Some(direction) = KnightMoveDirection::calc(src_square, dst_square) {
        return Some((KNIGHT_MOVE_PLANE_OFFSET + direction as usize) as u8);
    }

    let (direction, distance) = QueenLikeMoveDirection::calc_and_measure_distance(src_square, dst_square)?;
    Some((direction as usize * MAX_RAY_LENGTH + distance as usize - 1) as u8)
}

/// Returns the flat action index of a move made by `color`.
pub fn calc_action_index(mv: &Move, color: Color) -> Result<usize> {
    ActionIndex::calc(mv, color).map(|action| action.flat())
}

fn indices_to_tensor(indices: &[usize]) -> Tensor {
    let mut values = vec![0f32; NUM_ACTIONS];
    for &index in indices {
        values[index] = 1.;
    }
    Tensor::from_slice(&values).to_device(*DEVICE)
}

/// One-hot encodes a move made by `color` over the 4672 actions.
pub fn encode_move(mv: &Move, color: Color) -> Result<Tensor> {
    let index = calc_action_index(mv, color)?;
    Ok(indices_to_tensor(&[index]))
}

/// Marks every given move with 1 and every other action with 0.
pub fn calc_action_mask(moves: &[Move], color: Color) -> Result<Tensor> {
    let indices = moves
        .iter()
        .map(|mv| calc_action_index(mv, color))
        .collect::<Result<Vec<usize>>>()?;
    Ok(indices_to_tensor(&indices))
}

pub fn decode_action_index(index: usize, color: Color) -> Result<Move> {
    ActionIndex::from_flat(index)?.to_move(color)
}

fn check_action_count(actions: &Tensor) -> Result<()> {
    if actions.numel() != NUM_ACTIONS {
        return Err(CodecError::MalformedActionMask(actions.size()));
    }
    Ok(())
}

/// Decodes every nonzero entry of a 4672-entry tensor (of any shape) into a move, in index order.
pub fn decode_actions(actions: &Tensor, color: Color) -> Result<Vec<Move>> {
    check_action_count(actions)?;

    let nonzero = actions.reshape([-1]).nonzero();
    (0..nonzero.size()[0])
        .map(|i| decode_action_index(nonzero.int64_value(&[i, 0]) as usize, color))
        .collect()
}

/// Zeroes the policy outside the mask and rescales what is left to sum to 1.
///
/// Both tensors must hold 4672 entries; the result is flat and lives on the mask's device.
/// If the policy puts no weight on any masked action, the mask itself is returned.
pub fn renormalize_policy(policy: &Tensor, action_mask: &Tensor) -> Result<Tensor> {
    check_action_count(policy)?;
    check_action_count(action_mask)?;

    let action_mask = action_mask.reshape([-1]);
    let masked_policy = policy.reshape([-1]).to_device(action_mask.device()) * &action_mask;
    let sum_legal_probs = masked_policy.sum(Kind::Float).double_value(&[]);

    if sum_legal_probs > 0. {
        Ok(masked_policy / sum_legal_probs)
    } else {
        Ok(action_mask)
    }
}

/// Pairs each move with its probability under a renormalized policy.
pub fn calc_move_priors(policy: &Tensor, moves: &[Move], color: Color) -> Result<Vec<(Move, f64)>> {
    check_action_count(policy)?;
    let indices = moves
        .iter()
        .map(|mv| calc_action_index(mv, color))
        .collect::<Result<Vec<usize>>>()?;
    let priors = renormalize_policy(policy, &indices_to_tensor(&indices))?;

    Ok(moves
        .iter()
        .zip(indices)
        .map(|(mv, index)| (*mv, priors.double_value(&[index as i64])))
        .collect())
}
