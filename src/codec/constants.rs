// Constants for the input tensor
pub const NUM_PIECE_TYPE_PLANES: usize = 6; // pawn, knight, bishop, rook, queen, king
pub const NUM_COLORS: usize = 2;
pub const NUM_BOARD_PLANES: usize = NUM_PIECE_TYPE_PLANES * NUM_COLORS; // 12 occupancy planes
pub const NUM_REPETITION_PLANES: usize = 2;
pub const NUM_PLANES_PER_SNAPSHOT: usize = NUM_BOARD_PLANES + NUM_REPETITION_PLANES; // 14

pub const NUM_STATES_LOOKBACK: usize = 7;
pub const NUM_HISTORY_SNAPSHOTS: usize = NUM_STATES_LOOKBACK + 1; // T = 8
pub const NUM_HISTORY_PLANES: usize = NUM_PLANES_PER_SNAPSHOT * NUM_HISTORY_SNAPSHOTS; // 112

// Global planes, in order, after the history planes
pub const SIDE_TO_MOVE_PLANE: usize = 0;
pub const PLY_COUNT_PLANE: usize = 1;
pub const WHITE_SHORT_CASTLING_PLANE: usize = 2;
pub const WHITE_LONG_CASTLING_PLANE: usize = 3;
pub const BLACK_SHORT_CASTLING_PLANE: usize = 4;
pub const BLACK_LONG_CASTLING_PLANE: usize = 5;
pub const HALFMOVE_CLOCK_PLANE: usize = 6;
pub const NUM_GLOBAL_PLANES: usize = 7;

pub const NUM_REPRESENTATION_PLANES: usize = NUM_HISTORY_PLANES + NUM_GLOBAL_PLANES; // 119

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

// Constants for the action space
pub const NUM_RAY_DIRECTIONS: usize = 8; // 8 directions for queen-like moves
pub const MAX_RAY_LENGTH: usize = 7; // Maximum length of a queen-like move
pub const NUM_QUEEN_LIKE_MOVES: usize = NUM_RAY_DIRECTIONS * MAX_RAY_LENGTH; // 56 queen-like planes

pub const NUM_KNIGHT_MOVES: usize = 8;

pub const NUM_PAWN_MOVE_DIRECTIONS: usize = 3; // forward, capture right, capture left
pub const NUM_UNDERPROMOTIONS: usize = 3; // knight, bishop, rook
pub const NUM_WAYS_OF_UNDERPROMOTION: usize = NUM_PAWN_MOVE_DIRECTIONS * NUM_UNDERPROMOTIONS; // 9

pub const KNIGHT_MOVE_PLANE_OFFSET: usize = NUM_QUEEN_LIKE_MOVES; // 56
pub const UNDERPROMOTION_PLANE_OFFSET: usize = KNIGHT_MOVE_PLANE_OFFSET + NUM_KNIGHT_MOVES; // 64

pub const NUM_MOVE_PLANES: usize = NUM_QUEEN_LIKE_MOVES + NUM_KNIGHT_MOVES + NUM_WAYS_OF_UNDERPROMOTION; // 73
pub const NUM_ACTIONS: usize = NUM_MOVE_PLANES * NUM_SQUARES; // 4672
