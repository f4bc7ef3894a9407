pub mod utils;
pub mod r#move;
pub mod game;
pub mod codec;
pub mod error;

pub use crate::codec::PositionHistory;
pub use crate::error::{CodecError, Result};
pub use crate::game::Game;
pub use crate::r#move::Move;
