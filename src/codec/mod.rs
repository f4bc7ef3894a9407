//! Tensor codecs for the board history and the 8x8x73 action space.

pub mod constants;
mod snapshot;
mod history;
mod action;

use lazy_static::lazy_static;
use tch::Device;

pub use snapshot::*;
pub use history::*;
pub use action::*;

lazy_static! {
    pub static ref DEVICE: Device = Device::cuda_if_available();
}
