mod board;
mod color;
mod piece;
mod position;
mod rank;
mod role;
mod setup;
mod validator;

pub use board::*;
pub use color::*;
pub use piece::*;
pub use position::*;
pub use rank::*;
pub use role::*;
pub use setup::*;
pub use validator::*;
