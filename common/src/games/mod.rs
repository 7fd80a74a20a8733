mod broadcaster;
mod session_rng;

pub mod tictactoe;

pub use broadcaster::{GameBroadcaster, NullBroadcaster};
pub use session_rng::SessionRng;
