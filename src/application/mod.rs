mod game_state;
mod layout;

pub use game_state::{Command, Event, GameState, Mode};
pub use layout::{Layout, Target};
