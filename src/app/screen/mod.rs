pub use game::Game;
pub use game_over::GameOver;

use crate::error::AppError;
use ggez::event::EventHandler;
use std::ops::{Deref, DerefMut};

mod game;
mod game_over;

pub enum Screen {
    Game(Game),
    GameOver(GameOver),
}

impl Deref for Screen {
    type Target = dyn EventHandler<AppError>;

    fn deref(&self) -> &Self::Target {
        use Screen::*;
        match self {
            Game(x) => x,
            GameOver(x) => x,
        }
    }
}

impl DerefMut for Screen {
    fn deref_mut(&mut self) -> &mut Self::Target {
        use Screen::*;
        match self {
            Game(x) => x,
            GameOver(x) => x,
        }
    }
}
