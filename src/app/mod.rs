use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::info;

use crate::app::prefs::Prefs;
use crate::app::screen::{Game, GameOver, Screen};
use crate::error::{AppError, AppErrorConversion, AppResult};

pub mod control;
pub mod keyboard_control;
pub mod message;
pub mod prefs;
mod screen;
mod sprites;

pub struct App {
    screen: Screen,
    prefs: Prefs,
}

impl App {
    pub fn new(ctx: &Context, prefs: Prefs) -> AppResult<Self> {
        let game = Game::new(ctx, &prefs).with_trace_step("App::new")?;
        Ok(Self {
            screen: Screen::Game(game),
            prefs,
        })
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        self.screen.update(ctx)?;

        // dropping the game screen releases every sprite along with it
        if let Screen::Game(game) = &self.screen {
            if let Some(score) = game.final_score() {
                info!("showing final score {}", score);
                self.screen = Screen::GameOver(GameOver::new(score, &self.prefs));
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        self.screen.draw(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> AppResult {
        self.screen.key_down_event(ctx, input, repeated)
    }
}
