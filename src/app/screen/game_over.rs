use ggez::{
    event::EventHandler,
    graphics::{Canvas, Color},
    input::keyboard::KeyInput,
    Context,
};

use crate::{
    app::{
        keyboard_control::{Action, Controls},
        message::Message,
        prefs::Prefs,
    },
    basic::Board,
    error::{AppError, AppResult},
};

/// Terminal screen, only shows the final score
pub struct GameOver {
    message: Message,
    board: Board,
    background_color: Color,
    controls: Controls,
}

impl GameOver {
    pub fn new(score: u32, prefs: &Prefs) -> Self {
        Self {
            message: Message::game_over(score, prefs.font_size),
            board: prefs.board(),
            background_color: prefs.background_color,
            controls: Controls::default(),
        }
    }
}

impl EventHandler<AppError> for GameOver {
    fn update(&mut self, _ctx: &mut Context) -> AppResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.background_color);
        self.message.draw(&mut canvas, self.board);
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        if let Some(key) = input.keycode {
            if self.controls.action(key) == Some(Action::Quit) {
                ctx.request_quit();
            }
        }
        Ok(())
    }
}
