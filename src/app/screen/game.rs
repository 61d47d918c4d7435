use ggez::{
    event::EventHandler,
    graphics::{Canvas, Color},
    input::keyboard::KeyInput,
    Context,
};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    app::{
        control::Control,
        keyboard_control::{Action, Controls},
        message::Message,
        prefs::Prefs,
        sprites::Sprites,
    },
    error::{AppError, AppErrorConversion, AppResult},
    game::{Event, GameState, State},
};

pub struct Game {
    control: Control,
    state: GameState,

    sprites: Sprites,
    controls: Controls,
    score_message: Message,

    background_color: Color,
    font_size: f32,
}

impl Game {
    pub fn new(ctx: &Context, prefs: &Prefs) -> AppResult<Self> {
        let rng = match prefs.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(prefs, rng).with_trace_step("Game::new")?;
        let sprites = Sprites::load(ctx, prefs.sprite_size).with_trace_step("Game::new")?;

        let controls = Controls::default();
        if !controls.is_unambiguous() {
            warn!("some keys are bound to more than one action: {:?}", controls);
        }

        Ok(Self {
            control: Control::new(prefs.fps),
            state,

            sprites,
            controls,
            score_message: Message::score(0, prefs.font_size),

            background_color: prefs.background_color,
            font_size: prefs.font_size,
        })
    }

    /// `Some` once the game has ended, the live screen
    /// should then be replaced
    pub fn final_score(&self) -> Option<u32> {
        match self.state.state() {
            State::Ended => Some(self.state.score()),
            State::Running => None,
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Ate { score } => self.score_message = Message::score(score, self.font_size),
            Event::Ended { score } => {
                info!(
                    "ended with score {} and {} segments",
                    score,
                    self.state.snake().segment_count()
                );
                self.control.game_over()
            }
            Event::Stalled { segments } => debug!("{} segments waiting for trail", segments),
            _ => {}
        }
    }
}

impl EventHandler<AppError> for Game {
    fn update(&mut self, _ctx: &mut Context) -> AppResult {
        while self.control.can_update() {
            let report = self.state.tick(self.control.frame_dt());
            for event in report.events {
                self.handle_event(event);
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.background_color);

        let board = self.state.board();
        for (entity, placement) in self.state.placements() {
            self.sprites.draw(&mut canvas, entity, placement, board);
        }
        self.score_message.draw(&mut canvas, board);

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        let Some(key) = input.keycode else {
            return Ok(());
        };

        let event = match self.controls.action(key) {
            Some(Action::Turn(dir)) => {
                self.state.set_dir(dir);
                None
            }
            Some(Action::Debug) => self.state.debug_key(),
            Some(Action::RelocateFood) => self.state.relocate_food(),
            Some(Action::Quit) => {
                ctx.request_quit();
                None
            }
            None => None,
        };

        if let Some(event) = event {
            self.handle_event(event);
        }
        Ok(())
    }
}
