use ggez::{
    graphics::{Canvas, Color, DrawMode, DrawParam, Image, Mesh, Rect},
    Context,
};
use log::{info, warn};

use crate::{
    basic::{Board, Placement, Point},
    error::AppResult,
    game::Entity,
};

/// Externally owned drawable, entities only refer to it by kind
enum Handle {
    Image(Image),
    /// Stand-in for a missing image
    Quad(Mesh),
}

/// The three fixed-size drawables, loaded once per game
pub struct Sprites {
    head: Handle,
    body: Handle,
    food: Handle,
    size: f32,
}

impl Sprites {
    pub const HEAD_PATH: &'static str = "/head.png";
    pub const BODY_PATH: &'static str = "/body.png";
    pub const FOOD_PATH: &'static str = "/food.png";

    pub fn load(ctx: &Context, size: f32) -> AppResult<Self> {
        Ok(Self {
            head: Self::load_handle(ctx, Self::HEAD_PATH, size, Color::from_rgb(77, 182, 172))?,
            body: Self::load_handle(ctx, Self::BODY_PATH, size, Color::from_rgb(38, 166, 154))?,
            food: Self::load_handle(ctx, Self::FOOD_PATH, size, Color::from_rgb(239, 83, 80))?,
            size,
        })
    }

    fn load_handle(ctx: &Context, path: &str, size: f32, fallback: Color) -> AppResult<Handle> {
        match Image::from_path(ctx, path) {
            Ok(image) => {
                info!("loaded {} ({}x{})", path, image.width(), image.height());
                Ok(Handle::Image(image))
            }
            Err(e) => {
                warn!("failed to load {}, drawing a plain square instead: {}", path, e);
                let half = size / 2.;
                let mesh = Mesh::new_rectangle(
                    ctx,
                    DrawMode::fill(),
                    Rect::new(-half, -half, size, size),
                    fallback,
                )?;
                Ok(Handle::Quad(mesh))
            }
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, entity: Entity, placement: Placement, board: Board) {
        let handle = match entity {
            Entity::Head => &self.head,
            Entity::Segment(_) => &self.body,
            Entity::Food => &self.food,
        };

        // anchored at the center
        let dp = DrawParam::default()
            .dest(board.to_screen(placement.pos))
            .rotation(placement.rotation);

        match handle {
            Handle::Image(image) => {
                let scale = Point {
                    x: self.size / image.width() as f32,
                    y: self.size / image.height() as f32,
                };
                let dp = dp.offset(Point::square(0.5)).scale(scale);
                canvas.draw(image, dp)
            }
            Handle::Quad(mesh) => canvas.draw(mesh, dp),
        }
    }
}
