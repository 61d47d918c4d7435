use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};

use crate::basic::{Board, Point};

pub enum Position {
    /// Anchored by its bottom-left corner
    BottomLeft,
    /// Centered in the window
    Center,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub margin: f32,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 10.;

    pub fn score(score: u32, font_size: f32) -> Self {
        Self {
            text: format!("Score: {}", score),
            position: Position::BottomLeft,
            margin: Self::DEFAULT_MARGIN,
            font_size,
            color: Color::WHITE,
        }
    }

    pub fn game_over(score: u32, font_size: f32) -> Self {
        Self {
            text: format!("Game Over\nScore: {}", score),
            position: Position::Center,
            margin: Self::DEFAULT_MARGIN,
            font_size: font_size * 2.,
            color: Color::WHITE,
        }
    }

    /// Screen coordinates of the anchor point
    pub fn dest(&self, board: Board) -> Point {
        match self.position {
            Position::BottomLeft => board.to_screen(Point { x: self.margin, y: self.margin }),
            Position::Center => Point { x: board.width / 2., y: board.height / 2. },
        }
    }

    fn layout(&self) -> TextLayout {
        match self.position {
            Position::BottomLeft => TextLayout {
                h_align: TextAlign::Begin,
                v_align: TextAlign::End,
            },
            Position::Center => TextLayout::center(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, board: Board) {
        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size))
            .set_layout(self.layout());

        let dp = DrawParam::default().dest(self.dest(board)).color(self.color);
        canvas.draw(&text, dp)
    }
}

#[test]
fn test_message_dest() {
    let board = Board { width: 800., height: 600. };
    assert_eq!(Message::score(3, 18.).dest(board), Point { x: 10., y: 590. });
    assert_eq!(Message::game_over(3, 18.).dest(board), Point { x: 400., y: 300. });
    assert_eq!(Message::score(3, 18.).text, "Score: 3");
}
