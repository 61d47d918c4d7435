use rand::Rng;

use crate::basic::{Board, Placement, Point};

pub struct Food {
    pub placement: Placement,
}

impl Food {
    pub fn at(pos: Point) -> Self {
        Self { placement: Placement::at(pos) }
    }

    pub fn random(board: Board, rng: &mut impl Rng) -> Self {
        Self::at(board.random_point(rng))
    }

    pub fn pos(&self) -> Point {
        self.placement.pos
    }

    /// Move to a uniformly random spot on the board, the food
    /// may land back where it was or under the snake
    pub fn relocate(&mut self, board: Board, rng: &mut impl Rng) {
        self.placement.pos = board.random_point(rng);
    }
}
