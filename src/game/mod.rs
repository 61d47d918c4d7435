use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng};

use crate::{
    app::prefs::Prefs,
    basic::{Board, Dir, Placement},
    error::{AppError, AppErrorConversion, AppResult},
    food::Food,
    snake::{self, Snake, Step},
};
pub use collision::collides;
pub use ruleset::{DebugAction, Ruleset, Variant};

mod collision;
mod ruleset;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Running,
    /// Terminal, nothing moves anymore
    Ended,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    Moved(Step),
    /// Segments that couldn't find their trail entry this tick
    Stalled { segments: usize },
    Ate { score: u32 },
    Grew { segments: usize },
    /// Food was eaten by a snake that can't grow anymore
    SegmentCapped,
    FoodRelocated,
    Ended { score: u32 },
}

/// Everything that happened during one call to `GameState::tick`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<Event>,
}

impl TickReport {
    #[cfg(test)]
    pub fn ate(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::Ate { .. }))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Entity {
    Head,
    Segment(usize),
    Food,
}

/// Owns every piece of mutable game state, nothing here
/// knows about windows or drawables
pub struct GameState<R: Rng = StdRng> {
    snake: Snake,
    food: Food,
    score: u32,
    state: State,

    ruleset: Ruleset,
    board: Board,
    margin: f32,

    rng: R,
}

impl<R: Rng> GameState<R> {
    /// Head and food start at random spots, the head going right
    pub fn new(prefs: &Prefs, mut rng: R) -> AppResult<Self> {
        let board = prefs.board();
        let snake = snake::Builder::default()
            .pos(board.random_point(&mut rng))
            .dir(Dir::Right)
            .speed(prefs.move_speed)
            .max_segments(prefs.max_segments)
            .build()
            .map_err(AppError::from)
            .with_trace_step("GameState::new")?;
        let food = Food::random(board, &mut rng);

        info!(
            "new {} game on a {}x{} board",
            prefs.variant, board.width, board.height
        );

        Ok(Self::from_parts(
            snake,
            food,
            board,
            prefs.variant.into(),
            prefs.margin,
            rng,
        ))
    }

    pub fn from_parts(
        snake: Snake,
        food: Food,
        board: Board,
        ruleset: Ruleset,
        margin: f32,
        rng: R,
    ) -> Self {
        Self {
            snake,
            food,
            score: 0,
            state: State::Running,
            ruleset,
            board,
            margin,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Advance the head, drag the segments along the trail
    /// and eat the food if the head is close enough
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_running() {
            return report;
        }

        let step = self.snake.advance(dt, self.board, self.ruleset.wrap);
        if self.board.contains(step.from) && !self.board.contains(step.to) {
            debug!("head left the board at {:?}", step.to);
        }
        report.events.push(Event::Moved(step));

        let stalled = self.snake.propagate();
        if stalled > 0 {
            report.events.push(Event::Stalled { segments: stalled });
        }

        if collides(self.snake.head().pos(), self.food.pos(), self.margin) {
            self.eat(&mut report);
        }

        report
    }

    fn eat(&mut self, report: &mut TickReport) {
        self.food.relocate(self.board, &mut self.rng);
        report.events.push(Event::FoodRelocated);

        if self.snake.grow() {
            report.events.push(Event::Grew {
                segments: self.snake.segment_count(),
            });
        } else {
            warn!(
                "snake is at its maximum of {} segments, not growing",
                self.snake.max_segments()
            );
            report.events.push(Event::SegmentCapped);
        }

        self.score += 1;
        debug!("food eaten, score: {}", self.score);
        report.events.push(Event::Ate { score: self.score });
    }

    pub fn set_dir(&mut self, dir: Dir) {
        if self.is_running() {
            self.snake.head.set_dir(dir);
        }
    }

    /// Grow the snake or end the game, depending on the ruleset
    pub fn debug_key(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }

        match self.ruleset.debug_action {
            DebugAction::Grow => {
                if self.snake.grow() {
                    let segments = self.snake.segment_count();
                    debug!("debug: grew to {} segments", segments);
                    Some(Event::Grew { segments })
                } else {
                    Some(Event::SegmentCapped)
                }
            }
            DebugAction::EndGame => {
                self.end();
                Some(Event::Ended { score: self.score })
            }
        }
    }

    pub fn relocate_food(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.food.relocate(self.board, &mut self.rng);
        debug!("debug: food relocated to {:?}", self.food.pos());
        Some(Event::FoodRelocated)
    }

    pub fn end(&mut self) {
        if self.state == State::Ended {
            return;
        }
        self.state = State::Ended;
        self.snake.hide();
        self.food.placement.visible = false;
        info!("game over, final score: {}", self.score);
    }

    /// Bottom to top drawing order: food, tail to neck, head
    pub fn placements(&self) -> impl Iterator<Item = (Entity, Placement)> + '_ {
        let segments = self
            .snake
            .segments
            .iter()
            .enumerate()
            .rev()
            .map(|(i, segment)| (Entity::Segment(i), segment.placement));

        std::iter::once((Entity::Food, self.food.placement))
            .chain(segments)
            .chain(std::iter::once((Entity::Head, self.snake.head.placement)))
            .filter(|(_, placement)| placement.visible)
    }
}

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::basic::Point;
    use rand::SeedableRng;

    pub const DT: f32 = 0.1;

    pub fn game(head: Point, dir: Dir, food: Point, variant: Variant) -> GameState {
        let snake = snake::Builder::default()
            .pos(head)
            .dir(dir)
            .speed(210.)
            .max_segments(64)
            .build()
            .unwrap();
        GameState::from_parts(
            snake,
            Food::at(food),
            Board { width: 800., height: 600. },
            variant.into(),
            20.,
            StdRng::seed_from_u64(42),
        )
    }

    /// Put the food right in front of the head so it gets eaten next tick
    pub fn feed(game: &mut GameState) {
        let next = game.snake.head.pos() + game.snake.head.dir.unit() * 21.;
        game.food.placement.pos = game.board.wrap(next).0;
    }
}

#[test]
fn test_head_wraps_forward() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 0., y: 600. },
        Dir::Forward,
        Point { x: 400., y: 300. },
        Variant::Wrapping,
    );
    let report = game.tick(DT);

    assert_eq!(game.snake().head().pos(), Point { x: 0., y: 0. });
    assert!(matches!(
        report.events[0],
        Event::Moved(Step { wrapped: true, .. })
    ));
    assert!(!report.ate());
}

#[test]
fn test_prototype_does_not_wrap() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 0., y: 600. },
        Dir::Forward,
        Point { x: 400., y: 300. },
        Variant::Prototype,
    );
    game.tick(DT);
    assert_eq!(game.snake().head().pos(), Point { x: 0., y: 621. });
}

#[test]
fn test_eat_food() {
    use crate::basic::Point;
    use test_support::*;

    let food = Point { x: 105., y: 100. };
    let mut game = game(Point { x: 100., y: 100. }, Dir::Right, food, Variant::Wrapping);
    // the head moves to (121, 100) before the check, still within the margin
    let report = game.tick(DT);

    assert!(report.ate());
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().segment_count(), 1);
    assert_ne!(game.food().pos(), food);
    assert!(game.board().contains(game.food().pos()));
    assert!(report.events.contains(&Event::Ate { score: 1 }));
}

#[test]
fn test_head_moves_exactly_one_step() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 400., y: 300. },
        Dir::Right,
        Point { x: 0., y: 0. },
        Variant::Wrapping,
    );
    let turns = [Dir::Forward, Dir::Left, Dir::Backward, Dir::Right, Dir::Left];
    for dir in turns {
        game.set_dir(dir);
        let before = game.snake().head().pos();
        game.tick(DT);
        let after = game.snake().head().pos();
        assert_eq!(after, before + dir.unit() * 21.);
        assert_eq!(game.snake().trail.latest(), Some(after));
    }
}

#[test]
fn test_three_meals_three_segments() {
    use crate::basic::Point;
    use itertools::Itertools;
    use test_support::*;

    let mut game = game(
        Point { x: 100., y: 100. },
        Dir::Right,
        Point { x: 700., y: 500. },
        Variant::Wrapping,
    );

    // build up some history first
    for _ in 0..5 {
        game.tick(DT);
    }

    let mut scores = vec![game.score()];
    for _ in 0..3 {
        feed(&mut game);
        assert!(game.tick(DT).ate());
        scores.push(game.score());

        // give the food a far away spot so it isn't eaten by accident
        let far = game.snake().head().pos() + Point { x: 300., y: 300. };
        game.food.placement.pos = game.board().wrap(far).0;
        game.tick(DT);
    }

    assert_eq!(scores, [0, 1, 2, 3]);
    assert_eq!(game.snake().segment_count(), 3);

    for (i, segment) in game.snake().segments.iter().enumerate() {
        assert_eq!(Some(segment.placement.pos), game.snake().trail.nth_back(i + 2));
    }
    // each segment is one tick further behind the one before it
    for (a, b) in game.snake().segments.iter().tuple_windows() {
        assert_eq!(a.placement.pos.distance_sq(b.placement.pos), 21. * 21.);
    }
}

#[test]
fn test_score_never_decreases() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 100., y: 100. },
        Dir::Forward,
        Point { x: 100., y: 110. },
        Variant::Wrapping,
    );

    let mut last = game.score();
    for i in 0..200 {
        if i % 7 == 0 {
            feed(&mut game);
        }
        let ate = game.tick(DT).ate();
        let score = game.score();
        assert_eq!(score, last + ate as u32);
        last = score;
    }
    assert!(last > 0);
}

#[test]
fn test_debug_key_ends_game() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 100., y: 100. },
        Dir::Right,
        Point { x: 700., y: 500. },
        Variant::Ending,
    );
    game.tick(DT);

    assert_eq!(game.debug_key(), Some(Event::Ended { score: 0 }));
    assert_eq!(game.state(), State::Ended);
    assert_eq!(game.placements().count(), 0);

    // terminal: nothing moves, no input is taken
    let head = game.snake().head().pos();
    assert_eq!(game.tick(DT), TickReport::default());
    game.set_dir(Dir::Left);
    assert_eq!(game.debug_key(), None);
    assert_eq!(game.relocate_food(), None);
    assert_eq!(game.snake().head().pos(), head);
    assert_eq!(game.snake().head().dir, Dir::Right);
}

#[test]
fn test_debug_key_grows() {
    use crate::basic::Point;
    use test_support::*;

    for variant in [Variant::Prototype, Variant::Wrapping] {
        let mut game = game(
            Point { x: 100., y: 100. },
            Dir::Right,
            Point { x: 700., y: 500. },
            variant,
        );
        game.tick(DT);
        assert_eq!(game.debug_key(), Some(Event::Grew { segments: 1 }));
        assert_eq!(game.debug_key(), Some(Event::Grew { segments: 2 }));
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), State::Running);
    }
}

#[test]
fn test_capped_snake_still_scores() {
    use crate::basic::Point;
    use rand::SeedableRng;
    use test_support::DT;

    let snake = snake::Builder::default()
        .pos(Point { x: 100., y: 100. })
        .dir(Dir::Right)
        .speed(210.)
        .max_segments(1)
        .build()
        .unwrap();
    let mut game = GameState::from_parts(
        snake,
        Food::at(Point { x: 121., y: 100. }),
        Board { width: 800., height: 600. },
        Variant::Wrapping.into(),
        20.,
        StdRng::seed_from_u64(1),
    );

    assert!(game.tick(DT).ate());
    test_support::feed(&mut game);
    let report = game.tick(DT);

    assert!(report.events.contains(&Event::SegmentCapped));
    assert_eq!(game.score(), 2);
    assert_eq!(game.snake().segment_count(), 1);
}

#[test]
fn test_placements_draw_head_last() {
    use crate::basic::Point;
    use test_support::*;

    let mut game = game(
        Point { x: 100., y: 100. },
        Dir::Right,
        Point { x: 700., y: 500. },
        Variant::Wrapping,
    );
    for _ in 0..3 {
        game.tick(DT);
    }
    game.debug_key();
    game.debug_key();

    let entities: Vec<_> = game.placements().map(|(entity, _)| entity).collect();
    assert_eq!(
        entities,
        [Entity::Food, Entity::Segment(1), Entity::Segment(0), Entity::Head]
    );
}
