pub use builder::{Builder, BuilderError};
pub use trail::Trail;

use log::trace;

use crate::basic::{Board, Dir, Placement, Point};

pub mod builder;
mod trail;

pub struct Head {
    pub placement: Placement,
    pub dir: Dir,
    /// Distance covered per second
    pub speed: f32,
}

impl Head {
    pub fn pos(&self) -> Point {
        self.placement.pos
    }

    pub fn set_dir(&mut self, dir: Dir) {
        self.dir = dir;
        self.placement.rotation = dir.rotation();
    }
}

/// A body segment, its lag behind the head is
/// given by its index in `Snake::segments`
#[derive(Copy, Clone, Debug)]
pub struct Segment {
    pub placement: Placement,
}

/// Result of moving the head for one tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub from: Point,
    pub to: Point,
    pub wrapped: bool,
}

pub struct Snake {
    pub head: Head,
    /// In insertion order, never shrinks
    pub segments: Vec<Segment>,
    pub trail: Trail,
    max_segments: usize,
}

impl Snake {
    /// Segment `i` sits at `trail.nth_back(i + FIRST_SEGMENT_LAG)`,
    /// `nth_back(1)` being the current head position
    pub const FIRST_SEGMENT_LAG: usize = 2;

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.max_segments
    }

    /// How far back in the trail segment `index` looks
    pub fn segment_lag(index: usize) -> usize {
        index + Self::FIRST_SEGMENT_LAG
    }

    /// Move the head along its direction by the truncated distance
    /// covered in `dt`, then record the new position in the trail,
    /// off-board positions are only wrapped when `wrap` is set
    pub fn advance(&mut self, dt: f32, board: Board, wrap: bool) -> Step {
        let from = self.head.pos();
        let distance = (self.head.speed * dt).trunc();
        let mut to = from + self.head.dir.unit() * distance;

        let mut wrapped = false;
        if wrap {
            (to, wrapped) = board.wrap(to);
        }

        self.head.placement.pos = to;
        self.trail.record(to);

        Step { from, to, wrapped }
    }

    /// Snap every segment to its lagged trail entry, segments whose
    /// entry doesn't exist yet stay where they are,
    /// returns the number of such segments
    pub fn propagate(&mut self) -> usize {
        let mut stalled = 0;
        for (i, segment) in self.segments.iter_mut().enumerate() {
            match self.trail.nth_back(Self::segment_lag(i)) {
                Some(pos) => segment.placement.pos = pos,
                None => {
                    trace!("segment {} has no trail entry yet", i);
                    stalled += 1;
                }
            }
        }
        stalled
    }

    /// Append a segment at the trail entry the new segment follows,
    /// falls back to the oldest entry and then the head if the trail
    /// is too short, returns false if the snake is already full
    pub fn grow(&mut self) -> bool {
        if self.is_full() {
            return false;
        }

        let pos = self
            .trail
            .nth_back(Self::segment_lag(self.segments.len()))
            .or_else(|| self.trail.oldest())
            .unwrap_or_else(|| self.head.pos());
        self.segments.push(Segment { placement: Placement::at(pos) });
        true
    }

    pub fn hide(&mut self) {
        self.head.placement.visible = false;
        for segment in &mut self.segments {
            segment.placement.visible = false;
        }
    }
}

#[cfg(test)]
fn test_snake(pos: Point, dir: Dir, max_segments: usize) -> Snake {
    Builder::default()
        .pos(pos)
        .dir(dir)
        .speed(210.)
        .max_segments(max_segments)
        .build()
        .unwrap()
}

#[test]
fn test_advance_moves_along_one_axis() {
    let board = Board { width: 800., height: 600. };

    for dir in Dir::iter() {
        let mut snake = test_snake(Point { x: 400., y: 300. }, dir, 8);
        let step = snake.advance(0.1, board, true);

        assert_eq!(step.from, Point { x: 400., y: 300. });
        assert_eq!(step.to, step.from + dir.unit() * 21.);
        assert!(!step.wrapped);
        assert_eq!(snake.trail.latest(), Some(step.to));
    }
}

#[test]
fn test_advance_truncates_distance() {
    let board = Board { width: 800., height: 600. };
    let mut snake = test_snake(Point { x: 10., y: 10. }, Dir::Right, 8);
    // 210 * 0.016 = 3.36
    snake.advance(0.016, board, true);
    assert_eq!(snake.head.pos(), Point { x: 13., y: 10. });
}

#[test]
fn test_advance_without_wrap_leaves_board() {
    let board = Board { width: 800., height: 600. };
    let mut snake = test_snake(Point { x: 0., y: 600. }, Dir::Forward, 8);
    let step = snake.advance(0.1, board, false);
    assert_eq!(step.to, Point { x: 0., y: 621. });
    assert!(!step.wrapped);
    assert!(!board.contains(snake.head.pos()));
}

#[test]
fn test_propagate_follows_trail() {
    let board = Board { width: 800., height: 600. };
    let mut snake = test_snake(Point { x: 100., y: 100. }, Dir::Right, 8);

    for _ in 0..3 {
        snake.advance(0.1, board, true);
    }
    assert!(snake.grow());
    assert!(snake.grow());

    for _ in 0..5 {
        snake.advance(0.1, board, true);
        assert_eq!(snake.propagate(), 0);
        for (i, segment) in snake.segments.iter().enumerate() {
            assert_eq!(Some(segment.placement.pos), snake.trail.nth_back(i + 2));
        }
    }
}

#[test]
fn test_propagate_with_short_trail() {
    let board = Board { width: 800., height: 600. };
    let mut snake = test_snake(Point { x: 100., y: 100. }, Dir::Right, 8);

    snake.advance(0.1, board, true);
    // only the current head position is known
    assert!(snake.grow());
    assert_eq!(snake.segments[0].placement.pos, Point { x: 121., y: 100. });

    assert!(snake.grow());
    // the second segment needs 3 entries
    snake.advance(0.1, board, true);
    assert_eq!(snake.propagate(), 1);
    assert_eq!(snake.segments[0].placement.pos, Point { x: 121., y: 100. });
    assert_eq!(snake.segments[1].placement.pos, Point { x: 121., y: 100. });

    snake.advance(0.1, board, true);
    assert_eq!(snake.propagate(), 0);
    assert_eq!(snake.segments[1].placement.pos, Point { x: 121., y: 100. });
}

#[test]
fn test_grow_stops_when_full() {
    let mut snake = test_snake(Point { x: 100., y: 100. }, Dir::Right, 2);
    assert!(snake.grow());
    assert!(snake.grow());
    assert!(snake.is_full());
    assert!(!snake.grow());
    assert_eq!(snake.segment_count(), 2);
}
