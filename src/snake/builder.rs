use super::*;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

impl Error for BuilderError {}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<Point>,
    pub dir: Option<Dir>,
    pub speed: Option<f32>,
    pub max_segments: Option<usize>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Point) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn speed(mut self, value: f32) -> Self {
        self.speed = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn max_segments(mut self, value: usize) -> Self {
        self.max_segments = Some(value);
        self
    }

    pub fn build(&self) -> Result<Snake, BuilderError> {
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let dir = self
            .dir
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `dir`"))?;
        let speed = self
            .speed
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `speed`"))?;
        let max_segments = self
            .max_segments
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `max_segments`"))?;

        if speed <= 0. {
            return Err(BuilderError(Box::new(self.clone()), "speed must be positive"));
        }

        // the last segment looks furthest back
        let trail = Trail::with_capacity(Snake::segment_lag(max_segments));
        log::debug!(
            "spawn snake at {:?} going {:?}, remembering {} positions",
            pos,
            dir,
            trail.capacity()
        );

        let head = Head {
            placement: Placement {
                pos,
                rotation: dir.rotation(),
                visible: true,
            },
            dir,
            speed,
        };

        Ok(Snake {
            head,
            segments: Vec::with_capacity(max_segments.min(64)),
            trail,
            max_segments,
        })
    }
}

#[test]
fn test_missing_field() {
    let err = Builder::default()
        .pos(Point { x: 1., y: 2. })
        .speed(210.)
        .max_segments(4)
        .build()
        .err()
        .unwrap();
    assert_eq!(err.1, "missing field `dir`");
    assert_eq!(err.0.pos, Some(Point { x: 1., y: 2. }));
}

#[test]
fn test_build() {
    let snake = Builder::default()
        .pos(Point { x: 1., y: 2. })
        .dir(Dir::Left)
        .speed(210.)
        .max_segments(4)
        .build()
        .unwrap();
    assert_eq!(snake.head.pos(), Point { x: 1., y: 2. });
    assert_eq!(snake.head.placement.rotation, Dir::Left.rotation());
    assert_eq!(snake.segment_count(), 0);
    assert_eq!(snake.trail.latest(), None);
    assert_eq!(snake.trail.capacity(), 6);
}
