use std::collections::VecDeque;

use crate::basic::Point;

/// Fixed-capacity history of head positions, oldest entries
/// are dropped once the capacity is reached
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Point>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "trail capacity must be positive");
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, point: Point) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// `nth_back(1)` is the most recent entry, `None` if the
    /// trail doesn't reach back that far (or for `n == 0`)
    pub fn nth_back(&self, n: usize) -> Option<Point> {
        let len = self.points.len();
        if n == 0 || n > len {
            return None;
        }
        self.points.get(len - n).copied()
    }

    pub fn latest(&self) -> Option<Point> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Point> {
        self.points.front().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[test]
fn test_nth_back() {
    let mut trail = Trail::with_capacity(4);
    assert_eq!(trail.nth_back(1), None);

    for i in 0..3 {
        trail.record(Point { x: i as f32, y: 0. });
    }

    assert_eq!(trail.nth_back(0), None);
    assert_eq!(trail.nth_back(1), Some(Point { x: 2., y: 0. }));
    assert_eq!(trail.nth_back(3), Some(Point { x: 0., y: 0. }));
    assert_eq!(trail.nth_back(4), None);
    assert_eq!(trail.latest(), trail.nth_back(1));
    assert_eq!(trail.oldest(), trail.nth_back(3));
}

#[test]
fn test_capacity_drops_oldest() {
    let mut trail = Trail::with_capacity(3);
    for i in 0..10 {
        trail.record(Point { x: i as f32, y: i as f32 });
        assert!(trail.points.len() <= trail.capacity());
    }

    assert_eq!(trail.points.len(), 3);
    let xs: Vec<_> = (1..=3).filter_map(|n| trail.nth_back(n)).map(|p| p.x).collect();
    assert_eq!(xs, [9., 8., 7.]);
    assert_eq!(trail.oldest(), Some(Point { x: 7., y: 7. }));
}
