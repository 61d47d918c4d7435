use std::f32::consts::{FRAC_PI_2, PI};
use std::ops::Neg;

use crate::basic::Point;
use Dir::*;

// y grows upwards in game coordinates, Forward is up the screen
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Forward,
    Backward,
    Left,
    Right,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Forward => Backward,
            Backward => Forward,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [Forward, Right, Backward, Left].iter().copied()
    }

    /// Displacement of one unit in this direction
    pub fn unit(self) -> Point {
        match self {
            Forward => Point { x: 0., y: 1. },
            Backward => Point { x: 0., y: -1. },
            Left => Point { x: -1., y: 0. },
            Right => Point { x: 1., y: 0. },
        }
    }

    /// Clockwise on-screen rotation of a sprite drawn facing right
    pub fn rotation(self) -> f32 {
        match self {
            Right => 0.,
            Backward => FRAC_PI_2,
            Left => PI,
            Forward => -FRAC_PI_2,
        }
    }
}

#[test]
fn test_dir_math() {
    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
        assert_eq!(dir.unit() + (-dir).unit(), Point::default());
        assert_eq!(dir.unit().distance_sq(Point::default()), 1.);
        assert_ne!(dir.rotation(), (-dir).rotation());
    }

    assert_eq!(Forward.unit(), Point { x: 0., y: 1. });
    assert_eq!(Left.unit(), Point { x: -1., y: 0. });
}
