use rand::Rng;

use crate::basic::Point;

/// The playing field, coordinates range over `[0, width] x [0, height]`
/// inclusive with y growing upwards
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn contains(self, point: Point) -> bool {
        (0. ..=self.width).contains(&point.x) && (0. ..=self.height).contains(&point.y)
    }

    /// Place a coordinate that left the board on the opposite edge,
    /// the second value tells whether any wrapping happened
    pub fn wrap(self, mut point: Point) -> (Point, bool) {
        fn wrap_coord(c: &mut f32, max: f32) -> bool {
            if *c > max {
                *c = 0.;
                true
            } else if *c < 0. {
                *c = max;
                true
            } else {
                false
            }
        }

        let wrapped_x = wrap_coord(&mut point.x, self.width);
        let wrapped_y = wrap_coord(&mut point.y, self.height);
        (point, wrapped_x || wrapped_y)
    }

    /// Uniformly random integral point on the board, edges included
    pub fn random_point(self, rng: &mut impl Rng) -> Point {
        Point {
            x: rng.gen_range(0..=self.width as u32) as f32,
            y: rng.gen_range(0..=self.height as u32) as f32,
        }
    }

    /// Game coordinates have y pointing up, the screen has it pointing down
    pub fn to_screen(self, point: Point) -> Point {
        Point { x: point.x, y: self.height - point.y }
    }
}

#[test]
fn test_wrap() {
    let board = Board { width: 800., height: 600. };

    let cases = [
        ((0., 621.), (0., 0.), true),
        ((0., -21.), (0., 600.), true),
        ((821., 10.), (0., 10.), true),
        ((-1., 10.), (800., 10.), true),
        ((800., 600.), (800., 600.), false),
        ((400., 300.), (400., 300.), false),
    ];
    for (input, expect, wrapped) in cases {
        assert_eq!(
            board.wrap(input.into()),
            (expect.into(), wrapped),
            "{:?}",
            input
        );
    }
}

#[test]
fn test_random_point_stays_on_board() {
    use rand::{rngs::StdRng, SeedableRng};

    let board = Board { width: 30., height: 20. };
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let point = board.random_point(&mut rng);
        assert!(board.contains(point), "{:?}", point);
        assert_eq!(point.x.fract(), 0.);
        assert_eq!(point.y.fract(), 0.);
    }
}
