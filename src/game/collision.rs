use crate::basic::Point;

/// Whether two points are strictly closer than `margin`
pub fn collides(a: Point, b: Point, margin: f32) -> bool {
    a.distance_sq(b) < margin * margin
}

#[test]
fn test_collides() {
    let head = Point { x: 100., y: 100. };
    let cases = [
        ((105., 100.), true),
        ((100., 119.), true),
        ((120., 100.), false), // exactly on the margin
        ((112., 116.), false),
        ((111., 116.), true),
        ((300., 300.), false),
    ];
    for (food, expect) in cases {
        let food = Point::from(food);
        assert_eq!(collides(head, food, 20.), expect, "{:?}", food);
        assert_eq!(collides(food, head, 20.), expect, "{:?} reversed", food);
    }
}
