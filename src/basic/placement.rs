use crate::basic::Point;

/// Everything a renderer needs to know about an entity,
/// the drawable itself is owned elsewhere
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub pos: Point,
    /// Clockwise, in radians
    pub rotation: f32,
    pub visible: bool,
}

impl Placement {
    pub fn at(pos: Point) -> Self {
        Self { pos, rotation: 0., visible: true }
    }
}
