pub use board::Board;
pub use dir::Dir;
pub use placement::Placement;
pub use point::Point;

mod board;
mod dir;
mod placement;
mod point;
