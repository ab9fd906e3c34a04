mod curve;
mod point;
mod segment;
mod segments;
mod shape;

pub use curve::*;
pub use point::Point;
pub use segment::Segment;
pub use segments::Segments;
pub use shape::Shape;
