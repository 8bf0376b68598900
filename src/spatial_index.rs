use crate::{Point, Rectangle};

/// A static point set answering inclusive rectangle range queries.
pub trait SpatialIndex {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Bounding rectangle of the index, `None` when it holds no points.
    fn envelope(&self) -> Option<Rectangle>;
    /// Points lying in `rect`, edges included. Order is unspecified.
    fn query_rect(&self, rect: &Rectangle) -> Vec<Point>;
}
