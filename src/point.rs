use crate::{Error, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Reject infinite or NaN coordinates, which cannot be split at a midpoint.
pub(crate) fn ensure_finite(points: &[Point]) -> Result<()> {
    match points.iter().find(|p| !p.is_finite()) {
        Some(point) => Err(Error::InvalidArgument(format!(
            "point {:?} has a non-finite coordinate",
            point
        ))),
        None => Ok(()),
    }
}

impl From<(f64, f64)> for Point {
    fn from(pair: (f64, f64)) -> Self {
        Point::new(pair.0, pair.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}
