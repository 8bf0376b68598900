use crate::{Error, Point, Result};

/// An axis-aligned, closed rectangle.
///
/// Every constructor except `spanning` checks that the bottom-left corner does
/// not exceed the top-right corner on either axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Point {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x,
            y_max: self.y,
        }
    }
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl<T: HasEnvelope> HasEnvelope for &T {
    fn envelope(&self) -> Rectangle {
        (*self).envelope()
    }
}

impl Rectangle {
    pub fn new(bottom_left: Point, top_right: Point) -> Result<Self> {
        Rectangle {
            x_min: bottom_left.x,
            y_min: bottom_left.y,
            x_max: top_right.x,
            y_max: top_right.y,
        }
        .validate()
    }

    /// Build the rectangle spanned by two arbitrary corners.
    pub fn spanning(p1: Point, p2: Point) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    /// The minimal rectangle holding every point.
    pub fn bounding(points: &[Point]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;
        let bounds = rest.iter().fold(first.envelope(), |mut s, p| {
            s.expand(p);
            s
        });
        bounds.validate()
    }

    /// Reject rectangles whose corners are inverted or not numbers.
    pub fn validate(self) -> Result<Self> {
        // Written as negations so NaN coordinates fail too.
        if !(self.x_min <= self.x_max) || !(self.y_min <= self.y_max) {
            return Err(Error::InvalidRectangle(self));
        }
        Ok(self)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x_min, self.y_min)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x_max, self.y_max)
    }

    pub fn center(&self) -> Point {
        Point {
            x: midpoint(self.x_min, self.x_max),
            y: midpoint(self.y_min, self.y_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// False only when the two are disjoint on some axis; touching edges intersect.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Whether `item` lies entirely inside, corners inclusive.
    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// The four closed child rectangles, in the order top-left, top-right,
    /// bottom-left, bottom-right. Neighbours share their midpoint edges.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let mid = self.center();
        [
            Rectangle {
                x_min: self.x_min,
                y_min: mid.y,
                x_max: mid.x,
                y_max: self.y_max,
            },
            Rectangle {
                x_min: mid.x,
                y_min: mid.y,
                x_max: self.x_max,
                y_max: self.y_max,
            },
            Rectangle {
                x_min: self.x_min,
                y_min: self.y_min,
                x_max: mid.x,
                y_max: mid.y,
            },
            Rectangle {
                x_min: mid.x,
                y_min: self.y_min,
                x_max: self.x_max,
                y_max: mid.y,
            },
        ]
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        let rect = item.envelope();
        self.x_min = self.x_min.min(rect.x_min);
        self.y_min = self.y_min.min(rect.y_min);
        self.x_max = self.x_max.max(rect.x_max);
        self.y_max = self.y_max.max(rect.y_max);
    }
}

// Halving before adding avoids overflow near f64::MAX, but loses precision
// for subnormals, so it is only used when the plain sum overflows.
fn midpoint(low: f64, high: f64) -> f64 {
    let mid = (low + high) / 2.;
    if mid.is_finite() {
        mid
    } else {
        low / 2. + high / 2.
    }
}
