use crate::{Point, Rectangle};

/// One of the four children of a split rectangle.
///
/// The declaration order is the order children are stored, visited by
/// queries, and tested during assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Pick the quadrant of `rect` that owns `point`.
    ///
    /// Points on the vertical midline go right, points on the horizontal
    /// midline go up, so every point has exactly one owner:
    /// top-left `[x_min, x_mid) x [y_mid, y_max]`,
    /// top-right `[x_mid, x_max] x [y_mid, y_max]`,
    /// bottom-left `[x_min, x_mid) x [y_min, y_mid)`,
    /// bottom-right is the remainder.
    pub fn of(rect: &Rectangle, point: &Point) -> Quadrant {
        let mid = rect.center();
        let left = point.x < mid.x;
        let top = point.y >= mid.y;
        if left && top {
            Quadrant::TopLeft
        } else if top {
            Quadrant::TopRight
        } else if left {
            Quadrant::BottomLeft
        } else {
            Quadrant::BottomRight
        }
    }
}

/// Distribute points among the quadrants of `rect`, indexed by `Quadrant::index`.
pub fn partition(rect: &Rectangle, points: &[Point]) -> [Vec<Point>; 4] {
    let mut parts: [Vec<Point>; 4] = Default::default();
    for point in points {
        parts[Quadrant::of(rect, point).index()].push(*point);
    }
    parts
}

/// True when splitting `rect` cannot separate `parts`: every point went to a
/// single quadrant whose rectangle is the parent itself.
pub(crate) fn is_noop_split(rect: &Rectangle, parts: &[Vec<Point>; 4]) -> bool {
    let quadrants = rect.quadrants();
    let total: usize = parts.iter().map(Vec::len).sum();
    parts
        .iter()
        .zip(quadrants.iter())
        .any(|(part, quadrant)| part.len() == total && quadrant == rect)
}
