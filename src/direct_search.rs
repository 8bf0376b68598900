use crate::point::ensure_finite;
use crate::quadrant::{is_noop_split, partition};
use crate::{Config, Point, Rectangle, Result, SpatialIndex};

/// Brute-force range search over an owned point set.
///
/// `query` scans every point and is the ground truth the quadtree is checked
/// against. `divide` flattens the quadtree's subdivision into a list of
/// (rectangle, points) cells for benchmarking and plotting.
#[derive(Clone, Debug, Default)]
pub struct DirectSearch {
    points: Vec<Point>,
    result: Vec<(Rectangle, Vec<Point>)>,
}

impl SpatialIndex for DirectSearch {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn envelope(&self) -> Option<Rectangle> {
        Rectangle::bounding(&self.points).ok()
    }

    fn query_rect(&self, rect: &Rectangle) -> Vec<Point> {
        self.query(rect)
    }
}

impl DirectSearch {
    pub fn new(points: Vec<Point>) -> Self {
        DirectSearch {
            points,
            result: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn query(&self, rect: &Rectangle) -> Vec<Point> {
        self.points
            .iter()
            .copied()
            .filter(|p| rect.contains_point(p))
            .collect()
    }

    pub fn divide(&mut self, capacity: usize) -> Result<()> {
        self.divide_with_config(&Config::new(capacity)?)
    }

    /// Split the bounding rectangle into cells of at most `capacity` points.
    ///
    /// Cells are split at their midpoint with the same quadrant rule and the
    /// same termination guard as `QuadTree`, using an explicit worklist instead
    /// of recursion. Infinite or NaN points are rejected. Any previous result
    /// is replaced; on error it is left empty.
    pub fn divide_with_config(&mut self, config: &Config) -> Result<()> {
        let config = config.validate()?;
        self.result.clear();
        ensure_finite(&self.points)?;
        let bounds = Rectangle::bounding(&self.points)?;

        let mut result = Vec::new();
        // Stack entries: (rect, depth, points)
        let mut stack = vec![(bounds, 0, self.query(&bounds))];
        while let Some((rect, depth, points)) = stack.pop() {
            if points.len() <= config.capacity {
                result.push((rect, points));
                continue;
            }
            if depth >= config.max_depth {
                config.on_degenerate(depth, points.len())?;
                result.push((rect, points));
                continue;
            }

            let parts = partition(&rect, &points);
            if is_noop_split(&rect, &parts) {
                config.on_degenerate(depth, points.len())?;
                result.push((rect, points));
                continue;
            }
            let [tl_rect, tr_rect, bl_rect, br_rect] = rect.quadrants();
            let [tl, tr, bl, br] = parts;
            stack.extend(vec![
                (tl_rect, depth + 1, tl),
                (tr_rect, depth + 1, tr),
                (bl_rect, depth + 1, bl),
                (br_rect, depth + 1, br),
            ]);
        }

        log::debug!(
            "Divided {} points into {} cells",
            self.points.len(),
            result.len()
        );
        self.result = result;
        Ok(())
    }

    /// The cells computed by the last successful `divide`.
    pub fn result(&self) -> &[(Rectangle, Vec<Point>)] {
        &self.result
    }

    pub fn into_result(self) -> Vec<(Rectangle, Vec<Point>)> {
        self.result
    }
}

impl From<Vec<Point>> for DirectSearch {
    fn from(points: Vec<Point>) -> Self {
        DirectSearch::new(points)
    }
}
