/**
 * A static, capacity-bounded region quadtree over 2D points.
 *
 * Nodes split at the geometric midpoint of their rectangle (not the point
 * median) until every leaf holds at most `capacity` points. Each node owns
 * its four children directly; there are no parent links since queries only
 * walk downward.
 */
use crate::point::ensure_finite;
use crate::quadrant::{is_noop_split, partition};
use crate::{Config, Error, Point, Quadrant, Rectangle, Result, SpatialIndex};

#[derive(Clone, Debug, PartialEq)]
pub struct QuadTree {
    rect: Rectangle,
    capacity: usize,
    depth: usize,
    // Number of points in the whole subtree.
    size: usize,
    // Only leaves keep points; internal nodes drop theirs after the split.
    points: Vec<Point>,
    children: Option<Box<[QuadTree; 4]>>,
    forced: bool,
}

impl SpatialIndex for QuadTree {
    fn len(&self) -> usize {
        self.size
    }

    fn envelope(&self) -> Option<Rectangle> {
        Some(self.rect)
    }

    fn query_rect(&self, rect: &Rectangle) -> Vec<Point> {
        QuadTree::query_rect(self, rect)
    }
}

impl QuadTree {
    /// Build over the bounding rectangle of `points`, which must be non-empty.
    pub fn new(points: &[Point], capacity: usize) -> Result<Self> {
        Self::with_config(points, &Config::new(capacity)?)
    }

    /// Build over an explicit bounding rectangle that must hold every point.
    pub fn with_rect(points: &[Point], capacity: usize, rect: Rectangle) -> Result<Self> {
        Self::with_config_in(points, rect, &Config::new(capacity)?)
    }

    pub fn with_config(points: &[Point], config: &Config) -> Result<Self> {
        ensure_finite(points)?;
        let rect = Rectangle::bounding(points)?;
        Self::with_config_in(points, rect, config)
    }

    pub fn with_config_in(points: &[Point], rect: Rectangle, config: &Config) -> Result<Self> {
        let config = config.validate()?;
        let rect = rect.validate()?;
        if !rect.bottom_left().is_finite() || !rect.top_right().is_finite() {
            return Err(Error::InvalidRectangle(rect));
        }
        ensure_finite(points)?;
        if let Some(outside) = points.iter().find(|p| !rect.contains_point(p)) {
            return Err(Error::InvalidArgument(format!(
                "point {:?} lies outside the tree bounds {:?}",
                outside, rect
            )));
        }

        let tree = Self::build(points.to_vec(), rect, 0, &config)?;
        log::debug!(
            "Built quadtree over {} points: {} nodes, {} leaves, height {}",
            tree.len(),
            tree.node_count(),
            tree.leaf_count(),
            tree.height()
        );
        Ok(tree)
    }

    fn build(points: Vec<Point>, rect: Rectangle, depth: usize, config: &Config) -> Result<Self> {
        let mut node = QuadTree {
            rect,
            capacity: config.capacity,
            depth,
            size: points.len(),
            points,
            children: None,
            forced: false,
        };
        if node.size <= config.capacity {
            return Ok(node);
        }
        if depth >= config.max_depth {
            config.on_degenerate(depth, node.size)?;
            node.forced = true;
            return Ok(node);
        }

        let parts = partition(&rect, &node.points);
        if is_noop_split(&rect, &parts) {
            config.on_degenerate(depth, node.size)?;
            node.forced = true;
            return Ok(node);
        }

        let [tl_rect, tr_rect, bl_rect, br_rect] = rect.quadrants();
        let [tl, tr, bl, br] = parts;
        let children = [
            Self::build(tl, tl_rect, depth + 1, config)?,
            Self::build(tr, tr_rect, depth + 1, config)?,
            Self::build(bl, bl_rect, depth + 1, config)?,
            Self::build(br, br_rect, depth + 1, config)?,
        ];
        node.points = Vec::new();
        node.children = Some(Box::new(children));
        Ok(node)
    }

    /// Append every point inside `rect` (edges included) to `result`.
    ///
    /// Subtrees whose rectangle misses `rect` are skipped, and subtrees lying
    /// wholly inside `rect` are copied out without testing each point.
    pub fn query(&self, rect: &Rectangle, result: &mut Vec<Point>) {
        if !rect.intersects(self.rect) {
            return;
        }
        if rect.contains(self.rect) {
            self.collect_into(result);
            return;
        }
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.query(rect, result);
                }
            }
            None => result.extend(self.points.iter().filter(|p| rect.contains_point(p))),
        }
    }

    pub fn query_rect(&self, rect: &Rectangle) -> Vec<Point> {
        let mut result = Vec::new();
        self.query(rect, &mut result);
        result
    }

    fn collect_into(&self, result: &mut Vec<Point>) {
        result.reserve(self.size);
        for leaf in self.leaves() {
            result.extend_from_slice(&leaf.points);
        }
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distance from the root, which is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// A leaf that holds more than `capacity` points because it could not be split.
    pub fn is_forced_leaf(&self) -> bool {
        self.forced
    }

    /// The points stored at this node; empty for internal nodes.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn children(&self) -> Option<&[QuadTree; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Number of levels, counting a lone leaf as 1.
    pub fn height(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(|c| c.height()).max().unwrap_or(0),
            None => 1,
        }
    }

    pub fn node_count(&self) -> usize {
        match self.children() {
            Some(children) => 1 + children.iter().map(|c| c.node_count()).sum::<usize>(),
            None => 1,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Depth-first iterator over the leaves, children visited top-left,
    /// top-right, bottom-left, bottom-right.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

pub struct Leaves<'a> {
    stack: Vec<&'a QuadTree>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a QuadTree;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.children() {
                Some(children) => self.stack.extend(children.iter().rev()),
                None => return Some(node),
            }
        }
        None
    }
}
