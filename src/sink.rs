use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Point, QuadTree, Rectangle, Result};

/// Consumer of the points and rectangles produced by the indexes.
pub trait Sink {
    fn write_point(&mut self, point: &Point) -> Result<()>;

    fn write_rectangle(&mut self, rect: &Rectangle) -> Result<()>;

    fn write_points(&mut self, points: &[Point]) -> Result<()> {
        for point in points {
            self.write_point(point)?;
        }
        Ok(())
    }
}

/// Write every leaf rectangle of `tree` followed by its points.
pub fn write_leaves<S: Sink>(sink: &mut S, tree: &QuadTree) -> Result<()> {
    for leaf in tree.leaves() {
        sink.write_rectangle(&leaf.rect())?;
        sink.write_points(leaf.points())?;
    }
    Ok(())
}

/// Write the cells produced by `DirectSearch::divide`.
pub fn write_partition<S: Sink>(sink: &mut S, cells: &[(Rectangle, Vec<Point>)]) -> Result<()> {
    for (rect, points) in cells {
        sink.write_rectangle(rect)?;
        sink.write_points(points)?;
    }
    Ok(())
}

const MPL_HEADER: &str = "\
import matplotlib.pyplot as plt
from matplotlib.patches import Rectangle

fig, ax = plt.subplots()
points = []
";

const MPL_TRAILER: &str = "\
if points:
    xs, ys = zip(*points)
    ax.scatter(xs, ys, s=1)
ax.autoscale()
ax.set_aspect('equal')
plt.show()
";

/// Writes a matplotlib script plotting points as dots and rectangles as
/// outlines. Call `finish` to complete the script.
///
/// Coordinates are written with `{:?}`, so they must be finite: Python has no
/// `inf` or `NaN` literal. Trees and divided partitions never hold such values.
pub struct MplWriter<W: Write> {
    out: W,
}

impl MplWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        MplWriter::new(BufWriter::new(file))
    }
}

impl<W: Write> MplWriter<W> {
    pub fn new(mut out: W) -> Result<Self> {
        out.write_all(MPL_HEADER.as_bytes())?;
        Ok(MplWriter { out })
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.write_all(MPL_TRAILER.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Sink for MplWriter<W> {
    fn write_point(&mut self, point: &Point) -> Result<()> {
        writeln!(self.out, "points.append(({:?}, {:?}))", point.x, point.y)?;
        Ok(())
    }

    fn write_rectangle(&mut self, rect: &Rectangle) -> Result<()> {
        writeln!(
            self.out,
            "ax.add_patch(Rectangle(({:?}, {:?}), {:?}, {:?}, fill=False, linewidth=0.5))",
            rect.x_min,
            rect.y_min,
            rect.width(),
            rect.height()
        )?;
        Ok(())
    }
}
