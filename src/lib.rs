mod config;
mod direct_search;
mod error;
mod point;
mod quadrant;
mod quadtree;
mod rectangle;
pub mod sink;
pub mod source;
mod spatial_index;

pub use config::{Config, DegeneratePolicy, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
pub use direct_search::DirectSearch;
pub use error::{Error, Result};
pub use point::Point;
pub use quadrant::{partition, Quadrant};
pub use quadtree::{Leaves, QuadTree};
pub use rectangle::{HasEnvelope, Rectangle};
pub use spatial_index::SpatialIndex;
