use crate::{Error, Result};

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What to do with a node that holds too many points but cannot be split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Keep the node as an over-capacity leaf.
    ForceLeaf,
    /// Abort construction with `Error::DegenerateGeometry`.
    Fail,
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        DegeneratePolicy::ForceLeaf
    }
}

/// Subdivision parameters shared by `QuadTree` and `DirectSearch::divide`.
///
/// A node splits while it holds more than `capacity` points, its depth is
/// below `max_depth` (the root is depth 0), and the split actually separates
/// its points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub max_depth: usize,
    pub degenerate: DegeneratePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl Config {
    pub fn new(capacity: usize) -> Result<Self> {
        Config {
            capacity,
            ..Config::default()
        }
        .validate()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_degenerate_policy(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn validate(self) -> Result<Self> {
        if self.capacity == 0 {
            return Err(Error::InvalidArgument(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// Resolve a node that cannot be split: `Ok(())` means keep it as a leaf.
    pub(crate) fn on_degenerate(&self, depth: usize, points: usize) -> Result<()> {
        match self.degenerate {
            DegeneratePolicy::ForceLeaf => {
                log::warn!(
                    "Forcing leaf with {} points (capacity {}) at depth {}",
                    points,
                    self.capacity,
                    depth
                );
                Ok(())
            }
            DegeneratePolicy::Fail => Err(Error::DegenerateGeometry { depth, points }),
        }
    }
}
