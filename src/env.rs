use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A grid cell position, `(row, col)`
///
/// On the wire a coordinate is the pair `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major state index of this coordinate in a grid of `size` columns
    pub const fn state_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for [usize; 2] {
    fn from(value: Coord) -> Self {
        [value.row, value.col]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An ordered sequence of agent positions
pub type Path = Vec<Coord>;

/// The static layout of a grid-world as reported by the service
#[derive(Debug, Clone, PartialEq)]
pub struct EnvDescriptor {
    size: usize,
    start: Coord,
    goal: Coord,
    obstacles: Vec<Vec<bool>>,
}

impl EnvDescriptor {
    /// Build a descriptor, checking that the mask is `size x size` and that
    /// start and goal lie on the grid
    pub fn new(
        size: usize,
        start: Coord,
        goal: Coord,
        obstacles: Vec<Vec<bool>>,
    ) -> Result<Self, ApiError> {
        if size == 0 {
            return Err(ApiError::Malformed("grid size must be positive".into()));
        }
        if obstacles.len() != size || obstacles.iter().any(|row| row.len() != size) {
            return Err(ApiError::Malformed(format!(
                "obstacle mask is not {size}x{size}"
            )));
        }
        for (name, pos) in [("start", start), ("goal", goal)] {
            if pos.row >= size || pos.col >= size {
                return Err(ApiError::Malformed(format!(
                    "{name} position {pos} is outside a {size}x{size} grid"
                )));
            }
        }

        Ok(Self {
            size,
            start,
            goal,
            obstacles,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn is_obstacle(&self, pos: Coord) -> bool {
        self.obstacles
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().flatten().filter(|&&o| o).count()
    }
}

/// The environment every render call works against
///
/// `epoch` identifies which initialization produced the descriptor, so that
/// results requested under an older environment can be recognized and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvContext {
    pub descriptor: EnvDescriptor,
    pub epoch: u64,
}

impl EnvContext {
    pub fn new(descriptor: EnvDescriptor, epoch: u64) -> Self {
        Self { descriptor, epoch }
    }

    pub fn size(&self) -> usize {
        self.descriptor.size()
    }
}
