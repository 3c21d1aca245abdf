use crate::error::{Endpoint, PathError};
use crate::grid::{in_bounds, Grid, Position};
use crate::statistics::SearchStats;

/// An ordered start-to-goal sequence of 4-adjacent cells, both ends included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub(crate) fn from_cells(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Path { cells }
    }

    /// Number of unit moves, one less than the number of cells.
    pub fn cost(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn goal(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Position> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the goal is unreachable from `start`.
    fn find_path(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Path>, PathError>;

    /// Like `find_path`, plus search counters where the algorithm keeps them.
    fn find_path_with_stats(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<(Option<Path>, Option<SearchStats>), PathError> {
        self.find_path(grid, start, goal).map(|path| (path, None))
    }
}

/// Rejects non-positive dimensions and endpoints outside the grid.
pub fn validate_query(
    start: Position,
    goal: Position,
    width: i32,
    height: i32,
) -> Result<(), PathError> {
    if width <= 0 || height <= 0 {
        return Err(PathError::InvalidDimensions { width, height });
    }
    for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !in_bounds(&position, width, height) {
            return Err(PathError::OutOfBounds {
                endpoint,
                position,
                width,
                height,
            });
        }
    }
    Ok(())
}
