use crate::algorithms::common::{validate_query, Path, PathfindingAlgorithm};
use crate::error::PathError;
use crate::grid::{Grid, Position};
use pathfinding::prelude::astar;

/// A* provided by the `pathfinding` crate, used to cross-check [`AStar`].
///
/// [`AStar`]: crate::algorithms::a_star::AStar
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceAStar;

impl ReferenceAStar {
    pub fn new() -> Self {
        ReferenceAStar
    }
}

impl PathfindingAlgorithm for ReferenceAStar {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn find_path(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Path>, PathError> {
        validate_query(start, goal, grid.width, grid.height)?;

        let result = astar(
            &start,
            // Cost of moving to a neighbor is 1.
            |p| grid.get_neighbors(p).into_iter().map(|n| (n, 1u32)),
            |p| p.manhattan(&goal),
            |p| *p == goal,
        );

        Ok(result.map(|(cells, _)| Path::from_cells(cells)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_on_gap_scenario() {
        let grid = Grid::with_obstacles(3, 3, [(0, 1), (2, 1)]);
        let path = ReferenceAStar::new()
            .find_path(&grid, Position::new(0, 0), Position::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn reports_unreachable_goal() {
        let grid = Grid::with_obstacles(3, 3, [(0, 1), (1, 1), (2, 1)]);
        let result = ReferenceAStar::new()
            .find_path(&grid, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert!(result.is_none());
    }
}
