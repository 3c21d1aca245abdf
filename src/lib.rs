//! Shortest paths for a point robot on a 4-connected grid with static
//! obstacles, found with A* and the Manhattan heuristic.
//!
//! ```
//! use grid_astar::{find_path, Position};
//! use rustc_hash::FxHashSet;
//!
//! let wall: FxHashSet<Position> = [(0, 1), (2, 1)].into_iter().map(Position::from).collect();
//! let path = find_path(Position::new(0, 0), Position::new(0, 2), 3, 3, &wall)
//!     .unwrap()
//!     .expect("the gap at (1, 1) connects both rows");
//! assert_eq!(path.len(), 5);
//! ```

pub mod agent;
pub mod algorithms;
pub mod config;
pub mod environment;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod statistics;

pub use algorithms::{AStar, Path, PathfindingAlgorithm, ReferenceAStar, SearchResult};
pub use error::{ConfigError, Endpoint, PathError};
pub use grid::{Grid, Obstacles, Position};
pub use statistics::SearchStats;

/// Find a shortest path from `start` to `goal` on a `width` x `height` grid.
///
/// Returns `Ok(None)` when no obstacle-free route exists, and an error when the
/// dimensions are not positive or an endpoint lies outside the grid.
pub fn find_path<O>(
    start: Position,
    goal: Position,
    width: i32,
    height: i32,
    obstacles: &O,
) -> Result<Option<Path>, PathError>
where
    O: Obstacles + ?Sized,
{
    AStar::new()
        .search(start, goal, width, height, obstacles)
        .map(|result| result.path)
}
