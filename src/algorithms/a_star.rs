use crate::algorithms::common::{validate_query, Path, PathfindingAlgorithm};
use crate::error::PathError;
use crate::grid::{in_bounds, Grid, Obstacles, Position};
use crate::statistics::SearchStats;
use log::{debug, error, trace};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry. The heap is a max-heap, so `Ord` is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    h: u32,
    seq: u64,
    g: u32,
    pos: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest f first; among equal f prefer cells closer to the goal,
        // then earlier insertion.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one search together with its bookkeeping counters.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// A* over a 4-connected unit-cost grid with the Manhattan heuristic.
///
/// Each call builds its cost records, parent map, and frontier from scratch
/// and drops them on return, so one `AStar` can serve concurrent callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }

    /// Runs the search and reports counters alongside the path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] before doing any work if the dimensions are not
    /// positive or either endpoint lies outside the grid.
    pub fn search<O>(
        &self,
        start: Position,
        goal: Position,
        width: i32,
        height: i32,
        obstacles: &O,
    ) -> Result<SearchResult, PathError>
    where
        O: Obstacles + ?Sized,
    {
        validate_query(start, goal, width, height)?;
        trace!("[AStar] search: start={} goal={} grid={}x{}", start, goal, width, height);

        let mut stats = SearchStats::default();
        let mut g_costs: FxHashMap<Position, u32> = FxHashMap::default();
        let mut parents: FxHashMap<Position, Position> = FxHashMap::default();
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;

        let h_start = start.manhattan(&goal);
        g_costs.insert(start, 0);
        frontier.push(FrontierEntry {
            f: h_start,
            h: h_start,
            seq,
            g: 0,
            pos: start,
        });
        stats.nodes_pushed += 1;

        let mut reached = false;
        while let Some(current) = frontier.pop() {
            // Stale: a cheaper route to this cell was recorded after the push.
            if g_costs.get(&current.pos) != Some(&current.g) {
                stats.stale_pops += 1;
                continue;
            }

            if current.pos == goal {
                reached = true;
                break;
            }

            stats.nodes_expanded += 1;
            let candidate = current.g + 1;

            for neighbor in current.pos.cardinal_neighbors() {
                if !in_bounds(&neighbor, width, height) || obstacles.is_blocked(&neighbor) {
                    continue;
                }
                if g_costs.get(&neighbor).is_some_and(|&g| g <= candidate) {
                    continue;
                }

                g_costs.insert(neighbor, candidate);
                parents.insert(neighbor, current.pos);

                let h = neighbor.manhattan(&goal);
                seq += 1;
                frontier.push(FrontierEntry {
                    f: candidate + h,
                    h,
                    seq,
                    g: candidate,
                    pos: neighbor,
                });
                stats.nodes_pushed += 1;
            }
        }

        let path = if reached {
            reconstruct_path(&parents, start, goal)
        } else {
            None
        };

        match &path {
            Some(p) => debug!(
                "[AStar] found path: cost={} expanded={} pushed={} stale={}",
                p.cost(),
                stats.nodes_expanded,
                stats.nodes_pushed,
                stats.stale_pops
            ),
            None => debug!(
                "[AStar] unreachable after expanding {} nodes",
                stats.nodes_expanded
            ),
        }

        Ok(SearchResult { path, stats })
    }
}

/// Walks the parent chain back from `goal`. A break in the chain means the
/// records are inconsistent; that is logged and treated as no path.
fn reconstruct_path(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Option<Path> {
    let mut cells = vec![goal];
    let mut current = goal;

    while current != start {
        match parents.get(&current) {
            Some(&prev) => {
                cells.push(prev);
                current = prev;
            }
            None => {
                error!("[AStar] parent chain broken at {} while reconstructing to {}", current, start);
                return None;
            }
        }
    }

    cells.reverse();
    Some(Path::from_cells(cells))
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn find_path(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Path>, PathError> {
        self.search(start, goal, grid.width, grid.height, grid)
            .map(|result| result.path)
    }

    fn find_path_with_stats(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<(Option<Path>, Option<SearchStats>), PathError> {
        self.search(start, goal, grid.width, grid.height, grid)
            .map(|result| (result.path, Some(result.stats)))
    }
}
