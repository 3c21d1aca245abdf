use std::fmt;
use std::time::Duration;

/// Counters gathered during one A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub nodes_pushed: usize,
    /// Frontier entries discarded because a cheaper route was found later.
    pub stale_pops: usize,
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: &'static str,
    pub grid_width: i32,
    pub grid_height: i32,
    pub num_obstacles: usize,
    pub path_cost: Option<usize>,
    pub steps_taken: usize,
    pub find_path_time: Duration,
    pub search: Option<SearchStats>,
}

impl Statistics {
    pub fn new(algorithm: &'static str, grid_width: i32, grid_height: i32, num_obstacles: usize) -> Self {
        Statistics {
            algorithm,
            grid_width,
            grid_height,
            num_obstacles,
            path_cost: None,
            steps_taken: 0,
            find_path_time: Duration::ZERO,
            search: None,
        }
    }

    /// Share of the grid's free cells the search had to expand.
    pub fn expansion_ratio(&self) -> Option<f64> {
        let search = self.search?;
        let free = (self.grid_width as usize * self.grid_height as usize)
            .saturating_sub(self.num_obstacles);
        if free == 0 {
            return None;
        }
        Some(search.nodes_expanded as f64 / free as f64)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Grid: {}x{}", self.grid_width, self.grid_height)?;
        writeln!(f, "Obstacles: {}", self.num_obstacles)?;
        match self.path_cost {
            Some(cost) => writeln!(f, "Path cost: {}", cost)?,
            None => writeln!(f, "Path cost: unreachable")?,
        }
        writeln!(f, "Steps taken: {}", self.steps_taken)?;
        writeln!(f, "find_path time: {:.2?}", self.find_path_time)?;

        if let Some(search) = self.search {
            writeln!(f, "Nodes expanded: {}", search.nodes_expanded)?;
            writeln!(f, "Frontier pushes: {}", search.nodes_pushed)?;
            writeln!(f, "Stale pops: {}", search.stale_pops)?;
        }
        if let Some(ratio) = self.expansion_ratio() {
            writeln!(f, "Expanded {:.1}% of free cells", ratio * 100.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_ratio_counts_free_cells() {
        let mut stats = Statistics::new("a_star", 10, 10, 20);
        assert_eq!(stats.expansion_ratio(), None);
        stats.search = Some(SearchStats {
            nodes_expanded: 40,
            nodes_pushed: 60,
            stale_pops: 0,
        });
        assert_eq!(stats.expansion_ratio(), Some(0.5));
    }

    #[test]
    fn display_reports_unreachable() {
        let stats = Statistics::new("reference", 3, 3, 3);
        let text = stats.to_string();
        assert!(text.contains("Path cost: unreachable"));
        assert!(!text.contains("Nodes expanded"));
    }
}
