use crate::config::Config;
use crate::grid::{Grid, Position};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated layout: the grid plus the robot's start and goal.
#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
    pub seed: u64,
}

impl EnvironmentSetup {
    /// Generate a layout from the config, reproducible when a seed is given.
    ///
    /// Obstacles are drawn uniformly over the whole grid and may land on the
    /// start or goal; such layouts simply have no path.
    pub fn generate(config: &Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);

        let start = Position::new(0, 0);
        let goal = Position::new(
            rng.gen_range(config.width.saturating_sub(config.goal_margin).max(0)..config.width),
            rng.gen_range(config.height.saturating_sub(config.goal_margin).max(0)..config.height),
        );

        let obstacles: Vec<Position> = (0..config.num_obstacles)
            .map(|_| Position::new(rng.gen_range(0..config.width), rng.gen_range(0..config.height)))
            .collect();
        let grid = Grid::with_obstacles(config.width, config.height, obstacles);

        info!(
            "Generated environment - seed: {}, start: {}, goal: {}, distinct obstacles: {}",
            seed,
            start,
            goal,
            grid.obstacles.len()
        );

        EnvironmentSetup {
            grid,
            start,
            goal,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> Config {
        Config {
            width: 20,
            height: 15,
            num_obstacles: 50,
            goal_margin: 5,
            seed: Some(seed),
            ..Config::default()
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = EnvironmentSetup::generate(&config(42));
        let b = EnvironmentSetup::generate(&config(42));
        assert_eq!(a.goal, b.goal);
        assert_eq!(a.grid.obstacles, b.grid.obstacles);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn goal_lands_in_far_corner() {
        for seed in 0..20 {
            let env = EnvironmentSetup::generate(&config(seed));
            assert_eq!(env.start, Position::new(0, 0));
            assert!((15..20).contains(&env.goal.x));
            assert!((10..15).contains(&env.goal.y));
            assert!(env.grid.obstacles.len() <= 50);
            assert!(env.grid.obstacles.iter().all(|p| env.grid.in_bounds(p)));
        }
    }

    #[test]
    fn margin_larger_than_grid_is_clamped() {
        let env = EnvironmentSetup::generate(&Config {
            width: 3,
            height: 2,
            goal_margin: 10,
            ..config(1)
        });
        assert!(env.grid.in_bounds(&env.goal));
    }
}
