use crate::agent::Robot;
use crate::algorithms::{algorithm_by_name, Path, PathfindingAlgorithm, ReferenceAStar};
use crate::config::Config;
use crate::environment::EnvironmentSetup;
use crate::error::{ConfigError, PathError};
use crate::statistics::Statistics;
use log::{debug, error, info};
use std::thread;
use std::time::{Duration, Instant};

pub struct Simulation {
    environment: EnvironmentSetup,
    robot: Robot,
    algorithm: Box<dyn PathfindingAlgorithm>,
    config: Config,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let environment = EnvironmentSetup::generate(&config);
        Self::new_with_environment(config, environment)
    }

    pub fn new_with_environment(
        config: Config,
        environment: EnvironmentSetup,
    ) -> Result<Self, ConfigError> {
        let algorithm = algorithm_by_name(&config.algorithm)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(config.algorithm.clone()))?;
        let robot = Robot::new(environment.start);

        Ok(Simulation {
            environment,
            robot,
            algorithm,
            config,
        })
    }

    pub fn environment(&self) -> &EnvironmentSetup {
        &self.environment
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Plan a path from the robot's start to the goal and time it.
    pub fn plan(&self) -> Result<(Option<Path>, Statistics), PathError> {
        let env = &self.environment;
        let mut stats = Statistics::new(
            self.algorithm.name(),
            env.grid.width,
            env.grid.height,
            env.grid.obstacles.len(),
        );

        let find_path_start = Instant::now();
        let (path, search) = self
            .algorithm
            .find_path_with_stats(&env.grid, env.start, env.goal)?;
        stats.find_path_time = find_path_start.elapsed();
        stats.search = search;
        stats.path_cost = path.as_ref().map(Path::cost);

        debug!(
            "{} planned in {:.2?}: {:?}",
            self.algorithm.name(),
            stats.find_path_time,
            stats.path_cost
        );
        Ok((path, stats))
    }

    /// Cost of the path found by the reference solver on the same layout.
    pub fn reference_cost(&self) -> Result<Option<usize>, PathError> {
        let env = &self.environment;
        let path = ReferenceAStar::new().find_path(&env.grid, env.start, env.goal)?;
        Ok(path.map(|p| p.cost()))
    }

    /// Move the robot along `path` one cell per frame.
    pub fn walk(&mut self, path: &Path, stats: &mut Statistics) {
        if !self.config.no_visualization {
            self.draw_frame(path);
        }

        for &cell in path.iter().skip(1) {
            if !self.robot.step_to(cell) {
                // Paths from either solver are 4-adjacent, so this only trips on a bug.
                error!("robot at {} cannot step to {}", self.robot.position, cell);
                break;
            }
            stats.steps_taken += 1;

            if !self.config.no_visualization {
                self.draw_frame(path);
                thread::sleep(Duration::from_millis(self.config.delay_ms));
            }
        }

        info!(
            "robot finished at {} after {} steps",
            self.robot.position, stats.steps_taken
        );
    }

    /// Plan, then walk if a path exists.
    pub fn run(&mut self) -> Result<(Option<Path>, Statistics), PathError> {
        let (path, mut stats) = self.plan()?;
        if let Some(path) = &path {
            self.walk(path, &mut stats);
        }
        Ok((path, stats))
    }

    fn draw_frame(&self, path: &Path) {
        self.clear_screen();
        println!("=== GRID A* ===");
        println!(
            "Algorithm: {} | Robot: {} | Goal: {}",
            self.algorithm.name(),
            self.robot.position,
            self.environment.goal
        );
        let walked = path
            .iter()
            .position(|&p| p == self.robot.position)
            .map_or(0, |i| i + 1);
        self.environment.grid.print_grid(
            Some(self.robot.position),
            Some(self.environment.goal),
            &path.cells()[..walked],
        );
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Position};

    fn quiet_config(algorithm: &str) -> Config {
        Config {
            algorithm: algorithm.to_string(),
            no_visualization: true,
            delay_ms: 0,
            ..Config::default()
        }
    }

    fn setup(obstacles: &[(i32, i32)], goal: Position) -> EnvironmentSetup {
        EnvironmentSetup {
            grid: Grid::with_obstacles(5, 5, obstacles.iter().copied()),
            start: Position::new(0, 0),
            goal,
            seed: 0,
        }
    }

    #[test_log::test]
    fn robot_walks_to_goal() {
        let env = setup(&[(1, 0), (1, 1), (1, 2), (1, 3)], Position::new(4, 0));
        let mut sim = Simulation::new_with_environment(quiet_config("a_star"), env).unwrap();
        let (path, stats) = sim.run().unwrap();
        let path = path.unwrap();

        assert_eq!(sim.robot().position, Position::new(4, 0));
        assert_eq!(stats.steps_taken, path.cost());
        assert_eq!(stats.path_cost, Some(12));
        assert!(stats.search.is_some());
        assert_eq!(sim.reference_cost().unwrap(), Some(12));
    }

    #[test_log::test]
    fn unreachable_goal_leaves_robot_at_start() {
        let env = setup(&[(4, 3), (3, 4)], Position::new(4, 4));
        let mut sim = Simulation::new_with_environment(quiet_config("reference"), env).unwrap();
        let (path, stats) = sim.run().unwrap();

        assert!(path.is_none());
        assert_eq!(stats.path_cost, None);
        assert_eq!(stats.steps_taken, 0);
        assert!(stats.search.is_none());
        assert_eq!(sim.robot().position, Position::new(0, 0));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let env = setup(&[], Position::new(1, 1));
        let err = Simulation::new_with_environment(quiet_config("d_star"), env).err();
        assert_eq!(err, Some(ConfigError::UnknownAlgorithm("d_star".into())));
    }
}
