use crate::error::ConfigError;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 40)]
    pub width: i32,

    #[arg(long, default_value_t = 30)]
    pub height: i32,

    #[arg(long, default_value_t = 300)]
    pub num_obstacles: usize,

    /// Goal is drawn from the last N columns and rows
    #[arg(long, default_value_t = 10)]
    pub goal_margin: i32,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "a_star")]
    pub algorithm: String,

    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Cross-check the path cost against the reference solver
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 40,
            height: 30,
            num_obstacles: 300,
            goal_margin: 10,
            seed: None,
            algorithm: "a_star".to_string(),
            delay_ms: 100,
            no_visualization: false,
            verify: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.goal_margin < 1 {
            return Err(ConfigError::ZeroGoalMargin);
        }
        match self.algorithm.as_str() {
            "a_star" | "reference" => Ok(()),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from([
            "grid-astar",
            "--width",
            "12",
            "--seed",
            "7",
            "--no-visualization",
        ])
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 30);
        assert_eq!(config.seed, Some(7));
        assert!(config.no_visualization);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 40, height: 0 })
        );

        let config = Config {
            algorithm: "dijkstra".into(),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownAlgorithm("dijkstra".into()))
        );

        let config = Config {
            goal_margin: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGoalMargin));
    }
}
