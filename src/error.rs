use crate::grid::Position;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Caller contract violations. An unreachable goal is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("{endpoint} {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        position: Position,
        width: i32,
        height: i32,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("goal margin must be at least 1")]
    ZeroGoalMargin,
    #[error("unknown algorithm '{0}', expected 'a_star' or 'reference'")]
    UnknownAlgorithm(String),
}
