pub mod a_star;
pub mod common;
pub mod reference;

pub use a_star::{AStar, SearchResult};
pub use common::{Path, PathfindingAlgorithm};
pub use reference::ReferenceAStar;

/// Look up an algorithm by its CLI name.
pub fn algorithm_by_name(name: &str) -> Option<Box<dyn PathfindingAlgorithm>> {
    match name {
        "a_star" => Some(Box::new(AStar::new())),
        "reference" => Some(Box::new(ReferenceAStar::new())),
        _ => None,
    }
}
