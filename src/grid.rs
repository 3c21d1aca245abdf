use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan (L1) distance, the admissible heuristic for 4-way unit moves.
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }

    /// The four axis-aligned neighbours, unfiltered.
    pub fn cardinal_neighbors(&self) -> [Position; 4] {
        [(0, 1), (0, -1), (1, 0), (-1, 0)].map(|(dx, dy)| Position::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Membership test over blocked cells.
pub trait Obstacles {
    fn is_blocked(&self, pos: &Position) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Position, S> {
    fn is_blocked(&self, pos: &Position) -> bool {
        self.contains(pos)
    }
}

impl Obstacles for BTreeSet<Position> {
    fn is_blocked(&self, pos: &Position) -> bool {
        self.contains(pos)
    }
}

impl Obstacles for [Position] {
    fn is_blocked(&self, pos: &Position) -> bool {
        self.contains(pos)
    }
}

/// A bounded grid with a static set of blocked cells.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub obstacles: FxHashSet<Position>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid {
            width,
            height,
            obstacles: FxHashSet::default(),
        }
    }

    /// Builds a grid from any collection of blocked cells; duplicates collapse.
    pub fn with_obstacles<I>(width: i32, height: i32, obstacles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        Grid {
            width,
            height,
            obstacles: obstacles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        in_bounds(pos, self.width, self.height)
    }

    pub fn is_blocked(&self, pos: &Position) -> bool {
        self.obstacles.contains(pos)
    }

    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        pos.cardinal_neighbors()
            .into_iter()
            .filter(|n| self.in_bounds(n) && !self.is_blocked(n))
            .collect()
    }

    /// Print a visual representation of the grid
    pub fn print_grid(&self, robot: Option<Position>, goal: Option<Position>, path: &[Position]) {
        print!("{}", self.render(robot, goal, path));
    }

    pub fn render(&self, robot: Option<Position>, goal: Option<Position>, path: &[Position]) -> String {
        let trail: FxHashSet<Position> = path.iter().copied().collect();
        let mut out = String::from("Legend: R=Robot, G=Goal, #=Obstacle, *=Path, .=Empty\n");

        out.push_str("   ");
        for x in 0..self.width {
            out.push_str(&format!("{:2}", x % 10));
        }
        out.push('\n');

        for y in 0..self.height {
            out.push_str(&format!("{:2} ", y % 100));
            for x in 0..self.width {
                let pos = Position { x, y };
                let c = if Some(pos) == robot {
                    'R'
                } else if Some(pos) == goal {
                    'G'
                } else if self.is_blocked(&pos) {
                    '#'
                } else if trail.contains(&pos) {
                    '*'
                } else {
                    '.'
                };
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl Obstacles for Grid {
    fn is_blocked(&self, pos: &Position) -> bool {
        self.obstacles.contains(pos)
    }
}

pub(crate) fn in_bounds(pos: &Position, width: i32, height: i32) -> bool {
    (0..width).contains(&pos.x) && (0..height).contains(&pos.y)
}
