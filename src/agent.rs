use crate::grid::Position;

/// The point robot that walks a planned path.
#[derive(Debug, Clone)]
pub struct Robot {
    pub position: Position,
}

impl Robot {
    pub fn new(start_pos: Position) -> Self {
        Robot {
            position: start_pos,
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Step onto `target`, which must be 4-adjacent or the current cell.
    /// Returns `false` without moving otherwise.
    pub fn step_to(&mut self, target: Position) -> bool {
        if target != self.position && !self.position.is_adjacent(&target) {
            return false;
        }
        self.move_by(target.x - self.position.x, target.y - self.position.y);
        true
    }
}
