use anyhow::Result;
use anyhow::bail;

use crate::geometry::primitives::Point;

/// Axis of movement on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cardinal direction of travel along the grid.
/// Positive y points down, so `Down` increases y and `Up` decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that would exactly reverse `self`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Direction of travel from `a` to `b`.
    ///
    /// Valid steps move along exactly one axis; a zero-length or diagonal
    /// delta has no cardinal direction and is rejected.
    pub fn between(a: Point, b: Point) -> Result<Direction> {
        let Point(dx, dy) = b - a;
        match (dx, dy) {
            (dx, dy) if dx != 0.0 && dy != 0.0 => bail!("diagonal step, {a:?} -> {b:?}"),
            (dx, _) if dx > 0.0 => Ok(Direction::Right),
            (dx, _) if dx < 0.0 => Ok(Direction::Left),
            (_, dy) if dy > 0.0 => Ok(Direction::Down),
            (_, dy) if dy < 0.0 => Ok(Direction::Up),
            _ => bail!("zero-length step at {a:?}"),
        }
    }
}
