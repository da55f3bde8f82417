use std::fmt;

/// A facing direction on the maze grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const fn count() -> usize {
        4
    }

    /// Column and row offset of one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn iter() -> DirectionIter {
        DirectionIter::new()
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::East
    }
}

impl From<Direction> for usize {
    fn from(direction: Direction) -> Self {
        direction as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        write!(f, "{}", name)
    }
}

pub struct DirectionIter {
    index: usize,
}

impl DirectionIter {
    fn new() -> Self {
        DirectionIter { index: 0 }
    }
}

impl Iterator for DirectionIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.index {
            0 => Some(Direction::North),
            1 => Some(Direction::South),
            2 => Some(Direction::West),
            3 => Some(Direction::East),
            _ => None,
        };
        self.index += 1;
        result
    }
}
