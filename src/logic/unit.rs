use std::fmt;

use super::roster::PlayerId;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Ghost {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl Ghost {
    pub const ALL: [Ghost; 4] = [Ghost::Blinky, Ghost::Pinky, Ghost::Inky, Ghost::Clyde];
}

impl fmt::Display for Ghost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ghost::Blinky => "Blinky",
            Ghost::Pinky => "Pinky",
            Ghost::Inky => "Inky",
            Ghost::Clyde => "Clyde",
        };
        write!(f, "{}", name)
    }
}

/// An occupant of the maze that can be held responsible for a death.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Unit {
    Ghost(Ghost),
    Player(PlayerId),
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Ghost(ghost) => write!(f, "{}", ghost),
            Unit::Player(id) => write!(f, "{}", id),
        }
    }
}
