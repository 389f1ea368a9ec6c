//! Grid coordinates and compass directions

use std::fmt;

/// A room's position in the dungeon grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate in `dir`, if it stays inside an N x N grid
    pub fn step(&self, dir: Direction, size: usize) -> Option<Coord> {
        let (x, y) = (self.x, self.y);
        let next = match dir {
            Direction::North => Coord::new(x, y.checked_add(1)?),
            Direction::South => Coord::new(x, y.checked_sub(1)?),
            Direction::East => Coord::new(x.checked_add(1)?, y),
            Direction::West => Coord::new(x.checked_sub(1)?, y),
        };
        (next.x < size && next.y < size).then_some(next)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Exit directions. North is +y, east is +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse a lower-case direction word
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Lower-case name used in commands
    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Capitalized name used in narration
    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_in_bounds() {
        let c = Coord::new(0, 0);
        assert_eq!(c.step(Direction::North, 5), Some(Coord::new(0, 1)));
        assert_eq!(c.step(Direction::East, 5), Some(Coord::new(1, 0)));
        assert_eq!(c.step(Direction::South, 5), None);
        assert_eq!(c.step(Direction::West, 5), None);
        assert_eq!(Coord::new(4, 4).step(Direction::North, 5), None);
    }

    #[test]
    fn test_parse_and_opposite() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("w"), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
