use crate::error::Error;
use std::str::FromStr;

/// The closed set of link directions a map definition may use.
///
/// Directions exist only to validate link construction; once an edge is in
/// the graph the direction is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("north") {
            Ok(Direction::North)
        } else if s.eq_ignore_ascii_case("south") {
            Ok(Direction::South)
        } else if s.eq_ignore_ascii_case("east") {
            Ok(Direction::East)
        } else if s.eq_ignore_ascii_case("west") {
            Ok(Direction::West)
        } else {
            Err(Error::InvalidDirection(s.to_string()))
        }
    }
}
