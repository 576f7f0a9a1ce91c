use std::fmt;

/// Error types for the alien invasion simulation
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// Invalid line format in the map definition file
    InvalidLine(String),
    /// Invalid direction string
    InvalidDirection(String),
    /// More aliens requested than the map can seat (2 per city)
    TooManyAliens { aliens: usize, cities: usize },
    /// No alien anywhere in the map has a legal move left
    NoLegalMove,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            Error::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            Error::TooManyAliens { aliens, cities } => write!(
                f,
                "Invalid number of aliens: {} exceeds twice the number of cities ({})",
                aliens, cities
            ),
            Error::NoLegalMove => write!(f, "Unable to move any alien"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
