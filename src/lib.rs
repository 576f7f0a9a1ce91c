//! # Alien Invasion
//!
//! A simulation of an alien invasion on a world map.
//!
//! Aliens wander a directed graph of cities; whenever two of them end up in
//! the same city they fight, destroying themselves and the city along with
//! every road into or out of it. A run ends when all aliens are destroyed or
//! every survivor has moved at least 10,000 times.

pub mod alien;
pub mod cli;
pub mod direction;
pub mod error;
pub mod queue;
pub mod simulation;
pub mod utils;
pub mod world;

pub use alien::Alien;
pub use cli::Args;
pub use direction::Direction;
pub use error::{Error, Result};
pub use simulation::{SimulationEngine, MIN_ALIEN_MOVES};
pub use world::{City, WorldMap, MAX_OCCUPANCY, MAX_OUT_DEGREE};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Alien, Args, Direction, Error, Result, SimulationEngine, WorldMap, MAX_OCCUPANCY,
    };
}
