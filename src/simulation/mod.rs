pub mod engine;

pub use engine::{SimulationEngine, MIN_ALIEN_MOVES};
