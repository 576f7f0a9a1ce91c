pub mod city;
pub mod map;
pub mod parser;

pub use city::City;
pub use map::{Fight, WorldMap, MAX_OCCUPANCY, MAX_OUT_DEGREE};
pub use parser::{build_map_from_file, build_map_from_str};
