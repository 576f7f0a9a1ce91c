use crate::simulation::MIN_ALIEN_MOVES;
use clap::Parser;

/// CLI arguments for the alien invasion simulation
#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "👽 Alien invasion simulator")]
pub struct Args {
    /// Number of aliens
    #[arg(short = 'n', long = "aliens")]
    pub aliens: usize,

    /// Path to the map definition file
    #[arg(short = 'm', long = "map")]
    pub map: String,

    /// File to write the surviving map to (stdout if omitted)
    #[arg(short = 'o', long = "out")]
    pub out: Option<String>,

    /// Moves each alien must make before the run can end
    #[arg(long, default_value_t = MIN_ALIEN_MOVES)]
    pub min_moves: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress fight logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
