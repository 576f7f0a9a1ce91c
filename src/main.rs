use alien_invasion::prelude::*;
use alien_invasion::world::build_map_from_file;
use clap::Parser;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let mut map = build_map_from_file(&args.map, rng)?;

    // At most two aliens can occupy a city, so the map must be able to seat
    // every alien requested.
    if args.aliens > MAX_OCCUPANCY * map.num_cities() {
        return Err(Error::TooManyAliens {
            aliens: args.aliens,
            cities: map.num_cities(),
        }
        .into());
    }

    map.seed_aliens(args.aliens);

    let mut engine = SimulationEngine::new(&map, args.min_moves, args.suppress_events);
    let elapsed = engine.run(&mut map)?;

    engine.print_summary(&map, elapsed);

    match &args.out {
        Some(path) => fs::write(path, map.to_string())?,
        None => print!("{}", map),
    }

    Ok(())
}
