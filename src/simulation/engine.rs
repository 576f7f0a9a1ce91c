use crate::error::Result;
use crate::world::{Fight, WorldMap};
use colored::Colorize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of moves each alien must make before a run may end without
/// extinction
pub const MIN_ALIEN_MOVES: u32 = 10_000;

/// Drives the move/fight loop until the population is destroyed or every
/// surviving alien has exhausted its move budget.
pub struct SimulationEngine {
    /// Remaining move counts, keyed by alien name. An alien leaves this map
    /// once it reaches the threshold or dies, so an empty map means every
    /// survivor is done moving.
    alien_moves: HashMap<String, u32>,
    min_moves: u32,
    suppress_events: bool,
    destroyed_cities: usize,
    destroyed_aliens: usize,
}

impl SimulationEngine {
    /// Create an engine tracking every alien currently on the map
    pub fn new(map: &WorldMap, min_moves: u32, suppress_events: bool) -> Self {
        let alien_moves = map
            .alien_names()
            .into_iter()
            .map(|name| (name, 0))
            .collect();

        Self {
            alien_moves,
            min_moves,
            suppress_events,
            destroyed_cities: 0,
            destroyed_aliens: 0,
        }
    }

    /// Run the simulation to completion.
    ///
    /// Fights are resolved once up front, since seeding fills cities to
    /// capacity. Each iteration then moves a single alien, counts the move,
    /// and resolves any fight that move caused. A failed move is fatal: it
    /// means no alien anywhere has a legal destination.
    pub fn run(&mut self, map: &mut WorldMap) -> Result<Duration> {
        let start = Instant::now();

        self.resolve_fights(map);

        while self.can_continue(map) {
            let alien_name = map.move_alien()?;

            if let Some(count) = self.alien_moves.get_mut(&alien_name) {
                *count += 1;
                if *count >= self.min_moves {
                    self.alien_moves.remove(&alien_name);
                }
            }

            self.resolve_fights(map);
        }

        Ok(start.elapsed())
    }

    /// Number of cities destroyed so far
    pub fn destroyed_cities(&self) -> usize {
        self.destroyed_cities
    }

    /// Number of aliens destroyed so far
    pub fn destroyed_aliens(&self) -> usize {
        self.destroyed_aliens
    }

    fn resolve_fights(&mut self, map: &mut WorldMap) {
        for fight in map.execute_fights() {
            self.destroyed_cities += 1;
            self.destroyed_aliens += fight.casualties.len();
            for name in &fight.casualties {
                self.alien_moves.remove(name);
            }
            self.log_destruction(&fight);
        }
    }

    fn can_continue(&self, map: &WorldMap) -> bool {
        map.num_aliens() > 0 && !self.alien_moves.is_empty()
    }

    fn log_destruction(&self, fight: &Fight) {
        if self.suppress_events {
            return;
        }
        println!(
            "{} {} {} {}",
            "💥".red(),
            fight.city.bright_red(),
            "has been destroyed by".red(),
            fight.casualties.join(" and ").yellow()
        );
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self, map: &WorldMap, elapsed: Duration) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("destroyed_cities={}", self.destroyed_cities).cyan(),
            format!("destroyed_aliens={}", self.destroyed_aliens).cyan(),
            format!("survivors={}", map.num_cities()).cyan(),
        );
    }
}
