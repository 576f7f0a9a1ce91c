use crate::alien::Alien;
use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::queue::{Priority, PriorityQueue};
use crate::utils;
use crate::world::city::City;
use std::collections::HashMap;
use std::fmt;

/// Maximum number of aliens that may occupy any given city
pub const MAX_OCCUPANCY: usize = 2;

/// Maximum number of outbound edges from a city, one per compass direction
pub const MAX_OUT_DEGREE: usize = 4;

/// The outcome of a single city destruction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fight {
    /// Name of the destroyed city
    pub city: String,
    /// Names of the aliens destroyed with it
    pub casualties: Vec<String>,
}

/// The world map: a directed graph of cities plus the aliens occupying them.
///
/// The map is the single mutable root. Cities and aliens are owned by it
/// exclusively and referenced everywhere else by name only. The map also
/// owns its RNG so that seeded runs replay identically.
#[derive(Debug)]
pub struct WorldMap {
    cities: HashMap<String, City>,
    aliens: HashMap<String, Alien>,
    rng: fastrand::Rng,
}

/// Seeding candidate: cities with more ways out take aliens first, so early
/// moves are always available.
struct SeedCandidate {
    name: String,
    out_degree: usize,
}

impl Priority for SeedCandidate {
    fn higher_priority(&self, other: &Self) -> bool {
        self.out_degree > other.out_degree
    }
}

impl WorldMap {
    /// Create an empty map with a randomly seeded RNG
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Create an empty map that shuffles with the given RNG
    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            cities: HashMap::new(),
            aliens: HashMap::new(),
            rng,
        }
    }

    /// Total number of unique cities in the map
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Total number of aliens currently occupying a city
    pub fn num_aliens(&self) -> usize {
        self.aliens.len()
    }

    /// Names of all cities in the map
    pub fn city_names(&self) -> Vec<String> {
        self.cities.keys().cloned().collect()
    }

    /// Names of all aliens in the map
    pub fn alien_names(&self) -> Vec<String> {
        self.aliens.keys().cloned().collect()
    }

    /// Look up a city by name
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Look up an alien by name
    pub fn alien(&self, name: &str) -> Option<&Alien> {
        self.aliens.get(name)
    }

    /// Add a city to the map if it is not already present
    pub fn add_city(&mut self, name: &str) {
        if !self.cities.contains_key(name) {
            self.cities.insert(name.to_string(), City::new(name));
        }
    }

    /// Add a directed edge from `origin` to `destination`.
    ///
    /// Unknown cities are created on first mention. The direction token is
    /// validated against the four compass directions (case-insensitive) and
    /// then discarded; links are stored as unlabeled adjacency. Linking the
    /// same pair again, under any direction, leaves the adjacency unchanged.
    pub fn add_link(&mut self, origin: &str, direction: &str, destination: &str) -> Result<()> {
        direction.parse::<Direction>()?;

        self.add_city(origin);
        self.add_city(destination);

        if let Some(city) = self.cities.get_mut(origin) {
            city.add_out_link(destination);
        }
        if let Some(city) = self.cities.get_mut(destination) {
            city.add_in_link(origin);
        }

        Ok(())
    }

    /// Seed `n` aliens into the map, naming them `alien1..alienN`.
    ///
    /// Cities are filled in descending out-degree order, each up to
    /// `MAX_OCCUPANCY`, so no alien starts somewhere it cannot leave while a
    /// connected city still has room. Callers must ensure
    /// `n <= MAX_OCCUPANCY * num_cities()`; violating that is a
    /// configuration error upstream, not detected here.
    pub fn seed_aliens(&mut self, n: usize) {
        // HashMap iteration order varies per map instance; load the queue in
        // sorted-name order so ties resolve the same way on every run
        let mut city_names = self.city_names();
        city_names.sort();

        let mut queue = PriorityQueue::new();
        for name in city_names {
            if let Some(city) = self.cities.get(&name) {
                queue.push(SeedCandidate {
                    out_degree: city.out_degree(),
                    name,
                });
            }
        }

        let mut placed = 0;
        while placed < n {
            let candidate = match queue.pop() {
                Some(candidate) => candidate,
                None => break,
            };
            let city = match self.cities.get_mut(&candidate.name) {
                Some(city) => city,
                None => continue,
            };

            while placed < n && !city.is_full() {
                placed += 1;
                let alien_name = format!("alien{}", placed);
                city.add_occupant(&alien_name);
                self.aliens
                    .insert(alien_name.clone(), Alien::new(alien_name, city.name()));
            }
        }
    }

    /// Move one alien to a neighboring city with spare occupancy.
    ///
    /// Aliens are considered in shuffled order, and each candidate's out
    /// links are scanned in a freshly shuffled order; the first destination
    /// under `MAX_OCCUPANCY` wins. Exactly one alien moves per call. Returns
    /// the mover's name, or `Error::NoLegalMove` when no alien anywhere has
    /// a viable destination.
    pub fn move_alien(&mut self) -> Result<String> {
        // sort before shuffling so the shuffle is the only source of
        // randomness and a seeded RNG replays the same move sequence
        let mut alien_names = self.alien_names();
        alien_names.sort();
        utils::shuffle(&mut alien_names, &mut self.rng);

        for alien_name in alien_names {
            let origin_name = match self.aliens.get(&alien_name) {
                Some(alien) => alien.location().to_string(),
                None => continue,
            };
            let mut links = match self.cities.get(&origin_name) {
                Some(city) => city.out_links().to_vec(),
                None => continue,
            };
            utils::shuffle(&mut links, &mut self.rng);

            for link_name in links {
                let has_room = self
                    .cities
                    .get(&link_name)
                    .is_some_and(|city| !city.is_full());
                if !has_room {
                    continue;
                }

                if let Some(origin) = self.cities.get_mut(&origin_name) {
                    origin.remove_occupant(&alien_name);
                }
                if let Some(destination) = self.cities.get_mut(&link_name) {
                    destination.add_occupant(&alien_name);
                }
                if let Some(alien) = self.aliens.get_mut(&alien_name) {
                    alien.relocate(&link_name);
                }

                return Ok(alien_name);
            }
        }

        Err(Error::NoLegalMove)
    }

    /// Resolve fights in every city at maximum occupancy.
    ///
    /// Each such city is destroyed together with its occupants and every
    /// edge referencing it. All cities at capacity in the same pass are
    /// destroyed; since a city can be at capacity only once, the order among
    /// them does not affect the final graph.
    pub fn execute_fights(&mut self) -> Vec<Fight> {
        let mut full_cities: Vec<String> = self
            .cities
            .values()
            .filter(|city| city.is_full())
            .map(|city| city.name().to_string())
            .collect();
        // destruction order cannot affect the final graph, but a stable
        // order keeps the fight log reproducible under a fixed seed
        full_cities.sort();

        let mut fights = Vec::with_capacity(full_cities.len());
        for name in full_cities {
            if let Some(casualties) = self.destroy_city(&name) {
                fights.push(Fight {
                    city: name,
                    casualties,
                });
            }
        }

        fights
    }

    /// Remove a city, its occupants, and every edge into or out of it.
    ///
    /// The redundant in-link bookkeeping makes this O(degree) instead of a
    /// scan over the whole city map. Returns the destroyed occupants.
    fn destroy_city(&mut self, name: &str) -> Option<Vec<String>> {
        let city = self.cities.remove(name)?;

        let casualties = city.occupants().to_vec();
        for alien_name in &casualties {
            self.aliens.remove(alien_name);
        }

        for in_name in city.in_links() {
            if let Some(neighbor) = self.cities.get_mut(in_name) {
                neighbor.drop_out_link(name);
            }
        }
        for out_name in city.out_links() {
            if let Some(neighbor) = self.cities.get_mut(out_name) {
                neighbor.drop_in_link(name);
            }
        }

        Some(casualties)
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorldMap {
    /// One line per surviving city, in name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.city_names();
        names.sort();
        for name in names {
            if let Some(city) = self.cities.get(&name) {
                writeln!(f, "{}", city)?;
            }
        }
        Ok(())
    }
}
