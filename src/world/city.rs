use crate::utils;
use crate::world::map::MAX_OCCUPANCY;
use std::fmt;

/// A graph vertex: a named city with directed links and bounded occupancy.
///
/// Inbound links are stored redundantly so that tearing a destroyed city out
/// of the graph costs O(in-degree) instead of a scan over every city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    name: String,
    out_links: Vec<String>,
    in_links: Vec<String>,
    occupants: Vec<String>,
}

impl City {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            out_links: Vec::new(),
            in_links: Vec::new(),
            occupants: Vec::with_capacity(MAX_OCCUPANCY),
        }
    }

    /// The city's unique name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of cities reachable via an outbound edge
    #[inline]
    pub fn out_links(&self) -> &[String] {
        &self.out_links
    }

    /// Names of cities holding an inbound edge to this city
    #[inline]
    pub fn in_links(&self) -> &[String] {
        &self.in_links
    }

    /// Names of the aliens currently occupying this city
    #[inline]
    pub fn occupants(&self) -> &[String] {
        &self.occupants
    }

    /// Number of outbound edges
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_links.len()
    }

    /// Check whether the city has reached maximum occupancy
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= MAX_OCCUPANCY
    }

    /// Record an outbound edge; repeated links to the same city collapse
    /// into one adjacency entry.
    pub(crate) fn add_out_link(&mut self, destination: &str) {
        if !self.out_links.iter().any(|name| name == destination) {
            self.out_links.push(destination.to_string());
        }
    }

    /// Record an inbound edge, deduplicated like `add_out_link`.
    pub(crate) fn add_in_link(&mut self, origin: &str) {
        if !self.in_links.iter().any(|name| name == origin) {
            self.in_links.push(origin.to_string());
        }
    }

    pub(crate) fn drop_out_link(&mut self, city: &str) {
        utils::remove_first(&mut self.out_links, city);
    }

    pub(crate) fn drop_in_link(&mut self, city: &str) {
        utils::remove_first(&mut self.in_links, city);
    }

    pub(crate) fn add_occupant(&mut self, alien: &str) {
        self.occupants.push(alien.to_string());
    }

    pub(crate) fn remove_occupant(&mut self, alien: &str) {
        utils::remove_first(&mut self.occupants, alien);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{city: {}, outLinks: [{}], inLinks: [{}], occupants: [{}]}}",
            self.name,
            self.out_links.join(", "),
            self.in_links.join(", "),
            self.occupants.join(" "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_creation() {
        let city = City::new("foo");

        assert_eq!(city.name(), "foo");
        assert!(city.out_links().is_empty());
        assert!(city.in_links().is_empty());
        assert!(city.occupants().is_empty());
        assert!(!city.is_full());
        assert_eq!(city.out_degree(), 0);
    }

    #[test]
    fn test_links_deduplicate() {
        let mut city = City::new("foo");

        city.add_out_link("bar");
        city.add_out_link("bar");
        city.add_out_link("baz");
        assert_eq!(city.out_links(), ["bar", "baz"]);
        assert_eq!(city.out_degree(), 2);

        city.add_in_link("bar");
        city.add_in_link("bar");
        assert_eq!(city.in_links(), ["bar"]);
    }

    #[test]
    fn test_drop_links() {
        let mut city = City::new("foo");
        city.add_out_link("bar");
        city.add_out_link("baz");
        city.add_in_link("bar");

        city.drop_out_link("bar");
        assert_eq!(city.out_links(), ["baz"]);

        city.drop_in_link("bar");
        assert!(city.in_links().is_empty());

        // dropping an absent link is a no-op
        city.drop_out_link("qux");
        assert_eq!(city.out_links(), ["baz"]);
    }

    #[test]
    fn test_occupancy() {
        let mut city = City::new("foo");

        city.add_occupant("alien1");
        assert!(!city.is_full());

        city.add_occupant("alien2");
        assert!(city.is_full());
        assert_eq!(city.occupants(), ["alien1", "alien2"]);

        city.remove_occupant("alien1");
        assert!(!city.is_full());
        assert_eq!(city.occupants(), ["alien2"]);
    }

    #[test]
    fn test_display_render() {
        let mut city = City::new("foo");
        city.add_out_link("bar");
        city.add_out_link("baz");
        city.add_in_link("bar");
        city.add_occupant("alien1");
        city.add_occupant("alien2");

        assert_eq!(
            city.to_string(),
            "{city: foo, outLinks: [bar, baz], inLinks: [bar], occupants: [alien1 alien2]}"
        );
    }
}
