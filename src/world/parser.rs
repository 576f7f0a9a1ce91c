use crate::error::{Error, Result};
use crate::world::map::{WorldMap, MAX_OUT_DEGREE};
use std::fs;
use std::path::Path;

/// Build a world map from a map definition file.
///
/// One city per line: the city name first, then up to four
/// `direction=destination` tokens separated by single spaces. Blank lines
/// are skipped. A line with no links registers an isolated city.
pub fn build_map_from_file(path: impl AsRef<Path>, rng: fastrand::Rng) -> Result<WorldMap> {
    let contents = fs::read_to_string(path)?;
    build_map_from_str(&contents, rng)
}

/// Build a world map from an in-memory map definition.
pub fn build_map_from_str(src: &str, rng: fastrand::Rng) -> Result<WorldMap> {
    let mut map = WorldMap::with_rng(rng);

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let origin = tokens
            .next()
            .ok_or_else(|| Error::InvalidLine(raw.to_string()))?;
        map.add_city(origin);

        for token in tokens {
            let (direction, destination) = token
                .split_once('=')
                .ok_or_else(|| Error::InvalidLine(raw.to_string()))?;

            map.add_link(origin, direction, destination)?;

            // the out-degree cap is enforced here at the construction call
            // site, cumulatively: a city may be named on several lines
            let degree = map.city(origin).map_or(0, |city| city.out_degree());
            if degree > MAX_OUT_DEGREE {
                return Err(Error::InvalidLine(raw.to_string()));
            }
        }
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<WorldMap> {
        build_map_from_str(src, fastrand::Rng::with_seed(1))
    }

    #[test]
    fn test_parse_basic_map() {
        let map = parse("foo north=bar\nbar south=foo\n").unwrap();

        assert_eq!(map.num_cities(), 2);
        assert_eq!(map.city("foo").unwrap().out_links(), ["bar"]);
        assert_eq!(map.city("bar").unwrap().out_links(), ["foo"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let map = parse("foo north=bar\n\n   \nbar south=foo\n").unwrap();
        assert_eq!(map.num_cities(), 2);
    }

    #[test]
    fn test_parse_multiple_links_per_line() {
        let map = parse("foo north=bar east=baz west=qu-ux\n").unwrap();

        assert_eq!(map.num_cities(), 4);
        let mut out = map.city("foo").unwrap().out_links().to_vec();
        out.sort();
        assert_eq!(out, ["bar", "baz", "qu-ux"]);
    }

    #[test]
    fn test_parse_bare_line_registers_isolated_city() {
        let map = parse("foo north=bar\nlonely\n").unwrap();

        assert_eq!(map.num_cities(), 3);
        let lonely = map.city("lonely").unwrap();
        assert!(lonely.out_links().is_empty());
        assert!(lonely.in_links().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_link_token() {
        let result = parse("foo northbar\n");
        assert!(matches!(result, Err(Error::InvalidLine(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_direction() {
        let result = parse("foo upward=bar\n");
        assert!(matches!(result, Err(Error::InvalidDirection(_))));
    }

    #[test]
    fn test_parse_rejects_too_many_links() {
        let result = parse("foo north=a south=b east=c west=d north=e\n");
        assert!(matches!(result, Err(Error::InvalidLine(_))));
    }

    #[test]
    fn test_parse_accumulates_links_across_lines() {
        let map = parse("foo north=a east=b\nfoo south=c\n").unwrap();
        assert_eq!(map.city("foo").unwrap().out_degree(), 3);
    }

    #[test]
    fn test_parse_rejects_out_degree_overflow_across_lines() {
        let result = parse("foo north=a east=b\nfoo south=c west=d north=e\n");
        assert!(matches!(result, Err(Error::InvalidLine(_))));
    }
}
