/// A mobile agent occupying exactly one city at a time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    name: String,
    location: String,
}

impl Alien {
    /// Create a new alien at the given city
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// The alien's unique name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the city the alien currently occupies
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Move the alien to a new city
    pub fn relocate(&mut self, city: impl Into<String>) {
        self.location = city.into();
    }
}
