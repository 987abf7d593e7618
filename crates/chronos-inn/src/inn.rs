//! The inn: the world the patron and player commands act on.

/// Name of the inn when none is given.
pub const DEFAULT_NAME: &str = "the Ugly Ogre Inn";

/// Default number of patrons the common room holds.
pub const DEFAULT_CAPACITY: usize = 8;

/// The common room of an inn and the notices raised in it.
#[derive(Debug, Clone)]
pub struct Inn {
    name: String,
    capacity: usize,
    present: Vec<String>,
    open: bool,
    notices: Vec<String>,
}

impl Inn {
    /// Create an open, empty inn.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            present: Vec::new(),
            open: true,
            notices: Vec::new(),
        }
    }

    /// The inn's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of patrons inside at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Let a patron in. Fails when the inn is closed, full, or they are
    /// already inside.
    pub fn add(&mut self, patron: &str) -> bool {
        if !self.open || self.is_full() || self.contains(patron) {
            return false;
        }
        self.present.push(patron.to_string());
        true
    }

    /// Remove a patron. Returns true if they were inside.
    pub fn remove(&mut self, patron: &str) -> bool {
        let before = self.present.len();
        self.present.retain(|p| !p.eq_ignore_ascii_case(patron));
        self.present.len() < before
    }

    /// Whether the patron is inside (case-insensitive).
    pub fn contains(&self, patron: &str) -> bool {
        self.present.iter().any(|p| p.eq_ignore_ascii_case(patron))
    }

    /// Patrons inside, in order of arrival.
    pub fn patrons(&self) -> &[String] {
        &self.present
    }

    /// Number of patrons inside.
    pub fn occupancy(&self) -> usize {
        self.present.len()
    }

    /// Whether the common room is at capacity.
    pub fn is_full(&self) -> bool {
        self.present.len() >= self.capacity
    }

    /// Whether the inn is still letting people in.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the doors and send everyone home. Returns who was turned out.
    pub fn close(&mut self) -> Vec<String> {
        self.open = false;
        std::mem::take(&mut self.present)
    }

    /// Record something the player should be told.
    pub fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Take all notices raised since the last call.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl Default for Inn {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut inn = Inn::new("Test", 2);
        assert!(inn.add("Sal"));
        assert!(inn.contains("sal"));
        assert!(!inn.add("Sal"));
        assert!(inn.remove("SAL"));
        assert!(!inn.remove("Sal"));
        assert_eq!(inn.occupancy(), 0);
    }

    #[test]
    fn full_inn_turns_patrons_away() {
        let mut inn = Inn::new("Test", 1);
        assert!(inn.add("Sal"));
        assert!(inn.is_full());
        assert!(!inn.add("Boren"));
        assert_eq!(inn.patrons(), ["Sal".to_string()]);
    }

    #[test]
    fn close_empties_and_locks() {
        let mut inn = Inn::default();
        inn.add("Sal");
        inn.add("Boren");
        let out = inn.close();
        assert_eq!(out, vec!["Sal", "Boren"]);
        assert!(!inn.is_open());
        assert!(!inn.add("Matilda"));
    }

    #[test]
    fn notices_drain() {
        let mut inn = Inn::default();
        inn.notice("hello");
        inn.notice("again");
        assert_eq!(inn.drain_notices(), vec!["hello", "again"]);
        assert!(inn.drain_notices().is_empty());
    }
}
