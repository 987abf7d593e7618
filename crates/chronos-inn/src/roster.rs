//! The patrons who may visit the inn over an evening.

use serde::{Deserialize, Serialize};

use crate::error::{InnError, InnResult};

/// A regular of the inn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    /// Patron name.
    pub name: String,
    /// What they do for a living, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl Patron {
    /// Create a patron with an occupation.
    pub fn new(name: impl Into<String>, occupation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupation: Some(occupation.into()),
        }
    }

    /// Name followed by occupation, e.g. `Sal the cobbler`.
    pub fn label(&self) -> String {
        match &self.occupation {
            Some(occupation) => format!("{} the {}", self.name, occupation),
            None => self.name.clone(),
        }
    }
}

/// Ordered list of patrons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronRoster {
    patrons: Vec<Patron>,
}

impl PatronRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a roster from JSON of the form `{"patrons": [{"name": ..., "occupation": ...}]}`.
    pub fn from_json(json: &str) -> InnResult<Self> {
        let roster: Self = serde_json::from_str(json)?;
        if roster.patrons.is_empty() {
            return Err(InnError::EmptyRoster);
        }
        Ok(roster)
    }

    /// The town regulars.
    pub fn regulars() -> Self {
        let mut roster = Self::new();
        for (name, occupation) in [
            ("Sal", "cobbler"),
            ("Scruffy", "hermit"),
            ("Boren", "blacksmith"),
            ("Meladriel", "courtesan"),
            ("Aragon", "captain of the guard"),
            ("Matilda", "matron"),
            ("Perrin", "archer"),
            ("Gorbal", "thief"),
            ("Balthazar", "monastery master"),
            ("Pendergast", "arcaneum master"),
        ] {
            roster.add(Patron::new(name, occupation));
        }
        roster
    }

    /// Add a patron.
    pub fn add(&mut self, patron: Patron) {
        self.patrons.push(patron);
    }

    /// All patrons.
    pub fn list(&self) -> &[Patron] {
        &self.patrons
    }

    /// Find a patron by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Patron> {
        self.patrons
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Number of patrons.
    pub fn count(&self) -> usize {
        self.patrons.len()
    }
}
