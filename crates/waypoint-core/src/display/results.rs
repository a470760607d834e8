//! Wrapper types for displaying operation outcomes.

use std::fmt;

use uuid::Uuid;

/// Confirmation that a record was created.
pub struct Created {
    pub kind: &'static str,
    pub id: Uuid,
}

impl fmt::Display for Created {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", self.kind, self.id)
    }
}

/// Confirmation that a record was updated.
pub struct Updated {
    pub kind: &'static str,
    pub id: Uuid,
}

impl fmt::Display for Updated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", self.kind, self.id)
    }
}

/// Confirmation that a record was deleted.
pub struct Deleted {
    pub kind: &'static str,
    pub id: Uuid,
}

impl fmt::Display for Deleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} with ID: {}", self.kind, self.id)
    }
}

/// A list of records separated by blank lines, or a placeholder line when
/// there are none.
pub struct Listing<'a, T> {
    /// Plural noun used in the placeholder, e.g. "tasks"
    pub plural: &'static str,
    pub items: &'a [T],
}

impl<'a, T> Listing<'a, T> {
    pub fn new(plural: &'static str, items: &'a [T]) -> Self {
        Self { plural, items }
    }
}

impl<'a, T: fmt::Display> fmt::Display for Listing<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No {} found.", self.plural);
        }
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
