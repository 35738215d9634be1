use std::fmt;

/// A phone-book record: a name and the number stored for it.
///
/// Records are never edited in place. Updating a key swaps in a freshly
/// built `Contact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Renders the record as `"<name>: <number>"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
