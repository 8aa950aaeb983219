use std::fmt::{Display, Formatter};

/// A contact record: a name and a phone number. The name doubles as the
/// record's key in a [`ContactTable`](crate::ContactTable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    /// Creates a contact. Neither field is validated
    ///
    /// # Arguments
    ///
    /// `name`: The contact's name
    ///
    /// `number`: The contact's phone number
    pub fn new<N: Into<String>, P: Into<String>>(name: N, number: P) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Returns the contact's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact's phone number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Overwrites the contact's phone number
    ///
    /// # Arguments
    ///
    /// `number`: The new phone number
    pub fn set_number<P: Into<String>>(&mut self, number: P) {
        self.number = number.into();
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
