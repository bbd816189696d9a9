use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

/// Portable public identifier with a string representation.
///
/// Newly generated identifiers are random UUIDs in their
/// simple, lowercase hex representation.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed identifier: '{0}'")]
pub struct IdParseError(String);

impl Id {
    pub fn new() -> Self {
        Uuid::new_v4().into()
    }

    /// Parses and normalizes an identifier received from the outside.
    ///
    /// All textual UUID representations are accepted, e.g. with
    /// or without hyphens and in upper or lower case.
    pub fn parse_uuid(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s.trim())
            .map(Into::into)
            .map_err(|_| IdParseError(s.to_owned()))
    }

    pub fn is_valid(&self) -> bool {
        Uuid::parse_str(&self.0).is_ok()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<String> for Id {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Uuid> for Id {
    fn from(from: Uuid) -> Self {
        from.as_simple().to_string().into()
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        Self::parse_uuid(s)
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
