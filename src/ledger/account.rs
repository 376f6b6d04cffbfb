use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::AccountId;

/// Authenticated caller identity supplied by the host for every operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Surrounding whitespace is not part of the identity.
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Owner {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A named container that transactions are attributed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub owner: Owner,
}

impl Account {
    pub fn new(id: AccountId, owner: Owner, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
        }
    }
}
