//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for component identifiers.
//! Construction is the only validation path: a `ComponentId` that exists
//! always satisfies the catalog token invariant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum accepted identifier length.
pub const MIN_ID_LEN: usize = 4;

/// Maximum accepted identifier length.
pub const MAX_ID_LEN: usize = 20;

/// Component identifier newtype wrapper
///
/// Represents a normalized (uppercased) token referencing a part in an
/// external parts catalog, e.g. `C12345` or `STM32F103-C8T6`.
///
/// Invariant: starts with a letter, contains at least one letter and one
/// digit, is 4–20 characters long, and consists only of letters, digits,
/// hyphen and underscore.
///
/// # Examples
///
/// ```
/// use partex::domain::ids::ComponentId;
///
/// let id = ComponentId::new("c12345").unwrap();
/// assert_eq!(id.as_str(), "C12345");
/// assert!(ComponentId::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a new ComponentId from a string
    ///
    /// The input is trimmed and uppercased before validation.
    ///
    /// # Errors
    ///
    /// Returns a description of the violated rule if the token is not a
    /// valid component identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let normalized = id.into().trim().to_uppercase();
        validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Checks the component identifier invariant over an already-normalized
/// (uppercased) token.
fn validate(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("component identifier cannot be empty".to_string());
    }
    if id.len() < MIN_ID_LEN || id.len() > MAX_ID_LEN {
        return Err(format!(
            "component identifier must be {MIN_ID_LEN}-{MAX_ID_LEN} characters, got {} ({id})",
            id.len()
        ));
    }
    if !id.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(format!(
            "component identifier must start with a letter: {id}"
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "component identifier may only contain letters, digits, '-' and '_': {id}"
        ));
    }
    if !id.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!(
            "component identifier must contain at least one digit: {id}"
        ));
    }
    Ok(())
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComponentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}
