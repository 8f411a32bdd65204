//! Entity name normalization
//!
//! Turns the raw comma-separated entity list into validated [`EntityName`]s
//! and derives the variable names used inside generated code.

use std::fmt;

use crate::error::{LayergenError, Result};

/// Delimiter between entity names in the raw input
pub const ENTITY_DELIMITER: char = ',';

/// A single entity name taken from the user's entity list
///
/// Always trimmed, never empty and never containing [`ENTITY_DELIMITER`].
/// Case is preserved exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityName(String);

impl EntityName {
    /// Create an entity name from a raw token
    ///
    /// # Errors
    ///
    /// Returns [`LayergenError::InvalidInput`] if the token is blank or
    /// contains the list delimiter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::EntityName;
    /// let name = EntityName::new("  User ").unwrap();
    /// assert_eq!(name.as_str(), "User");
    /// assert!(EntityName::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(LayergenError::invalid_input("entity name cannot be empty"));
        }

        if trimmed.contains(ENTITY_DELIMITER) {
            return Err(LayergenError::invalid_input(format!(
                "entity name cannot contain '{ENTITY_DELIMITER}': '{trimmed}'"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The name as given by the user
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Variable name derived from this entity (see [`lower_first`])
    #[must_use]
    pub fn variable_name(&self) -> String {
        lower_first(self)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a comma-separated entity list into entity names
///
/// Pieces are trimmed, blank pieces are dropped and the left-to-right order
/// is kept. Duplicates are kept as well.
///
/// # Errors
///
/// Returns [`LayergenError::InvalidInput`] if no entity remains.
///
/// # Examples
///
/// ```
/// # use layergen::split_entities;
/// let names = split_entities(" User, ,Role_Admin ,").unwrap();
/// let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
/// assert_eq!(names, ["User", "Role_Admin"]);
///
/// assert!(split_entities(" , ,").is_err());
/// ```
pub fn split_entities(raw: &str) -> Result<Vec<EntityName>> {
    let entities: Vec<EntityName> = raw
        .split(ENTITY_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| EntityName(piece.to_string()))
        .collect();

    if entities.is_empty() {
        return Err(LayergenError::invalid_input(
            "at least one entity name must be specified",
        ));
    }

    Ok(entities)
}

/// Lowercase the first character of an entity name, leaving the rest untouched
///
/// # Examples
///
/// ```
/// # use layergen::{lower_first, EntityName};
/// let name = EntityName::new("Role_Admin").unwrap();
/// assert_eq!(lower_first(&name), "role_Admin");
/// ```
#[must_use]
pub fn lower_first(name: &EntityName) -> String {
    let mut chars = name.as_str().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
